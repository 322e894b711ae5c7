pub mod events;
pub mod gestures;

pub use events::{EventHandled, InputEvent, MouseButton, TouchPoint};
pub use gestures::{Action, GestureInterpreter, ScrollAccumulator};
