use crate::core::geometry::Point;
use serde::{Deserialize, Serialize};

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Individual touch point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    pub position: Point,
}

impl TouchPoint {
    pub fn new(id: u64, position: Point) -> Self {
        Self { id, position }
    }
}

/// Input events fed into the gesture interpreter. Positions are
/// container-local pixels; the host adapter is responsible for translating
/// out of its own event coordinate space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown { position: Point, button: MouseButton },
    PointerMove { position: Point },
    PointerUp,
    /// Wheel scroll over the surface; `delta_y` positive means scroll
    /// down/away.
    Wheel { delta_y: f64, position: Point },
    /// Active touch points after fingers went down.
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    /// Touch points still active after fingers lifted.
    TouchEnd { touches: Vec<TouchPoint> },
    /// Container resized.
    Resize { width: f64, height: f64 },
}

/// Whether an event was consumed by the viewer. Hosts should suppress the
/// platform's default behavior (text selection, page scroll, context menu,
/// pull-to-refresh) for handled events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl InputEvent {
    /// Gets the primary position associated with this event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerDown { position, .. } => Some(*position),
            InputEvent::PointerMove { position } => Some(*position),
            InputEvent::Wheel { position, .. } => Some(*position),
            InputEvent::TouchStart { touches }
            | InputEvent::TouchMove { touches }
            | InputEvent::TouchEnd { touches } => touches.first().map(|t| t.position),
            InputEvent::PointerUp | InputEvent::Resize { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        let down = InputEvent::PointerDown {
            position: Point::new(10.0, 20.0),
            button: MouseButton::Left,
        };
        assert_eq!(down.position(), Some(Point::new(10.0, 20.0)));
        assert_eq!(InputEvent::PointerUp.position(), None);

        let touch = InputEvent::TouchStart {
            touches: vec![TouchPoint::new(1, Point::new(5.0, 6.0))],
        };
        assert_eq!(touch.position(), Some(Point::new(5.0, 6.0)));
    }
}
