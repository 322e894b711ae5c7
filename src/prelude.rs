//! Prelude module for common fractile types and traits.
//!
//! Re-exports the most commonly used types for easy importing with
//! `use fractile::prelude::*;`

pub use crate::core::{
    camera::{world_pixel_size, Camera},
    config::ViewerConfig,
    geometry::{Point, ViewportSize},
};

pub use crate::input::{
    events::{EventHandled, InputEvent, MouseButton, TouchPoint},
    gestures::{Action, GestureInterpreter, ScrollAccumulator},
};

pub use crate::status::{PlaneMapping, StatusLine, StatusObserver};

pub use crate::tiles::{
    cache::TileCache,
    key::{TileAddress, TileKey},
    loader::{TileFetcher, TileLoader},
    renderer::{TileHandle, TileRenderer},
    set::{visible_tiles, ReconcileStats, TileSet},
    source::{PlaneTileSource, TileSource},
};

pub use crate::viewer::Viewer;

pub use crate::{Error as ViewerError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
