//! # Fractile
//!
//! A pan/zoomable tiled-plane viewer engine.
//!
//! Fractile maps a continuous 2D plane (in the reference deployment, a
//! complex-plane region) onto a grid of fixed-size square image tiles
//! fetched from a remote source, keeps exactly the visible tiles alive,
//! and turns drag / wheel / pinch input into camera updates. Rendering is
//! abstracted behind the [`TileRenderer`] capability trait so the engine
//! works with any retained-mode tree, immediate-mode canvas, or native
//! widget backend.

pub mod core;
pub mod input;
pub mod status;
pub mod tiles;
pub mod viewer;

pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{camera::Camera, config::ViewerConfig};
pub use crate::input::{events::InputEvent, gestures::GestureInterpreter};
pub use crate::status::{PlaneMapping, StatusObserver};
pub use crate::tiles::{
    key::{TileAddress, TileKey},
    renderer::{TileHandle, TileRenderer},
    set::TileSet,
};
pub use crate::viewer::Viewer;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Tile load error: {0}")]
    TileLoad(String),
}

/// Error type alias for convenience
pub type Error = ViewerError;
