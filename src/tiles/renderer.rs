//! Rendering-backend capability boundary.
//!
//! The engine never touches a display tree directly. A backend mints an
//! opaque handle when asked to create a tile, is told where to place it on
//! every reconciliation, and releases it when the tile leaves the visible
//! set. Any retained-mode UI tree, immediate-mode canvas, or native widget
//! can sit behind this trait.

use crate::tiles::key::{TileAddress, TileKey};

/// Opaque, backend-minted identifier for one displayed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileHandle(pub u64);

pub trait TileRenderer {
    /// Creates a display element for `key` and starts loading the image at
    /// `address`. Image loading is fire-and-forget: the engine never awaits
    /// it, and a load that resolves after the handle is released must be a
    /// harmless no-op.
    fn create_tile(&mut self, key: TileKey, address: TileAddress) -> TileHandle;

    /// Positions a tile at a container-relative pixel offset. Called for
    /// every visible tile on every reconciliation, including freshly
    /// created ones.
    fn position_tile(&mut self, handle: TileHandle, x: f64, y: f64);

    /// Detaches and releases a tile's display element.
    fn release_tile(&mut self, handle: TileHandle);
}
