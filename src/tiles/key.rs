use serde::{Deserialize, Serialize};

/// Number of tiles per axis at a zoom level (`2^zoom`).
pub fn tiles_per_axis(zoom: u8) -> u64 {
    1u64 << zoom
}

/// Unique identifier of one tile of the plane at a given zoom level.
/// Indices are 64-bit: at the deepest reference zoom (45) the grid is
/// `2^45` tiles per axis, past what fits in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileKey {
    pub x: u64,
    pub y: u64,
    pub zoom: u8,
}

impl TileKey {
    pub fn new(x: u64, y: u64, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Whether the indices fall inside the `2^zoom` grid.
    pub fn is_valid(&self) -> bool {
        let n = tiles_per_axis(self.zoom);
        self.x < n && self.y < n
    }
}

/// Full load address of a tile: grid position plus the resolution scale
/// (device pixel ratio, 1..=3) fixed at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileAddress {
    pub key: TileKey,
    pub scale: u8,
}

impl TileAddress {
    pub fn new(key: TileKey, scale: u8) -> Self {
        Self { key, scale }
    }
}
