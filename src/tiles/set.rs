//! The tile set manager: visible-range computation and reconciliation of
//! the display set against it.
//!
//! The manager exclusively owns the `TileKey -> TileHandle` mapping. It
//! never mutates the camera; it only reads it to decide which tiles must
//! exist and where they sit in container-local pixels.

use crate::core::{
    camera::Camera,
    geometry::ViewportSize,
};
use crate::tiles::{
    key::{tiles_per_axis, TileAddress, TileKey},
    renderer::{TileHandle, TileRenderer},
};
use fxhash::{FxHashMap, FxHashSet};

/// Outcome of one reconciliation pass, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub created: usize,
    pub retained: usize,
    pub evicted: usize,
}

/// Computes the exact set of tile keys whose pixel region overlaps the
/// viewport. The inclusive index range per axis is
/// `[floor(origin/ts), floor((origin+extent)/ts)]`, clamped to the grid.
/// Empty when the viewport has no area, or when the clamped range inverts
/// (viewport entirely outside the plane; unreachable under normal panning
/// but handled defensively).
pub fn visible_tiles(camera: &Camera, tile_size: u32, viewport: ViewportSize) -> Vec<TileKey> {
    if viewport.is_empty() {
        return Vec::new();
    }

    let ts = tile_size as f64;
    let origin = camera.world_origin(tile_size, viewport);
    let last = (tiles_per_axis(camera.zoom) - 1) as i64;

    // Saturating float-to-int casts keep extreme centers from wrapping.
    let min_x = ((origin.x / ts).floor() as i64).max(0);
    let min_y = ((origin.y / ts).floor() as i64).max(0);
    let max_x = (((origin.x + viewport.width) / ts).floor() as i64).min(last);
    let max_y = (((origin.y + viewport.height) / ts).floor() as i64).min(last);

    if min_x > max_x || min_y > max_y {
        return Vec::new();
    }

    let mut keys =
        Vec::with_capacity(((max_x - min_x + 1) * (max_y - min_y + 1)) as usize);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            keys.push(TileKey::new(x as u64, y as u64, camera.zoom));
        }
    }
    keys
}

/// Owns the live tile handles and reconciles them against the visible set.
pub struct TileSet {
    handles: FxHashMap<TileKey, TileHandle>,
    resolution_scale: u8,
}

impl TileSet {
    pub fn new(resolution_scale: u8) -> Self {
        Self {
            handles: FxHashMap::default(),
            resolution_scale,
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, key: &TileKey) -> bool {
        self.handles.contains_key(key)
    }

    /// Brings the handle mapping to exactly the visible set for the given
    /// camera and viewport: creates missing tiles (issuing their load
    /// address), positions every visible tile, then releases stale ones.
    /// A still-visible tile is repositioned, never released and recreated,
    /// so its image load is undisturbed. Idempotent; safe on every camera
    /// change and resize.
    pub fn reconcile(
        &mut self,
        renderer: &mut dyn TileRenderer,
        camera: &Camera,
        tile_size: u32,
        viewport: ViewportSize,
    ) -> ReconcileStats {
        let visible = visible_tiles(camera, tile_size, viewport);
        let origin = camera.world_origin(tile_size, viewport);
        let ts = tile_size as f64;

        let mut stats = ReconcileStats::default();
        let needed: FxHashSet<TileKey> = visible.iter().copied().collect();

        for key in &visible {
            let handle = match self.handles.get(key) {
                Some(&handle) => {
                    stats.retained += 1;
                    handle
                }
                None => {
                    let address = TileAddress::new(*key, self.resolution_scale);
                    let handle = renderer.create_tile(*key, address);
                    self.handles.insert(*key, handle);
                    stats.created += 1;
                    handle
                }
            };
            renderer.position_tile(
                handle,
                key.x as f64 * ts - origin.x,
                key.y as f64 * ts - origin.y,
            );
        }

        self.handles.retain(|key, handle| {
            if needed.contains(key) {
                true
            } else {
                renderer.release_tile(*handle);
                stats.evicted += 1;
                false
            }
        });

        log::debug!(
            "reconcile z={} created={} retained={} evicted={}",
            camera.zoom,
            stats.created,
            stats.retained,
            stats.evicted
        );
        stats
    }

    /// Releases every handle; used at teardown.
    pub fn release_all(&mut self, renderer: &mut dyn TileRenderer) {
        for (_, handle) in self.handles.drain() {
            renderer.release_tile(handle);
        }
    }
}
