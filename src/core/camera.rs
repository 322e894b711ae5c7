//! Camera state and the coordinate transforms built on it.
//!
//! The plane is addressed in normalized coordinates: `(0, 0)` is one corner,
//! `(1, 1)` the opposite one. At zoom level `z` the plane is covered by a
//! `2^z x 2^z` grid of square tiles, so the world-pixel extent per axis is
//! `tile_size * 2^z`. All transforms here are total over finite inputs;
//! boundary conditions are handled by clamping and no-ops, never by errors.

use crate::core::geometry::{Point, ViewportSize};
use serde::{Deserialize, Serialize};

/// World-pixel extent of the plane per axis at the given zoom level.
pub fn world_pixel_size(tile_size: u32, zoom: u8) -> f64 {
    tile_size as f64 * f64::exp2(zoom as f64)
}

/// The viewer's focal point on the plane plus its discrete zoom level.
///
/// Mutated only through gesture application; the tile set manager reads it
/// but never writes it. Panning does not clamp the center (the plane is
/// conceptually boundless for navigation; tile-index clamping bounds what
/// gets displayed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Focal point in normalized plane coordinates, nominally in `[0, 1]`.
    pub center_x: f64,
    pub center_y: f64,
    /// Discrete zoom level.
    pub zoom: u8,
}

impl Camera {
    pub fn new(center_x: f64, center_y: f64, zoom: u8) -> Self {
        Self {
            center_x,
            center_y,
            zoom,
        }
    }

    /// Top-left corner of the visible area in world pixels.
    pub fn world_origin(&self, tile_size: u32, viewport: ViewportSize) -> Point {
        let ws = world_pixel_size(tile_size, self.zoom);
        Point::new(
            self.center_x * ws - viewport.width / 2.0,
            self.center_y * ws - viewport.height / 2.0,
        )
    }

    /// Converts a container-local pixel coordinate to normalized plane
    /// coordinates. Exact inverse of [`Camera::plane_to_local`] for a fixed
    /// camera and viewport.
    pub fn local_to_plane(
        &self,
        tile_size: u32,
        viewport: ViewportSize,
        local: Point,
    ) -> (f64, f64) {
        let ws = world_pixel_size(tile_size, self.zoom);
        let origin = self.world_origin(tile_size, viewport);
        ((origin.x + local.x) / ws, (origin.y + local.y) / ws)
    }

    /// Converts normalized plane coordinates back to a container-local
    /// pixel coordinate.
    pub fn plane_to_local(
        &self,
        tile_size: u32,
        viewport: ViewportSize,
        plane: (f64, f64),
    ) -> Point {
        let ws = world_pixel_size(tile_size, self.zoom);
        let origin = self.world_origin(tile_size, viewport);
        Point::new(plane.0 * ws - origin.x, plane.1 * ws - origin.y)
    }

    /// Shifts the center by a screen-space drag delta. Dragging right moves
    /// the center left, so the delta is subtracted.
    pub fn pan(&self, tile_size: u32, dx: f64, dy: f64) -> Camera {
        let ws = world_pixel_size(tile_size, self.zoom);
        Camera {
            center_x: self.center_x - dx / ws,
            center_y: self.center_y - dy / ws,
            zoom: self.zoom,
        }
    }

    /// Changes zoom while keeping the plane point under `anchor` fixed on
    /// screen. `new_zoom` is clamped to `[min_zoom, max_zoom]` first; if
    /// the clamped level equals the current one this returns `None` so the
    /// caller can skip a redundant reconcile.
    pub fn zoom_anchored(
        &self,
        tile_size: u32,
        viewport: ViewportSize,
        anchor: Point,
        new_zoom: i32,
        min_zoom: u8,
        max_zoom: u8,
    ) -> Option<Camera> {
        let clamped = new_zoom.clamp(min_zoom as i32, max_zoom as i32) as u8;
        if clamped == self.zoom {
            return None;
        }

        // Plane point currently under the anchor, measured at the old zoom.
        let (plane_x, plane_y) = self.local_to_plane(tile_size, viewport, anchor);

        // Solve for the center that maps the same plane point back to the
        // same container pixel under the new world-pixel size.
        let new_ws = world_pixel_size(tile_size, clamped);
        Some(Camera {
            center_x: plane_x + (viewport.width / 2.0 - anchor.x) / new_ws,
            center_y: plane_y + (viewport.height / 2.0 - anchor.y) / new_ws,
            zoom: clamped,
        })
    }
}
