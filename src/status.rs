//! Status reporting: a passive observer fed after every reconciliation
//! with the zoom level and the logical-plane coordinates of the viewport
//! center.

use crate::core::camera::Camera;
use serde::{Deserialize, Serialize};

/// Affine map from normalized `[0, 1]` plane coordinates to the
/// application's logical coordinate range. The constants are configuration;
/// the engine never computes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneMapping {
    pub min_x: f64,
    pub min_y: f64,
    pub span_x: f64,
    pub span_y: f64,
}

impl PlaneMapping {
    pub fn new(min_x: f64, min_y: f64, span_x: f64, span_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            span_x,
            span_y,
        }
    }

    /// Maps a normalized plane coordinate into the logical range.
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (self.min_x + x * self.span_x, self.min_y + y * self.span_y)
    }

    /// Logical coordinates of the camera's focal point.
    pub fn project_camera(&self, camera: &Camera) -> (f64, f64) {
        self.project(camera.center_x, camera.center_y)
    }
}

impl Default for PlaneMapping {
    /// The reference complex-plane window: real -2.5..1.0, imag -1.75..1.75.
    fn default() -> Self {
        Self::new(-2.5, -1.75, 3.5, 3.5)
    }
}

/// Observer notified after every reconciliation. Absence of an observer is
/// a valid configuration; notification is then a no-op.
pub trait StatusObserver {
    fn status_changed(&mut self, zoom: u8, plane_x: f64, plane_y: f64);
}

/// Observer that renders the reference status line (`z=.. re=.. im=..`)
/// with fixed 10-decimal precision into an owned string.
#[derive(Debug, Default)]
pub struct StatusLine {
    text: String,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatusObserver for StatusLine {
    fn status_changed(&mut self, zoom: u8, plane_x: f64, plane_y: f64) {
        self.text = format!("z={}  re={:.10}  im={:.10}", zoom, plane_x, plane_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_mapping_corners() {
        let mapping = PlaneMapping::default();
        assert_eq!(mapping.project(0.0, 0.0), (-2.5, -1.75));
        assert_eq!(mapping.project(1.0, 1.0), (1.0, 1.75));
        let (cx, cy) = mapping.project(0.5, 0.5);
        assert!((cx - -0.75).abs() < 1e-12);
        assert!((cy - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_status_line_format() {
        let mut line = StatusLine::new();
        line.status_changed(2, -0.75, 0.0);
        assert_eq!(line.text(), "z=2  re=-0.7500000000  im=0.0000000000");
    }
}
