use serde::{Deserialize, Serialize};

/// A point in container-local or world pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between two points, used as the pinch-zoom anchor.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Viewport (container) dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A resize to zero or negative extent yields an empty visible set
    /// rather than an error.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_midpoint() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(30.0, 40.0);
        assert_eq!(a.midpoint(&b), Point::new(20.0, 30.0));
    }

    #[test]
    fn test_zero_area_viewport() {
        assert!(ViewportSize::new(0.0, 600.0).is_empty());
        assert!(ViewportSize::new(800.0, 0.0).is_empty());
        assert!(ViewportSize::new(-1.0, 600.0).is_empty());
        assert!(!ViewportSize::new(800.0, 600.0).is_empty());
    }
}
