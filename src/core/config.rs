//! Viewer configuration. Defaults mirror the reference deployment: a
//! Mandelbrot tile server with 256px tiles and zoom levels 0..=45.

use crate::core::{camera::Camera, constants};
use crate::status::PlaneMapping;
use crate::{Result, ViewerError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Square tile edge length in pixels.
    pub tile_size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Accumulated wheel delta needed for one zoom step.
    pub scroll_threshold: f64,
    /// Camera at mount time.
    pub initial_camera: Camera,
    /// Device pixel ratio baked into tile addresses; fixed for the
    /// viewer's lifetime and clamped to `[1, 3]` on validation.
    pub resolution_scale: u8,
    /// Affine map from normalized plane coordinates to the application's
    /// logical coordinate range (used only for status reporting).
    pub plane_mapping: PlaneMapping,
    /// Base URL of the tile endpoint, without a trailing slash. Consumed
    /// by `TileFetcher::from_config`, which binds it to the loader stack.
    pub tile_base_url: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tile_size: constants::TILE_SIZE,
            min_zoom: constants::MIN_ZOOM,
            max_zoom: constants::MAX_ZOOM,
            scroll_threshold: constants::SCROLL_THRESHOLD,
            initial_camera: Camera::new(
                constants::DEFAULT_CENTER.0,
                constants::DEFAULT_CENTER.1,
                constants::DEFAULT_ZOOM,
            ),
            resolution_scale: constants::MIN_RESOLUTION_SCALE,
            plane_mapping: PlaneMapping::default(),
            tile_base_url: String::new(),
        }
    }
}

impl ViewerConfig {
    /// Checks the invariants the engine relies on. Called by
    /// `Viewer::start`; the camera and tile math assume a validated config.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(ViewerError::InvalidConfig("tile_size must be > 0".into()));
        }
        if self.min_zoom > self.max_zoom {
            return Err(ViewerError::InvalidConfig(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.initial_camera.zoom < self.min_zoom || self.initial_camera.zoom > self.max_zoom {
            return Err(ViewerError::InvalidConfig(format!(
                "initial zoom {} outside [{}, {}]",
                self.initial_camera.zoom, self.min_zoom, self.max_zoom
            )));
        }
        if !(self.scroll_threshold > 0.0) {
            return Err(ViewerError::InvalidConfig(
                "scroll_threshold must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Resolution scale clamped to the supported `[1, 3]` range, the way
    /// the reference client clamps `devicePixelRatio`.
    pub fn clamped_resolution_scale(&self) -> u8 {
        self.resolution_scale.clamp(
            constants::MIN_RESOLUTION_SCALE,
            constants::MAX_RESOLUTION_SCALE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ViewerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_zoom_bounds_rejected() {
        let config = ViewerConfig {
            min_zoom: 10,
            max_zoom: 5,
            initial_camera: Camera::new(0.5, 0.5, 10),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_initial_zoom_out_of_range_rejected() {
        let config = ViewerConfig {
            initial_camera: Camera::new(0.5, 0.5, 46),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolution_scale_clamped() {
        let mut config = ViewerConfig {
            resolution_scale: 0,
            ..Default::default()
        };
        assert_eq!(config.clamped_resolution_scale(), 1);
        config.resolution_scale = 7;
        assert_eq!(config.clamped_resolution_scale(), 3);
        config.resolution_scale = 2;
        assert_eq!(config.clamped_resolution_scale(), 2);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ViewerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ViewerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
