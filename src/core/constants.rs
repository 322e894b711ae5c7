//! Engine-wide constants derived from the reference tile server and common
//! web-map conventions. Keeping them in a single place makes it easier to
//! tweak engine-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Lowest zoom level (the whole plane is a single tile).
pub const MIN_ZOOM: u8 = 0;

/// Highest zoom level the reference tile server renders.
pub const MAX_ZOOM: u8 = 45;

/// Accumulated wheel `delta_y` needed to change one zoom level.
pub const SCROLL_THRESHOLD: f64 = 300.0;

/// Bounds for the device-pixel-ratio resolution scale baked into tile
/// addresses.
pub const MIN_RESOLUTION_SCALE: u8 = 1;
pub const MAX_RESOLUTION_SCALE: u8 = 3;

/// Default starting camera: plane midpoint at zoom 2.
pub const DEFAULT_CENTER: (f64, f64) = (0.5, 0.5);
pub const DEFAULT_ZOOM: u8 = 2;
