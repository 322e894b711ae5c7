pub mod cache;
pub mod key;
pub mod loader;
pub mod renderer;
pub mod set;
pub mod source;

// Re-exports for convenience
pub use key::{TileAddress, TileKey};
pub use loader::{TileFetcher, TileLoader};
pub use renderer::{TileHandle, TileRenderer};
pub use set::{visible_tiles, ReconcileStats, TileSet};
pub use source::{PlaneTileSource, TileSource};
