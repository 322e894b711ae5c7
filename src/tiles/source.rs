use crate::tiles::key::TileAddress;

/// Trait representing anything that can produce tile URLs for a given
/// load address.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `address`.
    fn url(&self, address: TileAddress) -> String;
}

/// Tile source matching the reference server's endpoint shape:
/// `{base}/tiles/{zoom}/{x}/{y}/{scale}`.
pub struct PlaneTileSource {
    base_url: String,
}

impl PlaneTileSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl TileSource for PlaneTileSource {
    fn url(&self, address: TileAddress) -> String {
        format!(
            "{}/tiles/{}/{}/{}/{}",
            self.base_url, address.key.zoom, address.key.x, address.key.y, address.scale
        )
    }
}
