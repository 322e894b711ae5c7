use crate::core::config::ViewerConfig;
use crate::tiles::cache::TileCache;
use crate::tiles::key::TileAddress;
use crate::tiles::source::{PlaneTileSource, TileSource};
use crate::Result;
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Shared blocking HTTP client with a custom User-Agent. Building the
/// client once avoids the cost of TLS and connection pool setup for every
/// tile.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("fractile/0.1")
        .build()
        .expect("failed to build reqwest blocking client")
});

/// Fire-and-forget tile fetcher. Each request runs on a detached thread and
/// delivers its bytes over an `mpsc` channel tagged with the tile address;
/// the core never awaits a load. If the receiving side dropped the handle
/// the result addressed (eviction), the send is silently discarded, which
/// makes post-eviction completion a harmless no-op.
pub struct TileLoader {
    tx: Sender<(TileAddress, Arc<Vec<u8>>)>,
    cache: TileCache,
}

impl TileLoader {
    /// Create a new loader given a sender to report completed downloads.
    pub fn new(tx: Sender<(TileAddress, Arc<Vec<u8>>)>) -> Self {
        Self {
            tx,
            cache: TileCache::default(),
        }
    }

    pub fn with_cache(tx: Sender<(TileAddress, Arc<Vec<u8>>)>, cache: TileCache) -> Self {
        Self { tx, cache }
    }

    /// Start fetching the addressed tile. Cached bytes are delivered
    /// immediately without touching the network; otherwise the download
    /// happens on a detached thread with a bounded retry loop.
    pub fn request(&self, source: &dyn TileSource, address: TileAddress) {
        if let Some(data) = self.cache.get(&address) {
            let _ = self.tx.send((address, data));
            return;
        }

        let url = source.url(address);
        let tx = self.tx.clone();
        let cache = self.cache.clone();

        thread::spawn(move || {
            const MAX_ATTEMPTS: usize = 2;
            for attempt in 1..=MAX_ATTEMPTS {
                log::debug!("fetch tile {:?} attempt {}", address, attempt);
                let result: Result<Vec<u8>> = (|| {
                    let resp = HTTP_CLIENT.get(&url).send()?;
                    if !resp.status().is_success() {
                        return Err(crate::ViewerError::TileLoad(format!(
                            "HTTP {} for {}",
                            resp.status(),
                            url
                        )));
                    }
                    Ok(resp.bytes()?.to_vec())
                })();

                match result {
                    Ok(data) => {
                        log::debug!("downloaded tile {:?} ({} bytes)", address, data.len());
                        let data = Arc::new(data);
                        cache.put(address, data.clone());
                        let _ = tx.send((address, data));
                        return;
                    }
                    Err(e) => {
                        log::warn!("tile {:?} failed on attempt {}: {}", address, attempt, e);
                        if attempt == MAX_ATTEMPTS {
                            log::error!("giving up on tile {:?}", address);
                        } else {
                            thread::sleep(std::time::Duration::from_millis(100));
                        }
                    }
                }
            }
        });
    }
}

/// Binds the configured tile endpoint to the loader stack. The viewer's
/// config names the base URL; the fetcher turns tile addresses into
/// requests against it. A backend calls [`TileFetcher::fetch`] when its
/// `create_tile` fires and drains the receiver on its frame loop.
pub struct TileFetcher {
    source: PlaneTileSource,
    loader: TileLoader,
}

impl TileFetcher {
    /// Builds the fetcher for a config's `tile_base_url`, returning the
    /// receiver completed downloads arrive on.
    pub fn from_config(config: &ViewerConfig) -> (Self, Receiver<(TileAddress, Arc<Vec<u8>>)>) {
        let (tx, rx) = mpsc::channel();
        let fetcher = Self {
            source: PlaneTileSource::new(config.tile_base_url.clone()),
            loader: TileLoader::new(tx),
        };
        (fetcher, rx)
    }

    /// As [`TileFetcher::from_config`], sharing an existing byte cache.
    pub fn with_cache(
        config: &ViewerConfig,
        cache: TileCache,
    ) -> (Self, Receiver<(TileAddress, Arc<Vec<u8>>)>) {
        let (tx, rx) = mpsc::channel();
        let fetcher = Self {
            source: PlaneTileSource::new(config.tile_base_url.clone()),
            loader: TileLoader::with_cache(tx, cache),
        };
        (fetcher, rx)
    }

    /// The URL the fetcher would request for an address.
    pub fn url(&self, address: TileAddress) -> String {
        self.source.url(address)
    }

    /// Starts fetching the addressed tile; fire-and-forget.
    pub fn fetch(&self, address: TileAddress) {
        self.loader.request(&self.source, address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::key::TileKey;

    struct NeverSource;

    impl TileSource for NeverSource {
        fn url(&self, _address: TileAddress) -> String {
            unreachable!("cached requests must not build a URL")
        }
    }

    #[test]
    fn test_cached_tile_served_without_network() {
        let (tx, rx) = mpsc::channel();
        let cache = TileCache::default();
        let address = TileAddress::new(TileKey::new(1, 2, 3), 1);
        cache.put(address, Arc::new(vec![9, 9]));

        let loader = TileLoader::with_cache(tx, cache);
        loader.request(&NeverSource, address);

        let (got_address, data) = rx.try_recv().unwrap();
        assert_eq!(got_address, address);
        assert_eq!(*data, vec![9, 9]);
    }

    #[test]
    fn test_fetcher_targets_configured_endpoint() {
        let config = ViewerConfig {
            tile_base_url: "http://tiles.local/".into(),
            ..Default::default()
        };
        let (fetcher, _rx) = TileFetcher::from_config(&config);
        let address = TileAddress::new(TileKey::new(2, 1, 4), 1);
        assert_eq!(fetcher.url(address), "http://tiles.local/tiles/4/2/1/1");
    }

    #[test]
    fn test_fetcher_delivers_cached_bytes() {
        let config = ViewerConfig {
            tile_base_url: "http://tiles.local".into(),
            ..Default::default()
        };
        let cache = TileCache::default();
        let address = TileAddress::new(TileKey::new(3, 3, 5), 2);
        cache.put(address, Arc::new(vec![4, 2]));

        let (fetcher, rx) = TileFetcher::with_cache(&config, cache);
        fetcher.fetch(address);

        let (got_address, data) = rx.try_recv().unwrap();
        assert_eq!(got_address, address);
        assert_eq!(*data, vec![4, 2]);
    }
}
