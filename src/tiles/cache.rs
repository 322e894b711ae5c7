use crate::tiles::key::TileAddress;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

/// In-memory cache of fetched tile bytes using LRU eviction. This is the
/// implicit image-loader cache, not a prefetch layer: entries appear only
/// when the loader completes a request.
#[derive(Debug)]
pub struct TileCache {
    cache: Arc<Mutex<LruCache<TileAddress, Arc<Vec<u8>>>>>,
}

impl TileCache {
    /// Create a new tile cache with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1024).unwrap());
        Self {
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Get a tile's bytes from the cache.
    pub fn get(&self, address: &TileAddress) -> Option<Arc<Vec<u8>>> {
        self.cache.lock().ok()?.get(address).cloned()
    }

    /// Insert a tile's bytes into the cache.
    pub fn put(&self, address: TileAddress, data: Arc<Vec<u8>>) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(address, data);
        }
    }

    pub fn contains(&self, address: &TileAddress) -> bool {
        self.cache
            .lock()
            .ok()
            .map(|cache| cache.contains(address))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.cache.lock().ok().map(|cache| cache.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }
}

impl Clone for TileCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl Default for TileCache {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::key::TileKey;

    fn addr(x: u64, y: u64) -> TileAddress {
        TileAddress::new(TileKey::new(x, y, 3), 1)
    }

    #[test]
    fn test_cache_basic_operations() {
        let cache = TileCache::new(8);
        assert!(cache.is_empty());

        cache.put(addr(1, 2), Arc::new(vec![1, 2, 3]));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&addr(1, 2)));
        assert_eq!(*cache.get(&addr(1, 2)).unwrap(), vec![1, 2, 3]);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_lru_eviction() {
        let cache = TileCache::new(2);
        cache.put(addr(1, 1), Arc::new(vec![1]));
        cache.put(addr(2, 2), Arc::new(vec![2]));
        cache.put(addr(3, 3), Arc::new(vec![3]));

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&addr(1, 1)));
        assert!(cache.contains(&addr(2, 2)));
        assert!(cache.contains(&addr(3, 3)));
    }

    #[test]
    fn test_cache_distinguishes_resolution_scale() {
        let cache = TileCache::new(8);
        let key = TileKey::new(4, 4, 5);
        cache.put(TileAddress::new(key, 1), Arc::new(vec![1]));
        assert!(!cache.contains(&TileAddress::new(key, 2)));
    }
}
