//! Flattened config cache
//!
//! Keyed by the identity of an `Arc<StyleConfig>`, not its content. Each
//! entry keeps its config alive, so an address can't be reused by another
//! config while it is cached. Cached values are immutable, which makes a
//! poisoned lock safe to recover from.

use crate::config::StyleConfig;
use crate::flatten::FlattenedStyleConfig;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug)]
struct CacheEntry {
    config: Arc<StyleConfig>,
    flattened: Arc<FlattenedStyleConfig>,
}

#[derive(Debug, Default)]
pub struct FlattenCache {
    entries: RwLock<HashMap<usize, CacheEntry>>,
}

fn identity(config: &Arc<StyleConfig>) -> usize {
    Arc::as_ptr(config) as usize
}

impl FlattenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, config: &Arc<StyleConfig>) -> Option<Arc<FlattenedStyleConfig>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&identity(config))
            .filter(|entry| Arc::ptr_eq(&entry.config, config))
            .map(|entry| Arc::clone(&entry.flattened))
    }

    /// Insert a flattened config. An existing entry for the same config wins,
    /// so concurrent builders all observe the first result.
    pub fn insert(
        &self,
        config: Arc<StyleConfig>,
        flattened: Arc<FlattenedStyleConfig>,
    ) -> Arc<FlattenedStyleConfig> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let entry = entries
            .entry(identity(&config))
            .or_insert(CacheEntry { config, flattened });
        Arc::clone(&entry.flattened)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_identity_not_content() {
        let cache = FlattenCache::new();
        let a = Arc::new(StyleConfig::new().base("p-2"));
        let b = Arc::new(StyleConfig::new().base("p-2"));

        cache.insert(Arc::clone(&a), Arc::new(FlattenedStyleConfig::new()));
        assert!(cache.get(&a).is_some());
        assert!(cache.get(&b).is_none());
    }

    #[test]
    fn test_first_insert_wins() {
        let cache = FlattenCache::new();
        let config = Arc::new(StyleConfig::new());
        let first = cache.insert(Arc::clone(&config), Arc::new(FlattenedStyleConfig::new()));
        let second = cache.insert(Arc::clone(&config), Arc::new(FlattenedStyleConfig::new()));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let cache = Arc::new(FlattenCache::new());
        let config = Arc::new(StyleConfig::new().base("flex"));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let config = Arc::clone(&config);
                thread::spawn(move || {
                    cache.insert(Arc::clone(&config), Arc::new(FlattenedStyleConfig::new()));
                    cache.get(&config).is_some()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
