use std::num::NonZeroUsize;

use lru::LruCache;
use serde::{Deserialize, Serialize};

/// Counters describing how a sequence's memo cache has been used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to run the generator.
    pub misses: u64,
    /// Entries dropped to make room for newer ones.
    pub evictions: u64,
    /// Entries currently resident.
    pub len: usize,
    /// Maximum number of resident entries.
    pub capacity: usize,
}

/// Bounded least-recently-used store of materialized terms.
pub(crate) struct MemoCache<T> {
    entries: LruCache<u64, T>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<T: Clone> MemoCache<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        let size = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(size),
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Returns a copy of the cached term and marks it most recently used.
    pub(crate) fn get(&mut self, index: u64) -> Option<T> {
        match self.entries.get(&index) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Reports residency without touching recency or counters.
    pub(crate) fn contains(&self, index: u64) -> bool {
        self.entries.contains(&index)
    }

    pub(crate) fn insert(&mut self, index: u64, value: T) {
        if let Some((evicted, _)) = self.entries.push(index, value) {
            if evicted != index {
                self.evictions += 1;
                log::trace!("memo cache full, evicted index {evicted} for {index}");
            }
        }
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            len: self.entries.len(),
            capacity: self.entries.cap().get(),
        }
    }
}
