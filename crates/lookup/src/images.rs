//! Bounded in-memory cache for decoded-elsewhere cover images.
//!
//! Two limits apply at once: an entry count and a total cost (the encoded
//! byte size of the images). Whichever would be exceeded first evicts the
//! least recently used entries until both hold again.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use bookshelf_config::ImageConfig;
use lru::LruCache;

struct Entry {
    data: Arc<[u8]>,
    cost: usize,
}

struct Inner {
    entries: LruCache<String, Entry>,
    total_cost: usize,
}

pub struct ImageCache {
    inner: Mutex<Inner>,
    max_cost: usize,
}

impl ImageCache {
    pub fn new(config: &ImageConfig) -> Self {
        Self::with_limits(config.max_entries, config.max_bytes)
    }

    /// Zero limits are treated as one.
    pub fn with_limits(max_entries: usize, max_cost: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                total_cost: 0,
            }),
            max_cost: max_cost.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Nothing in here can panic half-way through an update.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the image and marks it as most recently used.
    pub fn get(&self, key: &str) -> Option<Arc<[u8]>> {
        self.lock().entries.get(key).map(|entry| Arc::clone(&entry.data))
    }

    /// Stores an image, replacing any previous image under `key`.
    ///
    /// An image costing more than the whole cache is not stored at all.
    pub fn set(&self, key: impl Into<String>, data: impl Into<Arc<[u8]>>, cost: usize) {
        let key = key.into();
        let mut inner = self.lock();
        if cost > self.max_cost {
            tracing::debug!(key = %key, cost, max_cost = self.max_cost, "image too large to cache");
            if let Some(previous) = inner.entries.pop(&key) {
                inner.total_cost -= previous.cost;
            }
            return;
        }
        let data = data.into();
        // Either the old value under this key or the LRU entry pushed out by
        // the count limit.
        if let Some((_, displaced)) = inner.entries.push(key, Entry { data, cost }) {
            inner.total_cost -= displaced.cost;
        }
        inner.total_cost += cost;
        while inner.total_cost > self.max_cost {
            let Some((evicted, entry)) = inner.entries.pop_lru() else {
                break;
            };
            tracing::debug!(key = %evicted, cost = entry.cost, "evicting cached image");
            inner.total_cost -= entry.cost;
        }
    }

    pub fn remove(&self, key: &str) -> Option<Arc<[u8]>> {
        let mut inner = self.lock();
        let entry = inner.entries.pop(key)?;
        inner.total_cost -= entry.cost;
        Some(entry.data)
    }

    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.total_cost = 0;
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the costs of everything currently cached.
    pub fn total_cost(&self) -> usize {
        self.lock().total_cost
    }
}
