//! Parse result cache.
//!
//! Bounded LRU map from raw question text to its resolved tree. Only
//! successful parses are stored. Two threads missing on the same key both
//! compute and both insert; the values are identical.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::trace;

use crate::model::Tree;

/// Capacity used by [`ResultCache::default`].
pub const DEFAULT_CAPACITY: usize = 256;

pub struct ResultCache {
    entries: Mutex<LruCache<String, Tree>>,
}

impl ResultCache {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { entries: Mutex::new(LruCache::new(capacity)) }
    }

    /// Look up a question, marking it most recently used.
    pub fn get(&self, text: &str) -> Option<Tree> {
        let hit = self.entries.lock().get(text).cloned();
        trace!(text, hit = hit.is_some(), "Result cache lookup");
        hit
    }

    /// Store a result, evicting the least recently used entry when full.
    pub fn insert(&self, text: impl Into<String>, tree: Tree) {
        self.entries.lock().put(text.into(), tree);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
