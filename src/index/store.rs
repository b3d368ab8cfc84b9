use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::index::generation::IndexGeneration;

/// Holder of the current index generation. Readers clone the `Arc` and run
/// against that snapshot for the whole query; `install` swaps the pointer
/// so a reader observes the old or the new generation, never a mix.
pub struct IndexStore {
    current: RwLock<Arc<IndexGeneration>>,
    next_version: AtomicU64,
}

impl IndexStore {
    pub fn new(initial: IndexGeneration) -> Self {
        let next_version = AtomicU64::new(initial.version + 1);
        IndexStore {
            current: RwLock::new(Arc::new(initial)),
            next_version,
        }
    }

    /// Immutable snapshot of the current generation.
    pub fn snapshot(&self) -> Arc<IndexGeneration> {
        self.current.read().clone()
    }

    /// Version for the next staged generation.
    pub fn allocate_version(&self) -> u64 {
        self.next_version.fetch_add(1, Ordering::SeqCst)
    }

    /// Makes a fully built generation the current one.
    pub fn install(&self, generation: IndexGeneration) {
        *self.current.write() = Arc::new(generation);
    }
}
