//! A loaded index + store pair and a handle that swaps it atomically.

use std::sync::{Arc, RwLock};

use recap_core::errors::{IndexError, RecapResult};
use recap_core::traits::{ISceneStore, IVectorIndex};
use tracing::info;

use crate::flat::FlatL2Index;
use crate::store::InMemorySceneStore;

/// Vector index aligned with its scene store: every indexed id resolves.
#[derive(Debug, Clone)]
pub struct SceneIndex {
    index: FlatL2Index,
    store: InMemorySceneStore,
}

impl SceneIndex {
    pub fn new(index: FlatL2Index, store: InMemorySceneStore) -> RecapResult<Self> {
        if index.len() != store.len() {
            return Err(IndexError::LengthMismatch {
                vectors: index.len(),
                scenes: store.len(),
            }
            .into());
        }
        if let Some(missing) = index.ids().iter().find(|id| store.get(**id).is_none()) {
            return Err(IndexError::Corrupt {
                details: format!("indexed id {missing} has no scene record"),
            }
            .into());
        }
        Ok(Self { index, store })
    }

    pub fn empty(dims: usize) -> Self {
        Self {
            index: FlatL2Index::new(dims),
            store: InMemorySceneStore::new(),
        }
    }

    pub fn index(&self) -> &FlatL2Index {
        &self.index
    }

    pub fn store(&self) -> &InMemorySceneStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Shared, read-mostly handle to the current [`SceneIndex`].
///
/// Readers clone the `Arc` and keep the snapshot they started with; a rebuild
/// swaps in a new snapshot without blocking them for longer than the swap.
#[derive(Debug)]
pub struct SceneIndexHandle {
    current: RwLock<Arc<SceneIndex>>,
}

impl SceneIndexHandle {
    pub fn new(index: SceneIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// The snapshot in effect right now.
    pub fn current(&self) -> Arc<SceneIndex> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the snapshot, returning the previous one.
    pub fn swap(&self, next: SceneIndex) -> Arc<SceneIndex> {
        let next = Arc::new(next);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let previous = std::mem::replace(&mut *guard, next);
        info!(
            previous = previous.len(),
            current = guard.len(),
            "scene index swapped"
        );
        previous
    }
}

#[cfg(test)]
mod tests {
    use recap_core::models::SceneRecord;

    use super::*;

    fn one_scene(id: u64) -> SceneIndex {
        let mut index = FlatL2Index::new(1);
        index.add(id, &[id as f32]).unwrap();
        let store =
            InMemorySceneStore::from_records(vec![SceneRecord::new(id, "M", "00:00:01", "hi")])
                .unwrap();
        SceneIndex::new(index, store).unwrap()
    }

    #[test]
    fn readers_keep_their_snapshot_across_swap() {
        let handle = SceneIndexHandle::new(one_scene(1));
        let before = handle.current();
        let previous = handle.swap(one_scene(2));

        assert!(before.store().get(1).is_some());
        assert!(previous.store().get(1).is_some());
        assert!(handle.current().store().get(2).is_some());
        assert!(handle.current().store().get(1).is_none());
    }

    #[test]
    fn misaligned_index_is_rejected() {
        let mut index = FlatL2Index::new(1);
        index.add(9, &[0.0]).unwrap();
        let store =
            InMemorySceneStore::from_records(vec![SceneRecord::new(1, "M", "00:00:01", "hi")])
                .unwrap();
        let err = SceneIndex::new(index, store).unwrap_err();
        assert!(err.to_string().contains("indexed id 9"));
    }
}
