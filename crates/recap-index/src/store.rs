//! In-memory scene store with a movie → ids secondary index.

use std::collections::{BTreeMap, HashMap, HashSet};

use recap_core::errors::{IndexError, RecapResult};
use recap_core::models::{SceneId, SceneRecord};
use recap_core::traits::ISceneStore;

/// Scene records keyed by id, plus each movie's ids in ascending order.
/// Built once at load time; read-only for the pipeline.
#[derive(Debug, Clone, Default)]
pub struct InMemorySceneStore {
    scenes: BTreeMap<SceneId, SceneRecord>,
    by_movie: HashMap<String, Vec<SceneId>>,
}

impl InMemorySceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store, rejecting duplicate ids.
    pub fn from_records(records: impl IntoIterator<Item = SceneRecord>) -> RecapResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    pub fn insert(&mut self, record: SceneRecord) -> RecapResult<()> {
        if self.scenes.contains_key(&record.id) {
            return Err(IndexError::DuplicateId { id: record.id }.into());
        }
        let ids = self.by_movie.entry(record.movie.clone()).or_default();
        // Ids arrive mostly ascending; keep the list sorted either way.
        let pos = ids.partition_point(|&existing| existing < record.id);
        ids.insert(pos, record.id);
        self.scenes.insert(record.id, record);
        Ok(())
    }

    /// Highest id in the store.
    pub fn max_id(&self) -> Option<SceneId> {
        self.scenes.keys().next_back().copied()
    }

    /// Id the next appended scene should get.
    pub fn next_id(&self) -> SceneId {
        self.max_id().map_or(0, |id| id + 1)
    }

    /// Movie titles in the store, sorted.
    pub fn movies(&self) -> Vec<&str> {
        let mut movies: Vec<&str> = self.by_movie.keys().map(String::as_str).collect();
        movies.sort_unstable();
        movies
    }

    /// Trimmed texts of every stored scene, for duplicate detection.
    pub fn texts(&self) -> HashSet<&str> {
        self.scenes.values().map(|s| s.text.trim()).collect()
    }

    /// Records in ascending id order.
    pub fn records(&self) -> impl Iterator<Item = &SceneRecord> {
        self.scenes.values()
    }
}

impl ISceneStore for InMemorySceneStore {
    fn get(&self, id: SceneId) -> Option<&SceneRecord> {
        self.scenes.get(&id)
    }

    fn all(&self) -> Vec<&SceneRecord> {
        self.scenes.values().collect()
    }

    fn scenes_of(&self, movie: &str) -> Vec<&SceneRecord> {
        self.by_movie
            .get(movie)
            .map(|ids| ids.iter().filter_map(|id| self.scenes.get(id)).collect())
            .unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.scenes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: SceneId, movie: &str) -> SceneRecord {
        SceneRecord::new(id, movie, "00:00:01,000", format!("line {id}"))
    }

    #[test]
    fn scenes_of_is_exact_and_ascending() {
        let store = InMemorySceneStore::from_records(vec![
            record(4, "X"),
            record(1, "X"),
            record(2, "x"),
            record(3, "Y"),
        ])
        .unwrap();

        let ids: Vec<_> = store.scenes_of("X").iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(store.scenes_of("x").len(), 1);
        assert!(store.scenes_of("Z").is_empty());
        assert_eq!(store.movies(), vec!["X", "Y", "x"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = InMemorySceneStore::from_records(vec![record(1, "X"), record(1, "Y")])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate scene id 1"));
    }

    #[test]
    fn next_id_continues_after_max() {
        let mut store = InMemorySceneStore::new();
        assert_eq!(store.next_id(), 0);
        store.insert(record(7, "X")).unwrap();
        store.insert(record(2, "X")).unwrap();
        assert_eq!(store.next_id(), 8);
    }
}
