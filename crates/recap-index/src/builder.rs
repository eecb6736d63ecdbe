//! Subtitle files → scenes → embeddings → a new [`SceneIndex`].

use std::collections::HashSet;
use std::path::Path;

use rayon::prelude::*;
use recap_core::config::IndexConfig;
use recap_core::errors::{IndexError, RecapResult};
use recap_core::models::SceneRecord;
use recap_core::traits::{IEmbeddingProvider, ISceneStore, IVectorIndex};
use tracing::{info, warn};

use crate::flat::FlatL2Index;
use crate::handle::SceneIndex;
use crate::store::InMemorySceneStore;
use crate::subtitles::{group_into_scenes, parse_srt, SceneDraft};

/// What a build added on top of its base.
#[derive(Debug)]
pub struct BuildReport {
    pub index: SceneIndex,
    pub added: usize,
    /// Empty or already-indexed scene texts.
    pub skipped_duplicates: usize,
    /// Scenes whose embedding call failed.
    pub failed: usize,
}

/// Builds or extends a scene index from subtitle tracks.
pub struct IndexBuilder<'a> {
    embedder: &'a dyn IEmbeddingProvider,
    lines_per_scene: usize,
}

struct Pending {
    movie: String,
    draft: SceneDraft,
    /// Timestamp of the movie's last scene.
    movie_end: String,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(embedder: &'a dyn IEmbeddingProvider, config: &IndexConfig) -> Self {
        Self {
            embedder,
            lines_per_scene: config.lines_per_scene.max(1),
        }
    }

    /// Add `(movie, srt content)` tracks to `base` (or to an empty index).
    ///
    /// Existing ids and vectors are kept; new scenes continue from the base's
    /// max id + 1. Empty texts and texts already present are skipped. The
    /// first new scene of each movie carries the movie's last scene timestamp
    /// as its duration.
    pub fn append(
        &self,
        base: Option<&SceneIndex>,
        tracks: &[(String, String)],
    ) -> RecapResult<BuildReport> {
        let dims = match base {
            Some(b) if !b.is_empty() => b.index().dimensions(),
            _ => self.embedder.dimensions(),
        };
        if dims != self.embedder.dimensions() {
            return Err(IndexError::DimensionMismatch {
                expected: dims,
                actual: self.embedder.dimensions(),
            }
            .into());
        }

        let (mut flat, mut store) = match base {
            Some(b) => (b.index().clone(), b.store().clone()),
            None => (FlatL2Index::new(dims), InMemorySceneStore::new()),
        };

        let (pending, skipped_duplicates) = self.collect_pending(&store, tracks);

        let embedded: Vec<RecapResult<Vec<f32>>> = pending
            .par_iter()
            .map(|p| self.embedder.embed(&p.draft.text))
            .collect();

        let mut next_id = store.next_id();
        let mut movies_with_duration: HashSet<String> = HashSet::new();
        let mut added = 0;
        let mut failed = 0;

        for (p, vector) in pending.into_iter().zip(embedded) {
            let vector = match vector {
                Ok(v) => v,
                Err(e) => {
                    warn!(movie = %p.movie, timestamp = %p.draft.timestamp, error = %e, "scene embedding failed, skipping");
                    failed += 1;
                    continue;
                }
            };
            flat.add(next_id, &vector)?;

            let mut record = SceneRecord::new(next_id, &p.movie, p.draft.timestamp, p.draft.text);
            if movies_with_duration.insert(p.movie.clone()) {
                record = record.with_duration(p.movie_end);
            }
            store.insert(record)?;
            next_id += 1;
            added += 1;
        }

        info!(
            added,
            skipped_duplicates,
            failed,
            total = store.len(),
            provider = self.embedder.name(),
            "index build finished"
        );

        Ok(BuildReport {
            index: SceneIndex::new(flat, store)?,
            added,
            skipped_duplicates,
            failed,
        })
    }

    /// Read every `.srt` in `dir` (movie title = file stem, sorted by name)
    /// and append them to `base`.
    pub fn append_dir(&self, base: Option<&SceneIndex>, dir: &Path) -> RecapResult<BuildReport> {
        let read_err = |e: std::io::Error| IndexError::LoadFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        };

        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .map_err(read_err)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("srt")))
            .collect();
        paths.sort();

        let mut tracks = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(movie) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            let bytes = std::fs::read(&path).map_err(|e| IndexError::LoadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            tracks.push((movie, String::from_utf8_lossy(&bytes).into_owned()));
        }

        self.append(base, &tracks)
    }

    fn collect_pending(
        &self,
        store: &InMemorySceneStore,
        tracks: &[(String, String)],
    ) -> (Vec<Pending>, usize) {
        let mut seen: HashSet<String> = store.texts().into_iter().map(str::to_string).collect();
        let mut pending = Vec::new();
        let mut skipped = 0;

        for (movie, content) in tracks {
            let drafts = group_into_scenes(&parse_srt(content), self.lines_per_scene);
            let Some(movie_end) = drafts.last().map(|d| d.timestamp.clone()) else {
                warn!(movie = %movie, "subtitle track has no scenes");
                continue;
            };

            for draft in drafts {
                let text = draft.text.trim().to_string();
                if text.is_empty() || !seen.insert(text.clone()) {
                    skipped += 1;
                    continue;
                }
                pending.push(Pending {
                    movie: movie.clone(),
                    draft: SceneDraft {
                        timestamp: draft.timestamp,
                        text,
                    },
                    movie_end: movie_end.clone(),
                });
            }
        }
        (pending, skipped)
    }
}
