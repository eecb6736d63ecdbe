use recap_core::constants::EMPTY_DURATION;
use recap_core::models::{SceneId, SceneRecord};
use recap_core::traits::ISceneStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::timestamp::parse_timestamp;

/// Scenes selected up to a timestamp, plus the timestamps that failed to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionReport {
    /// Scene texts, ascending by timestamp.
    pub texts: Vec<String>,
    /// Ids of the selected scenes, in the same order as `texts`.
    pub scene_ids: Vec<SceneId>,
    /// Scenes of the movie whose timestamp was malformed (counted as 0s).
    pub malformed: Vec<SceneId>,
    /// The query timestamp itself was malformed.
    pub query_malformed: bool,
}

impl SelectionReport {
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }
}

/// Orders a movie's scenes by time and cuts them at a timestamp.
pub struct TemporalSceneSelector<'a, S: ISceneStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ISceneStore + ?Sized> TemporalSceneSelector<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Every scene of `movie` (exact, case-sensitive) with a timestamp at or
    /// before `timestamp`, ascending. Ties keep id order.
    pub fn select_up_to(&self, movie: &str, timestamp: &str) -> SelectionReport {
        let limit = parse_timestamp(timestamp);
        if !limit.valid {
            warn!(movie, timestamp, "query timestamp malformed, treating as 0s");
        }

        let mut malformed = Vec::new();
        let mut selected: Vec<(f64, &SceneRecord)> = self
            .store
            .scenes_of(movie)
            .into_iter()
            .filter_map(|scene| {
                let parsed = parse_timestamp(&scene.timestamp);
                if !parsed.valid {
                    malformed.push(scene.id);
                }
                (parsed.seconds <= limit.seconds).then_some((parsed.seconds, scene))
            })
            .collect();

        // `scenes_of` is ascending by id, and sort_by is stable.
        selected.sort_by(|a, b| a.0.total_cmp(&b.0));

        if !malformed.is_empty() {
            warn!(movie, scenes = ?malformed, "malformed scene timestamps counted as 0s");
        }
        debug!(movie, timestamp, selected = selected.len(), "scenes selected");

        SelectionReport {
            texts: selected.iter().map(|(_, s)| s.text.clone()).collect(),
            scene_ids: selected.iter().map(|(_, s)| s.id).collect(),
            malformed,
            query_malformed: !limit.valid,
        }
    }

    /// See [`movie_duration`].
    pub fn movie_duration(&self, movie: &str) -> String {
        movie_duration(movie, self.store)
    }
}

/// Timestamp string of the movie's latest scene, or `"00:00:00,000"` when the
/// movie has no scenes. Uses the same fail-soft parsing as selection; among
/// equal times the lowest id wins.
pub fn movie_duration<S: ISceneStore + ?Sized>(movie: &str, store: &S) -> String {
    store
        .scenes_of(movie)
        .into_iter()
        .map(|s| (parse_timestamp(&s.timestamp).seconds, s))
        .fold(None::<(f64, &SceneRecord)>, |best, (secs, scene)| match best {
            Some((b, _)) if secs <= b => best,
            _ => Some((secs, scene)),
        })
        .map_or_else(|| EMPTY_DURATION.to_string(), |(_, s)| s.timestamp.clone())
}
