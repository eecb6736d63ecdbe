use std::path::Path;
use std::sync::{Arc, Mutex};

use recap_characters::CharacterProfileExtractor;
use recap_core::config::RecapConfig;
use recap_core::errors::RecapResult;
use recap_core::models::{Outcome, SceneRecord};
use recap_core::traits::{IActorLookup, ICancellation, ICompletionProvider, IEmbeddingProvider};
use recap_index::{save_snapshot, BuildReport, IndexBuilder, SceneIndex, SceneIndexHandle};
use recap_matching::SceneMatcher;
use recap_observability::init_tracing;
use recap_session::{cleanup_with_ttl_secs, CancellationRegistry};
use recap_summary::{ChunkSummarizer, IncrementalSummarizer, SummarizationSession, SummaryKind};
use recap_timeline::{movie_duration, TemporalSceneSelector};
use recap_tokens::TokenCounter;
use tracing::{debug, info, warn};

use crate::factory;
use crate::request::{RecapOutcome, RecapRequest, RecapResponse};

/// Outcome of an index rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexUpdate {
    pub added: usize,
    pub skipped_duplicates: usize,
    pub failed: usize,
    /// Scenes in the index after the swap.
    pub total: usize,
}

/// The whole recap pipeline behind one object.
///
/// Safe to share across threads: the index is swapped atomically, providers
/// are `Send + Sync`, and each request owns its summarization session.
/// Index rebuilds are serialized so each one starts from the last published
/// snapshot.
pub struct RecapEngine {
    config: RecapConfig,
    index: SceneIndexHandle,
    embedder: Arc<dyn IEmbeddingProvider>,
    completion: Arc<dyn ICompletionProvider>,
    actors: Option<Arc<dyn IActorLookup>>,
    counter: TokenCounter,
    registry: CancellationRegistry,
    /// Held from reading the current index until the rebuilt one is swapped in.
    rebuild: Mutex<()>,
}

impl RecapEngine {
    pub fn new(
        config: RecapConfig,
        index: SceneIndex,
        embedder: Arc<dyn IEmbeddingProvider>,
        completion: Arc<dyn ICompletionProvider>,
    ) -> RecapResult<Self> {
        config.validate()?;
        let counter = TokenCounter::for_model(
            &config.summary.tokenizer_model,
            config.summary.token_cache_capacity,
        )?;
        Ok(Self {
            config,
            index: SceneIndexHandle::new(index),
            embedder,
            completion,
            actors: None,
            counter,
            registry: CancellationRegistry::new(),
            rebuild: Mutex::new(()),
        })
    }

    /// Production wiring: tracing, OpenAI-compatible providers, TMDb with a
    /// completion fallback for actors, and the persisted index snapshot.
    pub fn from_config(config: RecapConfig) -> RecapResult<Self> {
        init_tracing(&config.observability);
        let embedder = factory::build_embedder(&config.providers)?;
        let completion = factory::build_completion(&config.providers)?;
        let actors = factory::build_actor_lookup(&config.providers, Arc::clone(&completion));
        let index = factory::load_or_empty_index(&config.index, embedder.dimensions())?;
        Ok(Self::new(config, index, embedder, completion)?.with_actor_lookup(actors))
    }

    pub fn with_actor_lookup(mut self, actors: Arc<dyn IActorLookup>) -> Self {
        self.actors = Some(actors);
        self
    }

    pub fn config(&self) -> &RecapConfig {
        &self.config
    }

    pub fn registry(&self) -> &CancellationRegistry {
        &self.registry
    }

    /// The index snapshot in effect right now.
    pub fn index(&self) -> Arc<SceneIndex> {
        self.index.current()
    }

    /// Ask a running request to stop at its next checkpoint.
    pub fn cancel(&self, request_id: &str) {
        info!(request_id, "cancellation requested");
        self.registry.mark_cancelled(request_id);
    }

    /// Drop cancellation marks older than the configured TTL.
    pub fn cleanup_stale_cancellations(&self) -> usize {
        cleanup_with_ttl_secs(&self.registry, self.config.session.cancelled_ttl_secs)
    }

    /// Run `request`, cancellable through [`cancel`](Self::cancel). The
    /// request's cancellation mark is consumed when the run ends.
    pub fn run(&self, request: &RecapRequest) -> RecapResult<RecapOutcome> {
        let cancellation = self.registry.for_request(request.request_id.as_str());
        let result = self.recap(request, &cancellation);
        self.registry.take_cancelled(&request.request_id);
        result
    }

    /// Query text → recap of the story up to the best matching scene.
    ///
    /// `Err` only for input errors and failures outside the fail-soft stages
    /// (embedding the query, searching the index).
    pub fn recap(
        &self,
        request: &RecapRequest,
        cancellation: &dyn ICancellation,
    ) -> RecapResult<RecapOutcome> {
        let request_id = request.request_id.as_str();
        let snapshot = self.index.current();
        let store = snapshot.store();

        let matcher = SceneMatcher::new(
            self.embedder.as_ref(),
            snapshot.index(),
            store,
            &self.config.matching,
        );
        let Some(best) = matcher.best_match(request_id, &request.text)? else {
            return Ok(RecapOutcome::NoMatch);
        };
        let SceneRecord {
            movie, timestamp, ..
        } = best.scene;

        let selection = TemporalSceneSelector::new(store).select_up_to(&movie, &timestamp);
        let duration = movie_duration(&movie, store);
        debug!(
            request_id,
            movie = %movie,
            timestamp = %timestamp,
            scenes = selection.len(),
            "scenes selected"
        );

        let language = request
            .language
            .clone()
            .unwrap_or_else(|| self.config.summary.default_language.clone());
        let mut session =
            SummarizationSession::new(request_id, movie.clone(), language.clone(), selection.texts);

        let summarizer =
            IncrementalSummarizer::new(self.completion.as_ref(), &self.counter, &self.config.summary);
        let Outcome::Completed(output) = summarizer.summarize(&mut session, cancellation)? else {
            return Ok(RecapOutcome::Cancelled);
        };

        let character_profiles = if output.kind == SummaryKind::Combined {
            let extractor = CharacterProfileExtractor::new(
                self.completion.as_ref(),
                self.actors.as_deref(),
                &self.config.characters,
            );
            match extractor.extract(request_id, &output.summary, &movie, &language, cancellation)? {
                Outcome::Completed(profiles) => profiles,
                Outcome::Cancelled => return Ok(RecapOutcome::Cancelled),
            }
        } else {
            debug!(request_id, kind = ?output.kind, "no summary to profile characters from");
            Vec::new()
        };

        let chunks = ChunkSummarizer::new(self.completion.as_ref(), &self.config.summary);
        let Outcome::Completed(chunk_summaries) = chunks.summarize_chunks(&mut session, cancellation)?
        else {
            return Ok(RecapOutcome::Cancelled);
        };

        if !selection.malformed.is_empty() {
            warn!(request_id, count = selection.malformed.len(), "selected scenes with malformed timestamps");
        }
        info!(
            request_id,
            movie = %movie,
            processed = output.budget.scenes_processed,
            characters = character_profiles.len(),
            chunks = chunk_summaries.len(),
            "recap complete"
        );

        Ok(RecapOutcome::Matched(Box::new(RecapResponse {
            movie,
            timestamp,
            duration,
            summary_until_now: output.summary,
            summary_kind: output.kind,
            character_profiles,
            chunk_summaries,
            budget: output.budget,
            score: best.score,
            malformed_scene_ids: selection.malformed,
        })))
    }

    /// Add `(movie, srt content)` tracks, persist the snapshot, then swap it in.
    pub fn append_tracks(&self, tracks: &[(String, String)]) -> RecapResult<IndexUpdate> {
        let span = recap_observability::index_build_span!(tracks.len());
        let _guard = span.enter();
        let _rebuild = self.rebuild.lock().unwrap_or_else(|e| e.into_inner());
        let current = self.index.current();
        let report = self.builder().append(Some(current.as_ref()), tracks)?;
        self.publish(report)
    }

    /// Index every `.srt` in `dir` on top of the current snapshot.
    pub fn append_dir(&self, dir: &Path) -> RecapResult<IndexUpdate> {
        let span = tracing::info_span!("recap.index_build", dir = %dir.display());
        let _guard = span.enter();
        let _rebuild = self.rebuild.lock().unwrap_or_else(|e| e.into_inner());
        let current = self.index.current();
        let report = self.builder().append_dir(Some(current.as_ref()), dir)?;
        self.publish(report)
    }

    fn builder(&self) -> IndexBuilder<'_> {
        IndexBuilder::new(self.embedder.as_ref(), &self.config.index)
    }

    /// Write first, swap second: a failed write leaves the live index untouched.
    /// Callers hold `rebuild`.
    fn publish(&self, report: BuildReport) -> RecapResult<IndexUpdate> {
        let BuildReport {
            index,
            added,
            skipped_duplicates,
            failed,
        } = report;
        if added > 0 {
            save_snapshot(&index, &self.config.index)?;
        }
        let total = index.len();
        if added > 0 {
            self.index.swap(index);
        }
        Ok(IndexUpdate {
            added,
            skipped_duplicates,
            failed,
            total,
        })
    }
}
