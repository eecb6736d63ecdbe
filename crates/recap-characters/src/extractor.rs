use recap_core::config::CharacterConfig;
use recap_core::models::language::language_name;
use recap_core::models::{CharacterProfile, Checkpoint, Outcome, StageResult};
use recap_core::traits::{IActorLookup, ICancellation, ICompletionProvider};
use recap_observability::events;
use tracing::{info, warn};

use crate::deny::DenyLists;
use crate::parse::{parse_characters, scene_numbers};

const EXTRACTION_SYSTEM_INSTRUCTION: &str =
    "You extract structured profiles of characters from movie summaries.";

/// Extracts character profiles from a finished summary.
pub struct CharacterProfileExtractor<'a> {
    completion: &'a dyn ICompletionProvider,
    actors: Option<&'a dyn IActorLookup>,
    deny: DenyLists,
    max_characters: usize,
    temperature: f32,
}

impl<'a> CharacterProfileExtractor<'a> {
    /// `actors` is consulted only when `config.lookup_actors` is set.
    pub fn new(
        completion: &'a dyn ICompletionProvider,
        actors: Option<&'a dyn IActorLookup>,
        config: &CharacterConfig,
    ) -> Self {
        Self {
            completion,
            actors: actors.filter(|_| config.lookup_actors),
            deny: DenyLists::from_config(config),
            max_characters: config.max_characters,
            temperature: config.temperature,
        }
    }

    pub fn with_max_characters(mut self, max_characters: usize) -> Self {
        self.max_characters = max_characters;
        self
    }

    /// Profiles of the human characters in `summary`.
    ///
    /// A blank summary returns no profiles without calling the model. A
    /// failed call or unparseable answer is logged and returns no profiles.
    pub fn extract(
        &self,
        request_id: &str,
        summary: &str,
        movie: &str,
        language: &str,
        cancellation: &dyn ICancellation,
    ) -> StageResult<Vec<CharacterProfile>> {
        if summary.trim().is_empty() || self.max_characters == 0 {
            return Ok(Outcome::Completed(Vec::new()));
        }

        let span = recap_observability::extraction_span!(request_id, movie);
        let _guard = span.enter();

        if cancellation.is_cancelled() {
            events::stage_cancelled(request_id, Checkpoint::BeforeExtraction);
            return Ok(Outcome::Cancelled);
        }

        let prompt = self.prompt(summary, movie, language);
        let response = self
            .completion
            .complete(&prompt, EXTRACTION_SYSTEM_INSTRUCTION, self.temperature);

        if cancellation.is_cancelled() {
            events::stage_cancelled(request_id, Checkpoint::AfterExtraction);
            return Ok(Outcome::Cancelled);
        }

        let raw = match response {
            Ok(raw) => raw,
            Err(e) => {
                events::provider_failure_skipped(request_id, "extraction", 0, &e.to_string());
                return Ok(Outcome::Completed(Vec::new()));
            }
        };
        let parsed = match parse_characters(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(request_id, error = %e, "character JSON unparseable, returning no profiles");
                return Ok(Outcome::Completed(Vec::new()));
            }
        };

        let parsed_count = parsed.len();
        let mut profiles: Vec<CharacterProfile> = parsed
            .into_iter()
            .filter(|p| !p.name.trim().is_empty())
            .filter_map(|p| self.deny.apply(p))
            .take(self.max_characters)
            .collect();

        for profile in &mut profiles {
            profile.actor = self.lookup_actor(request_id, &profile.name, movie);
        }

        info!(
            request_id,
            parsed = parsed_count,
            kept = profiles.len(),
            "character profiles extracted"
        );
        Ok(Outcome::Completed(profiles))
    }

    fn lookup_actor(&self, request_id: &str, name: &str, movie: &str) -> Option<String> {
        let lookup = self.actors?;
        match lookup.find(name, movie) {
            Ok(actor) => actor,
            Err(e) => {
                warn!(request_id, character = name, movie, error = %e, "actor lookup failed");
                None
            }
        }
    }

    fn prompt(&self, summary: &str, movie: &str, language: &str) -> String {
        let numbers = scene_numbers(summary);
        let scene_hint = if numbers.is_empty() {
            "No scene markers found.".to_string()
        } else {
            format!("Known scene numbers: {numbers:?}")
        };
        let movie = if movie.trim().is_empty() { "Unknown" } else { movie };
        let language = language_name(language);

        format!(
            "Extract detailed character profiles from the movie summary below. Focus only on HUMAN characters.\n\
             Exclude clubs, places, schools, tools, brands, and non-human entities.\n\
             \n\
             Return strict JSON in this format:\n\
             {{\n\
             \x20 \"characters\": [\n\
             \x20   {{\n\
             \x20     \"name\": \"string\",\n\
             \x20     \"role\": \"string\",\n\
             \x20     \"traits\": [\"string\"],\n\
             \x20     \"goals\": [\"string\"],\n\
             \x20     \"relationships\": [{{\"with\": \"string\", \"relation\": \"string\", \"sentiment\": \"string\"}}],\n\
             \x20     \"description\": \"Short paragraph: who they are, what drives them, what makes them unique.\"\n\
             \x20   }}\n\
             \x20 ]\n\
             }}\n\
             \n\
             Include up to {max} characters. Use natural short names.\n\
             Keep every name exactly as it appears in the summary; do not translate names.\n\
             Write role, traits, goals, relationships and description in {language}.\n\
             \n\
             Movie: {movie}\n\
             {scene_hint}\n\
             \n\
             SUMMARY:\n\
             \"\"\"{summary}\"\"\"\n",
            max = self.max_characters,
        )
    }
}
