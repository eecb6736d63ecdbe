use std::sync::Arc;

use recap_core::errors::{ActorLookupError, RecapResult};
use recap_core::traits::{IActorLookup, ICompletionProvider};
use serde::Deserialize;
use tracing::debug;

const SYSTEM_INSTRUCTION: &str = "You are a movie expert who answers strictly in JSON.";
const TEMPERATURE: f32 = 0.2;

/// Fallback lookup that asks the completion model directly.
pub struct CompletionActorLookup {
    completion: Arc<dyn ICompletionProvider>,
}

#[derive(Deserialize)]
struct ActorAnswer {
    #[serde(default)]
    actor: Option<String>,
}

impl CompletionActorLookup {
    pub fn new(completion: Arc<dyn ICompletionProvider>) -> Self {
        Self { completion }
    }

    fn prompt(character: &str, movie: &str) -> String {
        format!(
            "Return only the full name of the actor or actress who plays the character \
             \"{character}\" in the movie \"{movie}\".\n\
             Respond only in this JSON format:\n\n{{\n  \"actor\": \"Full Name\"\n}}\n\n\
             Do not include any other text."
        )
    }
}

/// Decode `{"actor": "..."}`, tolerating a Markdown code fence. A null or
/// blank actor is `None`.
pub fn parse_actor_answer(raw: &str) -> Result<Option<String>, ActorLookupError> {
    let body = strip_fence(raw);
    let answer: ActorAnswer =
        serde_json::from_str(body).map_err(|e| ActorLookupError::InvalidResponse {
            reason: format!("{e}"),
        })?;
    Ok(answer
        .actor
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty()))
}

fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

impl IActorLookup for CompletionActorLookup {
    fn find(&self, character_name: &str, movie_title: &str) -> RecapResult<Option<String>> {
        let raw = self.completion.complete(
            &Self::prompt(character_name, movie_title),
            SYSTEM_INSTRUCTION,
            TEMPERATURE,
        )?;
        let actor = parse_actor_answer(&raw)?;
        debug!(character = character_name, movie = movie_title, found = actor.is_some(), "completion actor lookup");
        Ok(actor)
    }

    fn name(&self) -> &str {
        "completion"
    }
}
