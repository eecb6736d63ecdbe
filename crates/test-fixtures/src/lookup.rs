use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use recap_core::errors::{ActorLookupError, RecapResult};
use recap_core::traits::IActorLookup;

/// Actor lookup answering from a fixed table; names listed in `failing`
/// produce an error instead.
#[derive(Default)]
pub struct StaticActorLookup {
    actors: HashMap<String, String>,
    failing: Vec<String>,
    calls: AtomicUsize,
}

impl StaticActorLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, character: &str, actor: &str) -> Self {
        self.actors.insert(character.to_string(), actor.to_string());
        self
    }

    pub fn failing_for(mut self, character: &str) -> Self {
        self.failing.push(character.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IActorLookup for StaticActorLookup {
    fn find(&self, character_name: &str, _movie_title: &str) -> RecapResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.iter().any(|f| f == character_name) {
            return Err(ActorLookupError::RequestFailed {
                reason: "static lookup failure".to_string(),
            }
            .into());
        }
        Ok(self.actors.get(character_name).cloned())
    }

    fn name(&self) -> &str {
        "static"
    }
}
