//! Fallback chain for actor lookup.
//!
//! Chain: validity gate → each lookup in priority order → none.
//! Every failing lookup is logged and skipped. Lookups run inside the
//! caller's `recap.characters` span, which carries the request id.

use recap_core::errors::RecapResult;
use recap_core::traits::IActorLookup;
use tracing::{debug, warn};

use crate::validity::is_valid_character_name;

/// Tries lookups in order; the first non-empty answer wins.
#[derive(Default)]
pub struct ActorLookupChain {
    chain: Vec<Box<dyn IActorLookup>>,
}

impl ActorLookupChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lookup to the end of the chain.
    pub fn push(&mut self, lookup: Box<dyn IActorLookup>) {
        self.chain.push(lookup);
    }

    pub fn with(mut self, lookup: Box<dyn IActorLookup>) -> Self {
        self.push(lookup);
        self
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl IActorLookup for ActorLookupChain {
    /// Never fails: a lookup error only moves on to the next lookup.
    fn find(&self, character_name: &str, movie_title: &str) -> RecapResult<Option<String>> {
        if !is_valid_character_name(character_name) {
            debug!(character = character_name, "not a character name, skipping actor lookup");
            return Ok(None);
        }

        for lookup in &self.chain {
            match lookup.find(character_name, movie_title) {
                Ok(Some(actor)) if !actor.trim().is_empty() => {
                    debug!(character = character_name, actor = %actor, source = lookup.name(), "actor found");
                    return Ok(Some(actor.trim().to_string()));
                }
                Ok(_) => continue,
                Err(e) => {
                    warn!(
                        character = character_name,
                        movie = movie_title,
                        source = lookup.name(),
                        error = %e,
                        "actor lookup failed, trying next"
                    );
                }
            }
        }
        Ok(None)
    }

    fn name(&self) -> &str {
        "chain"
    }
}
