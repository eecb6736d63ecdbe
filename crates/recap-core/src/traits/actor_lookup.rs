use crate::errors::RecapResult;

/// Finds the actor playing a character in a movie.
pub trait IActorLookup: Send + Sync {
    /// `Ok(None)` means the lookup ran and found nobody.
    fn find(&self, character_name: &str, movie_title: &str) -> RecapResult<Option<String>>;

    /// Human-readable source name.
    fn name(&self) -> &str;
}
