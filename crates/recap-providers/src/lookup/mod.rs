//! Actor lookup sources.

mod completion;
mod tmdb;

pub use completion::{parse_actor_answer, CompletionActorLookup};
pub use tmdb::{match_cast, normalize_name, title_candidates, CastMember, TmdbActorLookup};
