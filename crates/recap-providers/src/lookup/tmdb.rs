use std::sync::LazyLock;

use recap_core::config::ProviderConfig;
use recap_core::errors::{ActorLookupError, RecapResult};
use recap_core::traits::IActorLookup;
use regex::Regex;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::http::build_client;

static TRAILING_YEAR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(.*?)(?:\s+|_)?(\d{4})$").ok());

static NON_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^\w\s]").ok());

/// Actor lookup against The Movie Database: search the movie, then match the
/// character against its cast credits.
pub struct TmdbActorLookup {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct CreditsResponse {
    #[serde(default)]
    cast: Vec<CastMember>,
}

/// One cast credit: the actor's `name` and the `character` they play.
#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: String,
}

/// Titles to search, in order: as given, underscores as spaces, then without
/// a trailing four-digit year. Duplicates and blanks are dropped.
pub fn title_candidates(title: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut push = |candidate: String| {
        if !candidate.trim().is_empty() && !out.contains(&candidate) {
            out.push(candidate);
        }
    };

    push(title.to_string());
    if title.contains('_') {
        push(title.replace('_', " "));
    }
    if let Some(caps) = TRAILING_YEAR.as_ref().and_then(|re| re.captures(title.trim())) {
        if let Some(stem) = caps.get(1) {
            push(stem.as_str().replace('_', " ").trim().to_string());
        }
    }
    out
}

/// Lowercase, trim, drop punctuation.
pub fn normalize_name(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    match NON_WORD.as_ref() {
        Some(re) => re.replace_all(&lowered, "").into_owned(),
        None => lowered,
    }
}

/// First cast member whose normalized character credit contains the
/// normalized `character` ("Mark" matches "Mark Zuckerberg").
pub fn match_cast(cast: &[CastMember], character: &str) -> Option<String> {
    let target = normalize_name(character);
    if target.trim().is_empty() {
        return None;
    }
    cast.iter()
        .find(|member| normalize_name(&member.character).contains(&target))
        .map(|member| member.name.clone())
}

impl TmdbActorLookup {
    pub fn new(config: &ProviderConfig, api_key: String) -> RecapResult<Self> {
        let client = build_client(config).map_err(|e| ActorLookupError::RequestFailed {
            reason: format!("client setup: {e}"),
        })?;
        Ok(Self {
            client,
            base_url: config.tmdb_base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &ProviderConfig) -> RecapResult<Self> {
        Self::new(config, config.tmdb_api_key()?)
    }

    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ActorLookupError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .map_err(|e| ActorLookupError::RequestFailed {
                reason: format!("HTTP error: {e}"),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ActorLookupError::RequestFailed {
                reason: format!("TMDb returned {status}"),
            });
        }
        response.json().map_err(|e| ActorLookupError::InvalidResponse {
            reason: format!("JSON parse error: {e}"),
        })
    }

    /// Id of the first search result for `title`.
    fn search_movie(&self, title: &str) -> Result<Option<u64>, ActorLookupError> {
        let found: SearchResponse = self.get("search/movie", &[("query", title)])?;
        Ok(found.results.first().map(|hit| hit.id))
    }

    fn credits(&self, movie_id: u64) -> Result<Vec<CastMember>, ActorLookupError> {
        let credits: CreditsResponse = self.get(&format!("movie/{movie_id}/credits"), &[])?;
        Ok(credits.cast)
    }

    fn resolve_movie(&self, movie_title: &str) -> Result<Option<u64>, ActorLookupError> {
        let mut last_err = None;
        for candidate in title_candidates(movie_title) {
            match self.search_movie(&candidate) {
                Ok(Some(id)) => {
                    debug!(movie = movie_title, query = %candidate, tmdb_id = id, "TMDb movie resolved");
                    return Ok(Some(id));
                }
                Ok(None) => debug!(query = %candidate, "TMDb search returned nothing"),
                Err(e) => {
                    warn!(query = %candidate, error = %e, "TMDb search failed");
                    last_err = Some(e);
                }
            }
        }
        match last_err {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }
}

impl IActorLookup for TmdbActorLookup {
    fn find(&self, character_name: &str, movie_title: &str) -> RecapResult<Option<String>> {
        if normalize_name(character_name).trim().is_empty() {
            return Ok(None);
        }
        let Some(movie_id) = self.resolve_movie(movie_title)? else {
            debug!(movie = movie_title, "no TMDb results for movie");
            return Ok(None);
        };
        let cast = self.credits(movie_id)?;
        let actor = match_cast(&cast, character_name);
        if actor.is_none() {
            debug!(character = character_name, movie = movie_title, cast = cast.len(), "no cast match");
        }
        Ok(actor)
    }

    fn name(&self) -> &str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, character: &str) -> CastMember {
        CastMember {
            name: name.to_string(),
            character: character.to_string(),
        }
    }

    #[test]
    fn candidates_for_underscored_title_with_year() {
        assert_eq!(
            title_candidates("The_Social_Network_2010"),
            vec!["The_Social_Network_2010", "The Social Network 2010", "The Social Network"]
        );
    }

    #[test]
    fn candidates_for_plain_title() {
        assert_eq!(title_candidates("Inception"), vec!["Inception"]);
        assert_eq!(title_candidates("Titanic 1997"), vec!["Titanic 1997", "Titanic"]);
    }

    #[test]
    fn bare_year_title_keeps_only_itself() {
        assert_eq!(title_candidates("2012"), vec!["2012"]);
    }

    #[test]
    fn normalization_drops_punctuation() {
        assert_eq!(normalize_name("  Eduardo Saverin (Young) "), "eduardo saverin young");
        assert_eq!(normalize_name("D'Artagnan"), "dartagnan");
    }

    #[test]
    fn partial_credit_matches() {
        let cast = vec![
            member("Jesse Eisenberg", "Mark Zuckerberg"),
            member("Andrew Garfield", "Eduardo Saverin"),
        ];
        assert_eq!(match_cast(&cast, "Eduardo").as_deref(), Some("Andrew Garfield"));
        assert_eq!(match_cast(&cast, "mark zuckerberg").as_deref(), Some("Jesse Eisenberg"));
        assert_eq!(match_cast(&cast, "Erica"), None);
        assert_eq!(match_cast(&cast, "?!"), None);
    }

    #[test]
    fn credits_body_decodes_without_character() {
        let body = r#"{"id":1,"cast":[{"name":"A","character":"B"},{"name":"C"}]}"#;
        let credits: CreditsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(credits.cast.len(), 2);
        assert_eq!(credits.cast[1].character, "");
    }
}
