// Single source of truth for all default values.

// --- Matching ---
pub const DEFAULT_DISTANCE_THRESHOLD: f32 = 0.35;
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_MIN_QUERY_TOKENS: usize = 5;
pub const DEFAULT_MIN_DISTINCT_TOKENS: usize = 4;

// --- Summary ---
pub const DEFAULT_TOKEN_BUDGET: usize = 15_000;
pub const DEFAULT_CHUNK_SIZE: usize = 5;
pub const DEFAULT_SCENE_TEMPERATURE: f32 = 0.6;
pub const DEFAULT_COMBINE_TEMPERATURE: f32 = 0.6;
pub const DEFAULT_CHUNK_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TOKENIZER_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TOKEN_CACHE_CAPACITY: u64 = 10_000;

// --- Characters ---
pub const DEFAULT_MAX_CHARACTERS: usize = 10;
pub const DEFAULT_EXTRACTION_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_LOOKUP_ACTORS: bool = true;
pub const DEFAULT_NAME_DENY_LIST: &[&str] =
    &["club", "facebook", "harvard", "phoenix", "porcellian", "final"];
pub const DEFAULT_RELATIONSHIP_DENY_LIST: &[&str] =
    &["club", "facebook", "academic", "pressures", "system", "site"];

// --- Providers ---
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_API_KEY_ENV: &str = "TMDB_API_KEY";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 1_000;

// --- Index ---
pub const DEFAULT_INDEX_DIR: &str = "embeddings";
pub const DEFAULT_SCENES_FILE: &str = "scenes.json";
pub const DEFAULT_VECTORS_FILE: &str = "vectors.bin";
pub const DEFAULT_LINES_PER_SCENE: usize = 5;

// --- Session ---
pub const DEFAULT_CANCELLED_TTL_SECS: u64 = 3_600; // 1 hour

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
