/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of fused candidates returned per query.
pub const DEFAULT_TOP_K: usize = 3;

/// Floor on the nearest-neighbor request size; the effective count is
/// `max(candidate_count, top_k * 5)`.
pub const DEFAULT_CANDIDATE_COUNT: usize = 10;

/// Default size of the lexical prefilter shortlist.
pub const DEFAULT_PREFILTER_SIZE: usize = 200;

/// Default answer cache time-to-live in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Default answer cache capacity (entries).
pub const DEFAULT_CACHE_CAPACITY: usize = 2000;

/// Default fusion weight for the vector signal.
pub const DEFAULT_VECTOR_WEIGHT: f32 = 0.7;

/// Default fusion weight for the lexical signal.
pub const DEFAULT_LEXICAL_WEIGHT: f32 = 0.3;

/// Default cap on turns retained per session.
pub const DEFAULT_MAX_TURNS: usize = 40;

/// Default number of trailing turns rendered into the prompt.
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Default query-embedding cache capacity (entries).
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 1000;

/// Default embedding model identifier.
pub const DEFAULT_EMBEDDING_MODEL_ID: &str = "AITeamVN/Vietnamese_Embedding";
