use serde::{Deserialize, Serialize};

use crate::constants;

/// Answer cache and embedding cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Answer cache time-to-live in seconds.
    pub ttl_secs: u64,
    /// Answer cache capacity in entries.
    pub capacity: usize,
    /// Query-embedding cache capacity in entries.
    pub embedding_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: constants::DEFAULT_CACHE_TTL_SECS,
            capacity: constants::DEFAULT_CACHE_CAPACITY,
            embedding_capacity: constants::DEFAULT_EMBEDDING_CACHE_CAPACITY,
        }
    }
}
