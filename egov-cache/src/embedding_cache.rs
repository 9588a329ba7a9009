//! Query-embedding cache using moka.
//!
//! Re-asked questions skip the embedding model entirely. Keys are
//! normalized question texts; values are the embedding vectors.

use moka::sync::Cache;

/// Capacity-bounded in-memory cache for query embeddings.
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// Create a cache holding up to `max_entries` embeddings.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_entries).build();
        Self { cache }
    }

    /// Get an embedding by normalized query text.
    pub fn get(&self, normalized_query: &str) -> Option<Vec<f32>> {
        self.cache.get(normalized_query)
    }

    /// Insert an embedding keyed by normalized query text.
    pub fn insert(&self, normalized_query: String, embedding: Vec<f32>) {
        self.cache.insert(normalized_query, embedding);
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
