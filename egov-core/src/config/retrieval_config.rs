use serde::{Deserialize, Serialize};

use crate::constants;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Embedding model identifier; part of the cache fingerprint.
    pub embedding_model_id: String,
    /// Number of fused candidates returned per query.
    pub top_k: usize,
    /// Floor on the nearest-neighbor request size; the effective request
    /// is `max(candidate_count, top_k * 5)`.
    pub candidate_count: usize,
    /// Size of the lexical prefilter shortlist.
    pub prefilter_size: usize,
    /// Fusion weight applied to the normalized vector signal.
    pub vector_weight: f32,
    /// Fusion weight applied to the normalized lexical signal.
    pub lexical_weight: f32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            embedding_model_id: constants::DEFAULT_EMBEDDING_MODEL_ID.to_string(),
            top_k: constants::DEFAULT_TOP_K,
            candidate_count: constants::DEFAULT_CANDIDATE_COUNT,
            prefilter_size: constants::DEFAULT_PREFILTER_SIZE,
            vector_weight: constants::DEFAULT_VECTOR_WEIGHT,
            lexical_weight: constants::DEFAULT_LEXICAL_WEIGHT,
        }
    }
}

impl RetrievalConfig {
    /// Effective nearest-neighbor request size for a given `top_k`.
    pub fn effective_candidate_count(&self) -> usize {
        self.candidate_count.max(self.top_k * 5)
    }
}
