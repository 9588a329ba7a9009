//! HybridSearcher: query both retrieval signals, fuse, return top-k.
//!
//! Vector and lexical outcomes are modeled as `Result`s and composed
//! before fusion: one failing signal degrades ranking to the surviving
//! signal; only both failing aborts the search.

pub mod fusion;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use egov_cache::EmbeddingCache;
use egov_core::config::RetrievalConfig;
use egov_core::errors::RetrievalError;
use egov_core::models::CandidateId;
use egov_core::text;
use egov_core::traits::{IEmbeddingProvider, ILexicalIndex, IVectorIndex};

pub use fusion::RankedCandidate;

/// Hybrid retriever fusing nearest-neighbor and lexical rankings.
///
/// Deterministic for a fixed corpus snapshot and fixed inputs: both
/// signals are queried the same way, the candidate union preserves
/// first-seen order, and the final sort is stable.
pub struct HybridSearcher {
    embedder: Arc<dyn IEmbeddingProvider>,
    vector_index: Arc<dyn IVectorIndex>,
    lexical_index: Arc<dyn ILexicalIndex>,
    embedding_cache: EmbeddingCache,
    config: RetrievalConfig,
}

impl HybridSearcher {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        vector_index: Arc<dyn IVectorIndex>,
        lexical_index: Arc<dyn ILexicalIndex>,
        embedding_cache: EmbeddingCache,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            embedder,
            vector_index,
            lexical_index,
            embedding_cache,
            config,
        }
    }

    /// Retrieve the fused top-`top_k` candidate ids for a query.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<CandidateId>, RetrievalError> {
        Ok(self.rank(query, top_k)?.into_iter().map(|c| c.id).collect())
    }

    /// Full ranking with per-signal scores, truncated to `top_k`.
    pub fn rank(&self, query: &str, top_k: usize) -> Result<Vec<RankedCandidate>, RetrievalError> {
        let vector_outcome = self.vector_signal(query, top_k);
        let lexical_outcome = self.lexical_signal(query);

        let (vector_pairs, lexical_pairs) = match (vector_outcome, lexical_outcome) {
            (Ok(v), Ok(l)) => (v, l),
            (Ok(v), Err(e)) => {
                warn!(
                    query,
                    error = %e,
                    signal = "lexical",
                    vector_candidates = v.len(),
                    "signal failed, ranking on vector only"
                );
                (v, Vec::new())
            }
            (Err(e), Ok(l)) => {
                warn!(
                    query,
                    error = %e,
                    signal = "vector",
                    lexical_candidates = l.len(),
                    "signal failed, ranking on lexical only"
                );
                (Vec::new(), l)
            }
            (Err(vector_err), Err(lexical_err)) => {
                return Err(RetrievalError::SearchFailed {
                    reason: format!("vector: {vector_err}; lexical: {lexical_err}"),
                });
            }
        };

        // Union in first-seen order: vector candidates, then lexical.
        let corpus_len = self.corpus_len();
        let mut union: Vec<CandidateId> = Vec::with_capacity(vector_pairs.len() + lexical_pairs.len());
        let mut seen: HashSet<CandidateId> = HashSet::new();
        for &(id, _) in vector_pairs.iter().chain(lexical_pairs.iter()) {
            if id.index() < corpus_len && seen.insert(id) {
                union.push(id);
            }
        }

        let vector_by_id: HashMap<CandidateId, f32> = vector_pairs.into_iter().collect();
        let lexical_by_id: HashMap<CandidateId, f32> = lexical_pairs.into_iter().collect();

        let vector_scores: Vec<f32> = union
            .iter()
            .map(|id| vector_by_id.get(id).copied().unwrap_or(0.0))
            .collect();
        let lexical_scores: Vec<f32> = union
            .iter()
            .map(|id| lexical_by_id.get(id).copied().unwrap_or(0.0))
            .collect();

        let mut ranked = fusion::fuse(
            &union,
            &vector_scores,
            &lexical_scores,
            self.config.vector_weight,
            self.config.lexical_weight,
        );
        ranked.truncate(top_k);

        debug!(
            query,
            union = union.len(),
            returned = ranked.len(),
            "hybrid search complete"
        );

        Ok(ranked)
    }

    /// Embed the query (through the embedding cache) and collect
    /// `(id, similarity)` pairs from the vector index.
    fn vector_signal(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<(CandidateId, f32)>, RetrievalError> {
        let embedding = self.embed_cached(query)?;
        let candidate_count = self.config.effective_candidate_count().max(top_k * 5);
        let neighbors = self.vector_index.search(&embedding, candidate_count)?;

        // Distance to similarity; clamped at 0 so an unbounded metric
        // cannot push a candidate below the missing-signal floor.
        Ok(neighbors
            .into_iter()
            .map(|(id, distance)| (id, (1.0 - distance).max(0.0)))
            .collect())
    }

    /// Score the full corpus lexically and keep the prefilter shortlist.
    fn lexical_signal(&self, query: &str) -> Result<Vec<(CandidateId, f32)>, RetrievalError> {
        let tokens = text::tokenize(query);
        let scores = self.lexical_index.score(&tokens)?;

        // Top `prefilter_size` positions by score, stable on position for ties.
        let mut positions: Vec<usize> = (0..scores.len()).collect();
        positions.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        positions.truncate(self.config.prefilter_size);

        Ok(positions
            .into_iter()
            .map(|p| (CandidateId(p), scores[p]))
            .collect())
    }

    fn embed_cached(&self, query: &str) -> Result<Vec<f32>, RetrievalError> {
        let key = text::normalize(query);
        if let Some(embedding) = self.embedding_cache.get(&key) {
            return Ok(embedding);
        }
        let embedding = self.embedder.embed(query)?;
        self.embedding_cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    fn corpus_len(&self) -> usize {
        self.vector_index.len().min(self.lexical_index.len())
    }
}
