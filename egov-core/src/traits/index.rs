use crate::errors::RetrievalError;
use crate::models::CandidateId;

/// Nearest-neighbor search over the corpus embedding matrix.
pub trait IVectorIndex: Send + Sync {
    /// Return up to `k` `(id, distance)` pairs for the query vector,
    /// distance monotonically increasing with dissimilarity.
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<(CandidateId, f32)>, RetrievalError>;

    /// Corpus size indexed by this instance.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lexical relevance scorer over the full corpus.
pub trait ILexicalIndex: Send + Sync {
    /// Score every corpus position against the query tokens. The returned
    /// vector is aligned to corpus order and has `len()` entries.
    fn score(&self, tokens: &[&str]) -> Result<Vec<f32>, RetrievalError>;

    /// Corpus size indexed by this instance.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
