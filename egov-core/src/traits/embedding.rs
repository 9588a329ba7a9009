use crate::errors::RetrievalError;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text into a fixed-length, L2-normalized vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Model identifier; part of the answer cache fingerprint, so swapping
    /// the model invalidates cached answers by construction.
    fn model_id(&self) -> &str;
}
