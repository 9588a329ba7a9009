/// Generation service errors.
///
/// Kept distinguishable so callers can tell quota exhaustion (retryable
/// against a fallback model) from hard failures. The engine never masks
/// these with fabricated answer text.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Rate or quota limit hit; a fallback model may still succeed.
    #[error("generation quota exhausted: {reason}")]
    QuotaExhausted { reason: String },

    #[error("generation failed: {reason}")]
    Failed { reason: String },

    /// No generation backend is configured or reachable.
    #[error("generation service unavailable")]
    Unavailable,
}

impl GenerationError {
    /// Whether retrying against a fallback backend is worthwhile.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::QuotaExhausted { .. })
    }
}
