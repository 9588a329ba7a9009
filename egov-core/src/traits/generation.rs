use crate::errors::GenerationError;

/// External text-completion service.
pub trait IGenerator: Send + Sync {
    /// Complete a prompt into answer text. Failures stay distinguishable:
    /// quota exhaustion can be retried against a fallback backend, other
    /// errors propagate to the caller.
    fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}
