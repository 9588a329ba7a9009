//! Error types for the answer engine, one enum per subsystem.

pub mod generation_error;
pub mod resource_error;
pub mod retrieval_error;

pub use generation_error::GenerationError;
pub use resource_error::ResourceError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the answer engine.
#[derive(Debug, thiserror::Error)]
pub enum EgovError {
    /// The question was empty or otherwise unusable; rejected before retrieval.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Convenience result alias used across the workspace.
pub type EgovResult<T> = Result<T, EgovError>;
