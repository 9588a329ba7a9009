use serde::{Deserialize, Serialize};

/// The engine's response to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Generated (or cached) answer text.
    pub text: String,
    /// Whether the answer was served from the answer cache.
    pub cached: bool,
    /// Primary key of the procedure used as grounding, when one was found.
    pub source_key: Option<String>,
}
