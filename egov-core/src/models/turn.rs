use serde::{Deserialize, Serialize};

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// The grounding context attached to an assistant turn: which procedure
/// the answer was based on, and the assembled text handed to generation.
///
/// A follow-up classified as a continuation reuses the most recent
/// snapshot verbatim instead of re-running retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSnapshot {
    /// Primary key of the grounding procedure, when one was found.
    pub source_key: Option<String>,
    /// Assembled procedure text; empty when retrieval found nothing.
    pub text: String,
}

impl ContextSnapshot {
    /// Snapshot representing a retrieval that found no candidates.
    pub fn empty() -> Self {
        Self {
            source_key: None,
            text: String::new(),
        }
    }
}

/// One user or assistant exchange recorded in session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    /// Present on assistant turns; the grounding used for the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextSnapshot>,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            context: None,
        }
    }

    pub fn assistant(content: impl Into<String>, context: ContextSnapshot) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            context: Some(context),
        }
    }
}
