//! SessionHistory — the ordered turn sequence of one conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use egov_core::models::{ContextSnapshot, ConversationTurn, Role};

/// Turn history for a single session. Ordering always reflects append
/// order; growth is bounded by the manager's `max_turns`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHistory {
    /// Turns in arrival order, oldest first.
    pub turns: Vec<ConversationTurn>,
    /// When this session was first seen.
    pub created_at: DateTime<Utc>,
    /// Last append timestamp.
    pub last_activity: DateTime<Utc>,
}

impl SessionHistory {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            turns: Vec::new(),
            created_at: now,
            last_activity: now,
        }
    }

    /// Append a turn, dropping the oldest turns beyond `max_turns`.
    pub fn append(&mut self, turn: ConversationTurn, max_turns: usize) {
        self.turns.push(turn);
        if self.turns.len() > max_turns {
            let excess = self.turns.len() - max_turns;
            self.turns.drain(..excess);
        }
        self.last_activity = Utc::now();
    }

    /// The grounding snapshot of the most recent assistant turn, if any.
    /// This is what a continuation reuses instead of re-retrieving.
    pub fn last_context(&self) -> Option<&ContextSnapshot> {
        self.turns
            .iter()
            .rev()
            .find(|turn| turn.role == Role::Assistant)
            .and_then(|turn| turn.context.as_ref())
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}
