//! SessionManager — concurrent per-session access via DashMap.

use dashmap::DashMap;
use tracing::debug;

use egov_core::config::SessionConfig;
use egov_core::models::{ContextSnapshot, ConversationTurn};

use crate::history::SessionHistory;

/// Thread-safe session store. Each session's history sits behind its own
/// map entry lock, so appends are atomic and sessions never interleave.
pub struct SessionManager {
    sessions: DashMap<String, SessionHistory>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Get a session's history (cloned snapshot), creating an empty one
    /// on first use.
    pub fn history(&self, session_id: &str) -> SessionHistory {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .clone()
    }

    /// Append a single turn to a session.
    pub fn append_turn(&self, session_id: &str, turn: ConversationTurn) {
        let mut history = self.sessions.entry(session_id.to_string()).or_default();
        history.append(turn, self.config.max_turns);
    }

    /// Append a user/assistant pair under one entry guard, so a reader
    /// never observes the question without its answer. An aborted request
    /// that never reaches this point leaves history untouched.
    pub fn append_exchange(
        &self,
        session_id: &str,
        user_turn: ConversationTurn,
        assistant_turn: ConversationTurn,
    ) {
        let mut history = self.sessions.entry(session_id.to_string()).or_default();
        history.append(user_turn, self.config.max_turns);
        history.append(assistant_turn, self.config.max_turns);
    }

    /// The most recent assistant grounding snapshot for a session.
    pub fn last_context(&self, session_id: &str) -> Option<ContextSnapshot> {
        self.sessions
            .get(session_id)
            .and_then(|history| history.last_context().cloned())
    }

    /// Drop a session entirely. Returns whether one existed.
    pub fn clear(&self, session_id: &str) -> bool {
        let removed = self.sessions.remove(session_id).is_some();
        if removed {
            debug!(session_id, "session cleared");
        }
        removed
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// All live session ids.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}
