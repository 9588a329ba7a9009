use serde::{Deserialize, Serialize};

use crate::constants;

/// Conversation history configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cap on turns retained per session; oldest turns are dropped beyond it.
    pub max_turns: usize,
    /// Number of trailing turns rendered into the generation prompt.
    pub history_window: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: constants::DEFAULT_MAX_TURNS,
            history_window: constants::DEFAULT_HISTORY_WINDOW,
        }
    }
}
