//! Engine configuration, loadable from TOML with serde defaults.

pub mod cache_config;
pub mod retrieval_config;
pub mod session_config;

use serde::{Deserialize, Serialize};

use crate::errors::{EgovError, EgovResult};

pub use cache_config::CacheConfig;
pub use retrieval_config::RetrievalConfig;
pub use session_config::SessionConfig;

/// Root configuration for the answer engine.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EgovConfig {
    pub retrieval: RetrievalConfig,
    pub cache: CacheConfig,
    pub session: SessionConfig,
}

impl EgovConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(input: &str) -> EgovResult<Self> {
        let config: Self = toml::from_str(input)
            .map_err(|e| EgovError::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants that serde defaults cannot express.
    pub fn validate(&self) -> EgovResult<()> {
        if self.retrieval.top_k == 0 {
            return Err(EgovError::Config("top_k must be at least 1".to_string()));
        }
        if self.retrieval.vector_weight < 0.0 || self.retrieval.lexical_weight < 0.0 {
            return Err(EgovError::Config(
                "fusion weights must be non-negative".to_string(),
            ));
        }
        if self.retrieval.vector_weight + self.retrieval.lexical_weight <= 0.0 {
            return Err(EgovError::Config(
                "at least one fusion weight must be positive".to_string(),
            ));
        }
        if self.cache.capacity == 0 {
            return Err(EgovError::Config(
                "cache capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
