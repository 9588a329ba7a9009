//! # egov-core
//!
//! Foundation crate for the eGov procedure answer engine.
//! Defines all shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EgovConfig;
pub use errors::{EgovError, EgovResult};
pub use models::{Answer, CandidateId, ContextSnapshot, ConversationTurn, ProcedureRecord, Role};
