//! # egov-answer
//!
//! The orchestration crate: one `AnswerEngine` owns every store and
//! collaborator, and drives the classifier → retrieval → cache →
//! generation → history flow for each question.

pub mod engine;
pub mod prompt;

pub use engine::{AnswerEngine, EngineStatus};
