//! # egov-retrieval
//!
//! The retrieval half of the answer engine: hybrid search fusing a vector
//! and a lexical signal, the follow-up classifier gating context reuse,
//! and the procedure text assembler producing grounding context.

pub mod assemble;
pub mod followup;
pub mod search;

pub use assemble::{assemble, NOT_FOUND_TEXT};
pub use followup::{Continuation, FollowupClassifier};
pub use search::{HybridSearcher, RankedCandidate};
