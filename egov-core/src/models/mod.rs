pub mod answer;
pub mod candidate;
pub mod procedure;
pub mod turn;

pub use answer::Answer;
pub use candidate::CandidateId;
pub use procedure::ProcedureRecord;
pub use turn::{ContextSnapshot, ConversationTurn, Role};
