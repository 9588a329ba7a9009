use crate::models::{CandidateId, ProcedureRecord};

/// Read-only lookup of procedure records, loaded once at startup.
pub trait IDocumentStore: Send + Sync {
    /// Resolve a record by primary key (source URL) or parent id.
    fn get(&self, key: &str) -> Option<&ProcedureRecord>;

    /// Map a corpus position to the record key it belongs to: the parent
    /// id when the position is a chunk of a larger record, the source key
    /// otherwise.
    fn key_for(&self, id: CandidateId) -> Option<&str>;

    /// Number of corpus positions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
