/// Retrieval subsystem errors.
///
/// A single failing signal is recovered locally by the searcher and never
/// surfaces here; these variants mean retrieval could not proceed at all.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("query embedding failed: {reason}")]
    Embedding { reason: String },

    #[error("search failed: {reason}")]
    SearchFailed { reason: String },
}
