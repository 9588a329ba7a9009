/// Startup resource loading errors. All of these are fatal: the engine
/// refuses to serve without its corpus and models.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to load {resource}: {reason}")]
    LoadFailed { resource: String, reason: String },

    /// The vector index, lexical index, and document store disagree on
    /// corpus size, so positional ids would not line up.
    #[error("corpus snapshot mismatch: vector={vector}, lexical={lexical}, store={store}")]
    CorpusMismatch {
        vector: usize,
        lexical: usize,
        store: usize,
    },
}
