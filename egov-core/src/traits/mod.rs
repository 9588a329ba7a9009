//! Traits for the external collaborators the engine is wired with.
//!
//! The embedding model, both indexes, the document store, and the
//! generation service are external primitives; the engine only sees
//! these interfaces. All are `Send + Sync` so read-only collaborators
//! can be shared across workers without locking.

pub mod embedding;
pub mod generation;
pub mod index;
pub mod store;

pub use embedding::IEmbeddingProvider;
pub use generation::IGenerator;
pub use index::{ILexicalIndex, IVectorIndex};
pub use store::IDocumentStore;
