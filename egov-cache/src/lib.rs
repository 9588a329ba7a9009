//! # egov-cache
//!
//! Caching for the answer engine: a fingerprint-keyed answer cache with
//! TTL and LRU capacity eviction, and a moka-backed query-embedding cache.

pub mod answer_cache;
pub mod embedding_cache;
pub mod fingerprint;

pub use answer_cache::AnswerCache;
pub use embedding_cache::EmbeddingCache;
pub use fingerprint::Fingerprint;
