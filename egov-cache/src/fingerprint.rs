//! Cache fingerprints: a stable hash over the normalized query and the
//! retrieval configuration that shaped the answer.

use egov_core::config::RetrievalConfig;
use egov_core::text;

/// blake3 hash identifying one (query, retrieval config) combination.
///
/// Any config change — model id, top_k, prefilter size — lands in a
/// disjoint key namespace, so stale answers can never be served for a
/// reconfigured engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint a question under a retrieval configuration. The query
    /// is normalized first, so case and spacing variants share an entry.
    pub fn compute(question: &str, config: &RetrievalConfig) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(text::normalize(question).as_bytes());
        hasher.update(b"\x00");
        hasher.update(config.embedding_model_id.as_bytes());
        hasher.update(b"\x00");
        hasher.update(&config.top_k.to_le_bytes());
        hasher.update(&config.prefilter_size.to_le_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Hex form for log lines.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 12 hex chars are plenty for correlation in logs.
        write!(f, "{}", &self.to_hex()[..12])
    }
}
