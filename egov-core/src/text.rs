//! Text normalization shared by the classifier, the cache fingerprint,
//! and the embedding cache key.

/// Lowercase and collapse all whitespace runs to single spaces.
///
/// Two questions differing only in case or spacing normalize to the same
/// string, so they share one cache fingerprint and classify identically.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace tokenization used by the lexical scorer.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
