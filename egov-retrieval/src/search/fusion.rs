//! Weighted score fusion over independently min-max normalized signals.
//!
//! Both retrieval signals are rescaled to [0, 1] before weighting so that
//! neither dominates through raw magnitude alone.

use egov_core::models::CandidateId;

/// A candidate carrying both raw signals and the fused score.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub id: CandidateId,
    /// Vector similarity aligned to the candidate union (0 when absent).
    pub vector_score: f32,
    /// Lexical score aligned to the candidate union (0 when absent).
    pub lexical_score: f32,
    /// Weighted combination of the normalized signals.
    pub fused_score: f32,
}

/// Min-max normalize a value list: `(v - min) / (max - min)`.
///
/// A constant or empty list normalizes to all zeros; the signal carries
/// no ranking information in that case.
pub fn min_max_normalize(values: &[f32]) -> Vec<f32> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };

    let (min, max) = values.iter().skip(1).fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });

    if max == min {
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| (v - min) / (max - min)).collect()
}

/// Fuse two aligned signal lists into ranked candidates.
///
/// `ids`, `vector_scores`, and `lexical_scores` are aligned to the same
/// candidate union. The result is stable-sorted by fused score descending,
/// so equal scores keep their union (first-seen) order.
pub fn fuse(
    ids: &[CandidateId],
    vector_scores: &[f32],
    lexical_scores: &[f32],
    vector_weight: f32,
    lexical_weight: f32,
) -> Vec<RankedCandidate> {
    debug_assert_eq!(ids.len(), vector_scores.len());
    debug_assert_eq!(ids.len(), lexical_scores.len());

    let norm_vector = min_max_normalize(vector_scores);
    let norm_lexical = min_max_normalize(lexical_scores);

    let mut candidates: Vec<RankedCandidate> = ids
        .iter()
        .enumerate()
        .map(|(i, &id)| RankedCandidate {
            id,
            vector_score: vector_scores[i],
            lexical_score: lexical_scores[i],
            fused_score: vector_weight * norm_vector[i] + lexical_weight * norm_lexical[i],
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.fused_score
            .partial_cmp(&a.fused_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates
}
