//! Follow-up classifier: does a question continue the previous turn or
//! open a new topic?
//!
//! Pure function of the question text. Signed phrase rules are stored as
//! data so the table is testable rule by rule; checks are independent and
//! non-exclusive, and the signed sum decides.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use egov_core::text;

/// Classification outcome. `Continue` means the caller should reuse the
/// previous turn's grounding context and skip retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    New,
}

/// One signed rule: fires at most once per question when any of its
/// phrase patterns matches the normalized text.
struct PhraseRule {
    name: &'static str,
    weight: i32,
    patterns: Vec<Regex>,
}

impl PhraseRule {
    fn new(name: &'static str, weight: i32, patterns: &[&str]) -> Self {
        Self {
            name,
            weight,
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(normalized))
    }
}

/// Questions at or below this word count lean toward continuation.
const SHORT_QUESTION_WORDS: usize = 4;
const SHORT_QUESTION_WEIGHT: i32 = -1;

static PHRASE_RULES: LazyLock<Vec<PhraseRule>> = LazyLock::new(|| {
    vec![
        // Strong back-references to the previous answer.
        PhraseRule::new(
            "back_reference",
            -3,
            &[
                r"\bnó\b",
                r"cái (đó|này)",
                r"thủ\s*tục (này|đó|trên)",
                r"hồ\s*sơ (này|đó)",
                r"giấy\s*phép (này|trên)",
                r"(như|mà) (mình|tôi|em) vừa hỏi",
                r"ở trên",
                r"\bthat procedure\b",
                r"\babove\b",
            ],
        ),
        // Detail questions about duration, cost, location, requirements.
        PhraseRule::new(
            "detail_seeking",
            -2,
            &[
                r"mất bao lâu",
                r"\bbao lâu\b",
                r"bao nhiêu tiền",
                r"lệ phí",
                r"chi phí",
                r"ở đâu",
                r"nộp (tại|ở) đâu",
                r"cần (những )?gì",
                r"thời hạn",
                r"\bhow long\b",
                r"\bhow much\b",
            ],
        ),
        // Explicitly named procedures open a new topic.
        PhraseRule::new(
            "specific_service",
            3,
            &[
                r"đăng\s*k(ý|í)",
                r"giấy\s*phép",
                r"căn cước công dân",
                r"\bcccd\b",
                r"hộ chiếu",
                r"khai sinh",
                r"khai tử",
                r"kết hôn",
                r"hộ khẩu",
                r"(thường|tạm) trú",
                r"thủ\s*tục (cấp|làm|đổi|xin|gia\s*hạn)",
            ],
        ),
    ]
});

/// Scores a question against the rule table. Stateless; the rule table is
/// compiled once per process.
#[derive(Debug, Default, Clone, Copy)]
pub struct FollowupClassifier;

impl FollowupClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a question. `Continue` iff the signed score is negative.
    pub fn classify(&self, question: &str) -> Continuation {
        let normalized = text::normalize(question);
        if normalized.is_empty() {
            return Continuation::New;
        }

        let score = self.score(&normalized);
        let outcome = if score < 0 {
            Continuation::Continue
        } else {
            Continuation::New
        };
        debug!(question, score, ?outcome, "follow-up classification");
        outcome
    }

    /// Signed score over the already-normalized question text.
    pub fn score(&self, normalized: &str) -> i32 {
        let mut score = 0;
        for rule in PHRASE_RULES.iter() {
            if rule.matches(normalized) {
                debug!(rule = rule.name, weight = rule.weight, "rule fired");
                score += rule.weight;
            }
        }
        if text::tokenize(normalized).len() <= SHORT_QUESTION_WORDS {
            score += SHORT_QUESTION_WEIGHT;
        }
        score
    }
}
