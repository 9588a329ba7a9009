//! Deterministic in-memory collaborators for tests across the workspace.
//!
//! The fixture corpus is three well-known procedures (CCCD issuance,
//! passport issuance, marriage registration), one corpus position each.
//! The embedder and both indexes are keyword-driven so retrieval outcomes
//! are fully predictable, and every collaborator counts its calls so
//! tests can assert what did — and did not — run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use egov_core::errors::{GenerationError, RetrievalError};
use egov_core::models::{CandidateId, ProcedureRecord};
use egov_core::traits::{
    IDocumentStore, IEmbeddingProvider, IGenerator, ILexicalIndex, IVectorIndex,
};

/// Keyword groups, one embedding dimension per topic.
const TOPICS: &[&[&str]] = &[
    &["cccd", "căn", "cước"],
    &["hộ", "chiếu"],
    &["kết", "hôn"],
];

/// Build the three-procedure sample corpus.
pub fn sample_records() -> Vec<ProcedureRecord> {
    let mut cccd = ProcedureRecord::new("https://dichvucong.gov.vn/tt/cap-the-cccd");
    cccd.name = Some("Cấp thẻ Căn cước công dân".to_string());
    cccd.required_documents =
        Some("Sổ hộ khẩu; tờ khai căn cước công dân; ảnh chân dung".to_string());
    cccd.agency = Some("Công an cấp huyện".to_string());
    cccd.process_steps = Some("Nộp hồ sơ; thu nhận vân tay; nhận giấy hẹn".to_string());

    let mut passport = ProcedureRecord::new("https://dichvucong.gov.vn/tt/cap-ho-chieu");
    passport.name = Some("Cấp hộ chiếu phổ thông".to_string());
    passport.required_documents = Some("Tờ khai; ảnh; CMND hoặc CCCD".to_string());
    passport.agency = Some("Phòng Quản lý xuất nhập cảnh".to_string());

    let mut marriage = ProcedureRecord::new("https://dichvucong.gov.vn/tt/dang-ky-ket-hon");
    marriage.name = Some("Đăng ký kết hôn".to_string());
    marriage.required_documents =
        Some("Tờ khai đăng ký kết hôn; giấy xác nhận tình trạng hôn nhân".to_string());
    marriage.agency = Some("Ủy ban nhân dân cấp xã".to_string());

    vec![cccd, passport, marriage]
}

// ── Document store ────────────────────────────────────────────────────────

/// In-memory store: corpus position `i` maps to record `i`.
pub struct FixtureStore {
    records: Vec<ProcedureRecord>,
    by_key: HashMap<String, usize>,
}

impl FixtureStore {
    pub fn new(records: Vec<ProcedureRecord>) -> Self {
        let by_key = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.source.clone(), i))
            .collect();
        Self { records, by_key }
    }

    pub fn sample() -> Self {
        Self::new(sample_records())
    }
}

impl IDocumentStore for FixtureStore {
    fn get(&self, key: &str) -> Option<&ProcedureRecord> {
        self.by_key.get(key).map(|&i| &self.records[i])
    }

    fn key_for(&self, id: CandidateId) -> Option<&str> {
        self.records.get(id.index()).map(|r| {
            r.parent_id
                .as_deref()
                .unwrap_or_else(|| r.source.as_str())
        })
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// ── Embedding provider ────────────────────────────────────────────────────

/// One dimension per topic keyword group; L2-normalized. Texts sharing a
/// topic keyword embed to the same direction.
pub struct KeywordEmbedder {
    calls: AtomicUsize,
}

impl KeywordEmbedder {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn embed_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn vector_for(text: &str) -> Vec<f32> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        let mut vector: Vec<f32> = TOPICS
            .iter()
            .map(|group| {
                if group.iter().any(|kw| tokens.contains(kw)) {
                    1.0
                } else {
                    0.0
                }
            })
            .collect();
        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Default for KeywordEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl IEmbeddingProvider for KeywordEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::vector_for(text))
    }

    fn dimensions(&self) -> usize {
        TOPICS.len()
    }

    fn model_id(&self) -> &str {
        "fixtures/keyword-embedder"
    }
}

/// Embedder whose every call fails; drives vector-signal degradation.
pub struct FailingEmbedder;

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, RetrievalError> {
        Err(RetrievalError::Embedding {
            reason: "fixture embedder down".to_string(),
        })
    }

    fn dimensions(&self) -> usize {
        TOPICS.len()
    }

    fn model_id(&self) -> &str {
        "fixtures/failing-embedder"
    }
}

// ── Vector index ──────────────────────────────────────────────────────────

/// Cosine-distance index over per-position document vectors. Counts
/// searches so tests can assert retrieval was (not) re-run.
pub struct FixtureVectorIndex {
    vectors: Vec<Vec<f32>>,
    searches: AtomicUsize,
}

impl FixtureVectorIndex {
    pub fn new(vectors: Vec<Vec<f32>>) -> Self {
        Self {
            vectors,
            searches: AtomicUsize::new(0),
        }
    }

    /// Index the sample corpus by embedding each record's name. Names
    /// keep the topic dimensions disjoint across the three procedures.
    pub fn sample() -> Self {
        let vectors = sample_records()
            .iter()
            .map(|r| KeywordEmbedder::vector_for(r.name.as_deref().unwrap_or("")))
            .collect();
        Self::new(vectors)
    }

    pub fn search_calls(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

impl IVectorIndex for FixtureVectorIndex {
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<(CandidateId, f32)>, RetrievalError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        let mut pairs: Vec<(CandidateId, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, doc)| {
                let dot: f32 = query.iter().zip(doc.iter()).map(|(a, b)| a * b).sum();
                (CandidateId(i), 1.0 - dot)
            })
            .collect();
        pairs.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        pairs.truncate(k);
        Ok(pairs)
    }

    fn len(&self) -> usize {
        self.vectors.len()
    }
}

/// Vector index whose every search fails.
pub struct FailingVectorIndex {
    corpus_len: usize,
}

impl FailingVectorIndex {
    pub fn new(corpus_len: usize) -> Self {
        Self { corpus_len }
    }
}

impl IVectorIndex for FailingVectorIndex {
    fn search(&self, _query: &[f32], _k: usize) -> Result<Vec<(CandidateId, f32)>, RetrievalError> {
        Err(RetrievalError::SearchFailed {
            reason: "fixture vector index down".to_string(),
        })
    }

    fn len(&self) -> usize {
        self.corpus_len
    }
}

// ── Lexical index ─────────────────────────────────────────────────────────

/// Token-overlap scorer: a position's score is the number of query tokens
/// present in its document text.
pub struct OverlapLexicalIndex {
    documents: Vec<Vec<String>>,
}

impl OverlapLexicalIndex {
    pub fn new(texts: &[String]) -> Self {
        let documents = texts
            .iter()
            .map(|t| {
                t.to_lowercase()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .collect();
        Self { documents }
    }

    pub fn sample() -> Self {
        let texts: Vec<String> = sample_records()
            .iter()
            .map(|r| {
                [
                    r.name.as_deref().unwrap_or(""),
                    r.required_documents.as_deref().unwrap_or(""),
                    r.process_steps.as_deref().unwrap_or(""),
                ]
                .join(" ")
            })
            .collect();
        Self::new(&texts)
    }
}

impl ILexicalIndex for OverlapLexicalIndex {
    fn score(&self, tokens: &[&str]) -> Result<Vec<f32>, RetrievalError> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        Ok(self
            .documents
            .iter()
            .map(|doc| lowered.iter().filter(|t| doc.contains(*t)).count() as f32)
            .collect())
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}

/// Lexical index whose every scoring call fails.
pub struct FailingLexicalIndex {
    corpus_len: usize,
}

impl FailingLexicalIndex {
    pub fn new(corpus_len: usize) -> Self {
        Self { corpus_len }
    }
}

impl ILexicalIndex for FailingLexicalIndex {
    fn score(&self, _tokens: &[&str]) -> Result<Vec<f32>, RetrievalError> {
        Err(RetrievalError::SearchFailed {
            reason: "fixture lexical index down".to_string(),
        })
    }

    fn len(&self) -> usize {
        self.corpus_len
    }
}

// ── Generation service ────────────────────────────────────────────────────

/// Generator returning a canned answer while recording every prompt it
/// receives, so tests can assert what context reached generation.
pub struct RecordingGenerator {
    answer: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingGenerator {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }
}

impl IGenerator for RecordingGenerator {
    fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.answer.clone())
    }
}

/// Generator that always fails with the given error.
pub struct FailingGenerator {
    quota: bool,
}

impl FailingGenerator {
    pub fn hard_failure() -> Self {
        Self { quota: false }
    }

    pub fn quota_exhausted() -> Self {
        Self { quota: true }
    }
}

impl IGenerator for FailingGenerator {
    fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
        if self.quota {
            Err(GenerationError::QuotaExhausted {
                reason: "fixture quota exhausted".to_string(),
            })
        } else {
            Err(GenerationError::Failed {
                reason: "fixture generator down".to_string(),
            })
        }
    }
}
