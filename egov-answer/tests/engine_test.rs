use std::sync::Arc;

use egov_answer::AnswerEngine;
use egov_core::config::EgovConfig;
use egov_core::errors::{EgovError, GenerationError};
use egov_core::traits::IGenerator;
use test_fixtures::{
    FailingGenerator, FailingLexicalIndex, FixtureStore, FixtureVectorIndex, KeywordEmbedder,
    OverlapLexicalIndex, RecordingGenerator,
};

const CCCD_SOURCE: &str = "https://dichvucong.gov.vn/tt/cap-the-cccd";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn sample_engine_with(
    generator: Arc<dyn IGenerator>,
) -> (AnswerEngine, Arc<FixtureVectorIndex>, Arc<KeywordEmbedder>) {
    let store = Arc::new(FixtureStore::sample());
    let embedder = Arc::new(KeywordEmbedder::new());
    let vector = Arc::new(FixtureVectorIndex::sample());
    let lexical = Arc::new(OverlapLexicalIndex::sample());
    let engine = AnswerEngine::new(
        store,
        embedder.clone(),
        vector.clone(),
        lexical,
        generator,
        EgovConfig::default(),
    )
    .unwrap();
    (engine, vector, embedder)
}

// ── End-to-end: new topic, then continuation ──────────────────────────────

#[test]
fn new_question_retrieves_and_grounds_generation() {
    init_tracing();
    let generator = Arc::new(RecordingGenerator::new("Bạn cần sổ hộ khẩu và tờ khai."));
    let (engine, vector, _) = sample_engine_with(generator.clone());

    let answer = engine.answer("Hồ sơ cấp CCCD cần gì?", "s1").unwrap();

    assert!(!answer.cached);
    assert_eq!(answer.source_key.as_deref(), Some(CCCD_SOURCE));
    assert_eq!(vector.search_calls(), 1);

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    // The top fused candidate's assembled text reached generation.
    assert!(prompts[0].contains("Cấp thẻ Căn cước công dân"));
    assert!(prompts[0].contains("CÂU HỎI: Hồ sơ cấp CCCD cần gì?"));
}

#[test]
fn continuation_reuses_context_without_re_retrieval() {
    init_tracing();
    let generator = Arc::new(RecordingGenerator::new("Chỉ cần thêm ảnh chân dung."));
    let (engine, vector, _) = sample_engine_with(generator.clone());

    let first = engine.answer("Hồ sơ cấp CCCD cần gì?", "s1").unwrap();
    let second = engine.answer("còn cần gì nữa không", "s1").unwrap();

    // Same grounding, no second index query.
    assert_eq!(vector.search_calls(), 1);
    assert_eq!(second.source_key, first.source_key);

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("Cấp thẻ Căn cước công dân"));
    // The follow-up prompt carries the prior exchange as history.
    assert!(prompts[1].contains("user: Hồ sơ cấp CCCD cần gì?"));
}

#[test]
fn continuation_without_history_falls_back_to_retrieval() {
    let generator = Arc::new(RecordingGenerator::new("answer"));
    let (engine, vector, _) = sample_engine_with(generator);

    // Classified as a continuation, but the session has no prior context.
    let answer = engine.answer("cái đó mất bao lâu", "fresh").unwrap();
    assert_eq!(vector.search_calls(), 1);
    assert!(!answer.cached);
}

// ── Input validation ──────────────────────────────────────────────────────

#[test]
fn blank_question_is_rejected_before_retrieval() {
    let generator = Arc::new(RecordingGenerator::new("unused"));
    let (engine, vector, embedder) = sample_engine_with(generator.clone());

    let err = engine.answer("   ", "s1").unwrap_err();
    assert!(matches!(err, EgovError::InvalidInput(_)));
    assert_eq!(embedder.embed_calls(), 0);
    assert_eq!(vector.search_calls(), 0);
    assert_eq!(generator.call_count(), 0);
}

// ── Generation failures ───────────────────────────────────────────────────

#[test]
fn generation_failure_propagates_and_corrupts_nothing() {
    let generator = Arc::new(FailingGenerator::hard_failure());
    let (engine, _, _) = sample_engine_with(generator);

    let err = engine.answer("Hồ sơ cấp CCCD cần gì?", "s1").unwrap_err();
    assert!(matches!(
        err,
        EgovError::Generation(GenerationError::Failed { .. })
    ));

    // The aborted request left no cached answer and no half-written turns.
    assert_eq!(engine.status().cached_answers, 0);
    assert!(engine.session_history("s1").is_empty());
}

#[test]
fn quota_exhaustion_retries_on_the_fallback_generator() {
    let fallback = Arc::new(RecordingGenerator::new("từ mô hình dự phòng"));
    let store = Arc::new(FixtureStore::sample());
    let engine = AnswerEngine::new(
        store,
        Arc::new(KeywordEmbedder::new()),
        Arc::new(FixtureVectorIndex::sample()),
        Arc::new(OverlapLexicalIndex::sample()),
        Arc::new(FailingGenerator::quota_exhausted()),
        EgovConfig::default(),
    )
    .unwrap()
    .with_fallback_generator(fallback.clone());

    let answer = engine.answer("đăng ký kết hôn cần giấy tờ gì", "s1").unwrap();
    assert_eq!(answer.text, "từ mô hình dự phòng");
    assert_eq!(fallback.call_count(), 1);
}

#[test]
fn quota_exhaustion_without_fallback_stays_distinguishable() {
    let generator = Arc::new(FailingGenerator::quota_exhausted());
    let (engine, _, _) = sample_engine_with(generator);

    let err = engine.answer("đăng ký kết hôn", "s1").unwrap_err();
    assert!(matches!(
        err,
        EgovError::Generation(GenerationError::QuotaExhausted { .. })
    ));
}

// ── Answer cache ──────────────────────────────────────────────────────────

#[test]
fn normalized_repeat_question_is_served_from_cache() {
    let generator = Arc::new(RecordingGenerator::new("câu trả lời"));
    let (engine, _, _) = sample_engine_with(generator.clone());

    let first = engine.answer("Hồ sơ cấp CCCD cần gì?", "a").unwrap();
    // Different session, case, and spacing — same fingerprint.
    let second = engine.answer("hồ sơ cấp cccd   CẦN GÌ?", "b").unwrap();

    assert!(!first.cached);
    assert!(second.cached);
    assert_eq!(second.text, first.text);
    assert_eq!(generator.call_count(), 1);

    // The cached answer still lands in the second session's history.
    assert_eq!(engine.session_history("b").len(), 2);
}

// ── Degradation & empty corpus ────────────────────────────────────────────

#[test]
fn lexical_outage_degrades_to_vector_only_ranking() {
    let generator = Arc::new(RecordingGenerator::new("answer"));
    let store = Arc::new(FixtureStore::sample());
    let engine = AnswerEngine::new(
        store,
        Arc::new(KeywordEmbedder::new()),
        Arc::new(FixtureVectorIndex::sample()),
        Arc::new(FailingLexicalIndex::new(3)),
        generator,
        EgovConfig::default(),
    )
    .unwrap();

    let answer = engine.answer("Hồ sơ cấp CCCD cần gì?", "s1").unwrap();
    assert_eq!(answer.source_key.as_deref(), Some(CCCD_SOURCE));
}

#[test]
fn empty_corpus_answers_with_empty_context() {
    let generator = Arc::new(RecordingGenerator::new("Mình chưa có thông tin."));
    let engine = AnswerEngine::new(
        Arc::new(FixtureStore::new(Vec::new())),
        Arc::new(KeywordEmbedder::new()),
        Arc::new(FixtureVectorIndex::new(Vec::new())),
        Arc::new(OverlapLexicalIndex::new(&[])),
        generator.clone(),
        EgovConfig::default(),
    )
    .unwrap();

    let answer = engine.answer("thủ tục cấp gì đó rất lạ", "s1").unwrap();
    assert_eq!(answer.source_key, None);
    let prompts = generator.prompts();
    assert!(prompts[0].contains("DỮ LIỆU (nếu có):\n---\n\n---"));
}

// ── Startup validation ────────────────────────────────────────────────────

#[test]
fn corpus_size_mismatch_fails_startup() {
    let result = AnswerEngine::new(
        Arc::new(FixtureStore::sample()),
        Arc::new(KeywordEmbedder::new()),
        Arc::new(FixtureVectorIndex::new(vec![vec![0.0; 3]; 2])),
        Arc::new(OverlapLexicalIndex::sample()),
        Arc::new(RecordingGenerator::new("unused")),
        EgovConfig::default(),
    );
    assert!(matches!(result, Err(EgovError::Resource(_))));
}

// ── Sessions, analytics, status ───────────────────────────────────────────

#[test]
fn clear_session_forgets_history() {
    let generator = Arc::new(RecordingGenerator::new("answer"));
    let (engine, vector, _) = sample_engine_with(generator);

    engine.answer("Hồ sơ cấp CCCD cần gì?", "s1").unwrap();
    assert!(engine.clear_session("s1"));
    assert!(!engine.clear_session("s1"));
    assert!(engine.session_history("s1").is_empty());

    // After clearing, a follow-up has no context to reuse and retrieves.
    engine.answer("còn cần gì nữa không", "s1").unwrap();
    assert_eq!(vector.search_calls(), 2);
}

#[test]
fn analytics_and_status_reflect_served_answers() {
    let generator = Arc::new(RecordingGenerator::new("answer"));
    let (engine, _, _) = sample_engine_with(generator);

    engine.answer("Hồ sơ cấp CCCD cần gì?", "s1").unwrap();
    engine.answer("còn cần gì nữa không", "s1").unwrap();

    let analytics = engine.analytics();
    assert_eq!(analytics.decision_distribution.get("new"), Some(&1));
    assert_eq!(analytics.decision_distribution.get("continue"), Some(&1));
    assert_eq!(
        analytics.most_asked(1)[0].0,
        "Cấp thẻ Căn cước công dân".to_string()
    );
    assert_eq!(analytics.answer_latencies_ms.len(), 2);

    let status = engine.status();
    assert_eq!(status.corpus_size, 3);
    assert_eq!(status.live_sessions, 1);
    assert_eq!(status.cached_answers, 2);
}
