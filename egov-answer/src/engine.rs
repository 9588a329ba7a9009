//! AnswerEngine: the one context object owning every store.
//!
//! Constructed once at startup from the external collaborators and the
//! config; handlers share it behind an `Arc`. No ambient globals.

use std::sync::{Arc, RwLock};
use std::time::Instant;

use tracing::{debug, info, warn};

use egov_cache::{AnswerCache, EmbeddingCache, Fingerprint};
use egov_core::config::EgovConfig;
use egov_core::errors::{EgovError, EgovResult, GenerationError, ResourceError};
use egov_core::models::{Answer, ContextSnapshot, ConversationTurn};
use egov_core::traits::{
    IDocumentStore, IEmbeddingProvider, IGenerator, ILexicalIndex, IVectorIndex,
};
use egov_retrieval::{assemble, Continuation, FollowupClassifier, HybridSearcher};
use egov_session::{QueryAnalytics, SessionManager};

use crate::prompt::build_prompt;

/// Operational snapshot for health introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStatus {
    pub corpus_size: usize,
    pub live_sessions: usize,
    pub cached_answers: usize,
}

/// The answer engine. Owns the mutable session and cache state and the
/// read-only retrieval collaborators.
pub struct AnswerEngine {
    store: Arc<dyn IDocumentStore>,
    searcher: HybridSearcher,
    classifier: FollowupClassifier,
    sessions: SessionManager,
    answer_cache: AnswerCache,
    analytics: RwLock<QueryAnalytics>,
    generator: Arc<dyn IGenerator>,
    fallback_generator: Option<Arc<dyn IGenerator>>,
    config: EgovConfig,
}

impl AnswerEngine {
    /// Wire the engine from its collaborators.
    ///
    /// Fails fast when the config is invalid or the three corpus views
    /// disagree on size — positional candidate ids would not line up and
    /// every retrieval would ground on the wrong record.
    pub fn new(
        store: Arc<dyn IDocumentStore>,
        embedder: Arc<dyn IEmbeddingProvider>,
        vector_index: Arc<dyn IVectorIndex>,
        lexical_index: Arc<dyn ILexicalIndex>,
        generator: Arc<dyn IGenerator>,
        config: EgovConfig,
    ) -> EgovResult<Self> {
        config.validate()?;

        if vector_index.len() != store.len() || lexical_index.len() != store.len() {
            return Err(ResourceError::CorpusMismatch {
                vector: vector_index.len(),
                lexical: lexical_index.len(),
                store: store.len(),
            }
            .into());
        }

        let embedding_cache = EmbeddingCache::new(config.cache.embedding_capacity);
        let searcher = HybridSearcher::new(
            embedder,
            vector_index,
            lexical_index,
            embedding_cache,
            config.retrieval.clone(),
        );

        info!(
            corpus = store.len(),
            model = %config.retrieval.embedding_model_id,
            "answer engine ready"
        );

        Ok(Self {
            store,
            searcher,
            classifier: FollowupClassifier::new(),
            sessions: SessionManager::new(config.session.clone()),
            answer_cache: AnswerCache::new(
                std::time::Duration::from_secs(config.cache.ttl_secs),
                config.cache.capacity,
            ),
            analytics: RwLock::new(QueryAnalytics::default()),
            generator,
            fallback_generator: None,
            config,
        })
    }

    /// Attach a fallback generation backend, tried once when the primary
    /// reports quota exhaustion.
    pub fn with_fallback_generator(mut self, fallback: Arc<dyn IGenerator>) -> Self {
        self.fallback_generator = Some(fallback);
        self
    }

    /// Answer one question within a session.
    pub fn answer(&self, question: &str, session_id: &str) -> EgovResult<Answer> {
        let started = Instant::now();

        let question = question.trim();
        if question.is_empty() {
            return Err(EgovError::InvalidInput(
                "question must not be empty".to_string(),
            ));
        }

        let history = self.sessions.history(session_id);

        // Continuations reuse the previous grounding verbatim and skip
        // retrieval entirely; everything else re-retrieves.
        let decision = self.classifier.classify(question);
        let (snapshot, decision_label) = match (decision, history.last_context()) {
            (Continuation::Continue, Some(previous)) => {
                debug!(session_id, "continuation, reusing previous context");
                (previous.clone(), "continue")
            }
            _ => (self.fresh_context(question)?, "new"),
        };

        let fingerprint = Fingerprint::compute(question, &self.config.retrieval);
        if let Some(cached) = self.answer_cache.get(&fingerprint) {
            debug!(session_id, %fingerprint, "answer served from cache");
            self.append_exchange(session_id, question, &cached, snapshot.clone());
            self.record(decision_label, &snapshot, started);
            return Ok(Answer {
                text: cached,
                cached: true,
                source_key: snapshot.source_key,
            });
        }

        let prompt = build_prompt(
            &history.turns,
            &snapshot.text,
            question,
            self.config.session.history_window,
        );
        let text = self.generate(&prompt)?;

        self.answer_cache.put(fingerprint, text.clone());
        self.append_exchange(session_id, question, &text, snapshot.clone());
        self.record(decision_label, &snapshot, started);

        Ok(Answer {
            text,
            cached: false,
            source_key: snapshot.source_key,
        })
    }

    /// Drop a session's history. Returns whether one existed.
    pub fn clear_session(&self, session_id: &str) -> bool {
        self.sessions.clear(session_id)
    }

    /// Snapshot of a session's turn history (created empty on first use).
    pub fn session_history(&self, session_id: &str) -> egov_session::SessionHistory {
        self.sessions.history(session_id)
    }

    /// Clone of the current analytics counters.
    pub fn analytics(&self) -> QueryAnalytics {
        self.analytics
            .read()
            .map(|a| a.clone())
            .unwrap_or_default()
    }

    /// Operational snapshot.
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            corpus_size: self.store.len(),
            live_sessions: self.sessions.session_count(),
            cached_answers: self.answer_cache.len(),
        }
    }

    /// Run hybrid retrieval and assemble the top candidate into a
    /// grounding snapshot. An empty fused list yields an empty snapshot;
    /// the generation prompt then states the lack of information.
    fn fresh_context(&self, question: &str) -> EgovResult<ContextSnapshot> {
        let ids = self
            .searcher
            .retrieve(question, self.config.retrieval.top_k)?;

        let Some(&top) = ids.first() else {
            info!(question, "retrieval produced no candidates");
            return Ok(ContextSnapshot::empty());
        };

        match self.store.key_for(top) {
            Some(key) => Ok(ContextSnapshot {
                source_key: Some(key.to_string()),
                text: assemble(self.store.as_ref(), key),
            }),
            None => {
                warn!(question, candidate = %top, "candidate resolved to no record key");
                Ok(ContextSnapshot::empty())
            }
        }
    }

    /// Complete the prompt, retrying once on the fallback backend when
    /// the primary reports quota exhaustion.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        match self.generator.complete(prompt) {
            Ok(text) => Ok(text),
            Err(primary) if primary.is_retryable() => match &self.fallback_generator {
                Some(fallback) => {
                    warn!(error = %primary, "primary generator exhausted, retrying on fallback");
                    fallback.complete(prompt)
                }
                None => Err(primary),
            },
            Err(other) => Err(other),
        }
    }

    fn append_exchange(
        &self,
        session_id: &str,
        question: &str,
        answer: &str,
        snapshot: ContextSnapshot,
    ) {
        self.sessions.append_exchange(
            session_id,
            ConversationTurn::user(question),
            ConversationTurn::assistant(answer, snapshot),
        );
    }

    fn record(&self, decision: &str, snapshot: &ContextSnapshot, started: Instant) {
        if let Ok(mut analytics) = self.analytics.write() {
            analytics.record_decision(decision);
            if let Some(name) = snapshot
                .source_key
                .as_deref()
                .and_then(|key| self.store.get(key))
                .and_then(|record| record.name.as_deref())
            {
                analytics.record_procedure(name);
            }
            analytics.record_latency(started.elapsed().as_secs_f64() * 1000.0);
        }
    }
}
