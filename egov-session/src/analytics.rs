//! Engine-wide query analytics: most-asked procedures, continuation/new
//! decision distribution, answer latencies.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Counters the engine updates after every answered question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryAnalytics {
    /// Procedure name → times it served as grounding.
    pub procedure_counts: HashMap<String, u64>,
    /// Classifier decision ("continue" / "new") → count.
    pub decision_distribution: HashMap<String, u64>,
    /// Answer latencies in milliseconds.
    pub answer_latencies_ms: Vec<f64>,
}

impl QueryAnalytics {
    /// Record that a procedure served as grounding for an answer.
    pub fn record_procedure(&mut self, name: &str) {
        *self.procedure_counts.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Record a follow-up classification decision.
    pub fn record_decision(&mut self, decision: &str) {
        *self
            .decision_distribution
            .entry(decision.to_string())
            .or_insert(0) += 1;
    }

    /// Record an answer latency.
    pub fn record_latency(&mut self, latency_ms: f64) {
        self.answer_latencies_ms.push(latency_ms);
    }

    /// Most frequently asked procedures, sorted descending.
    pub fn most_asked(&self, limit: usize) -> Vec<(String, u64)> {
        let mut sorted: Vec<_> = self.procedure_counts.clone().into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sorted.truncate(limit);
        sorted
    }

    /// Average answer latency in milliseconds.
    pub fn avg_latency_ms(&self) -> f64 {
        if self.answer_latencies_ms.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.answer_latencies_ms.iter().sum();
        sum / self.answer_latencies_ms.len() as f64
    }
}
