//! Translation metrics for a single page session.
//!
//! Counts bundle retrieval attempts, failed candidates, fallbacks to the
//! default language, and key lookups that missed. A session owns one
//! `TranslationMetrics` and shares it with its loader and store.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Candidate locations requested from a bundle source
    retrieval_attempts: AtomicUsize,

    /// Candidates that failed to retrieve or parse
    retrieval_failures: AtomicUsize,

    /// Times the loader gave up on the requested language and used the default
    fallbacks: AtomicUsize,

    /// Key lookups that found no string and returned a default or the key itself
    key_misses: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_retrieval_attempt(&self) {
        self.retrieval_attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_retrieval_failure(&self) {
        self.retrieval_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_key_miss(&self) {
        self.key_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn retrieval_attempts(&self) -> usize {
        self.retrieval_attempts.load(Ordering::Relaxed)
    }

    pub fn retrieval_failures(&self) -> usize {
        self.retrieval_failures.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn key_misses(&self) -> usize {
        self.key_misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let attempts = self.retrieval_attempts();
        let failures = self.retrieval_failures();
        let retrieval_success_rate = if attempts > 0 {
            (attempts.saturating_sub(failures) as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            retrieval_attempts: attempts,
            retrieval_failures: failures,
            retrieval_success_rate,
            fallbacks: self.fallbacks(),
            key_misses: self.key_misses(),
        }
    }
}

/// Snapshot of a session's translation metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub retrieval_attempts: usize,

    pub retrieval_failures: usize,

    /// Share of attempts that produced a bundle, as a percentage (0-100)
    pub retrieval_success_rate: f64,

    pub fallbacks: usize,

    pub key_misses: usize,
}
