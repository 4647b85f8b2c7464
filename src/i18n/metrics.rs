//! Translation completeness metrics.
//!
//! Counts how many per-language status checks came out filled or missing, and
//! how many malformed stored values were recovered as blank along the way.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Translation completeness counters.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of per-language status checks performed
    status_checks: AtomicUsize,

    /// Checks that found a filled translation
    filled: AtomicUsize,

    /// Checks that found no usable translation
    missing: AtomicUsize,

    /// Stored values that did not match their field's shape
    malformed_values: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    pub fn record_filled(&self) {
        self.status_checks.fetch_add(1, Ordering::Relaxed);
        self.filled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing(&self) {
        self.status_checks.fetch_add(1, Ordering::Relaxed);
        self.missing.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_malformed(&self) {
        self.malformed_values.fetch_add(1, Ordering::Relaxed);
    }

    pub fn status_checks(&self) -> usize {
        self.status_checks.load(Ordering::Relaxed)
    }

    pub fn filled(&self) -> usize {
        self.filled.load(Ordering::Relaxed)
    }

    pub fn missing(&self) -> usize {
        self.missing.load(Ordering::Relaxed)
    }

    pub fn malformed_values(&self) -> usize {
        self.malformed_values.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let checks = self.status_checks();
        let filled = self.filled();
        let completeness_rate = if checks > 0 {
            (filled as f64 / checks as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            status_checks: checks,
            filled,
            missing: self.missing(),
            malformed_values: self.malformed_values(),
            completeness_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.status_checks.store(0, Ordering::Relaxed);
        self.filled.store(0, Ordering::Relaxed);
        self.missing.store(0, Ordering::Relaxed);
        self.malformed_values.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the translation metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub status_checks: usize,

    pub filled: usize,

    pub missing: usize,

    pub malformed_values: usize,

    /// Share of checks that were filled, as a percentage (0-100)
    pub completeness_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_filled_and_missing() {
        let metrics = TranslationMetrics::new();

        metrics.record_filled();
        metrics.record_filled();
        metrics.record_missing();

        assert_eq!(metrics.status_checks(), 3);
        assert_eq!(metrics.filled(), 2);
        assert_eq!(metrics.missing(), 1);
    }

    #[test]
    fn test_record_malformed_does_not_count_as_check() {
        let metrics = TranslationMetrics::new();

        metrics.record_malformed();

        assert_eq!(metrics.malformed_values(), 1);
        assert_eq!(metrics.status_checks(), 0);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = TranslationMetrics::new().report();

        assert_eq!(report.status_checks, 0);
        assert_eq!(report.completeness_rate, 0.0);
    }

    #[test]
    fn test_report_completeness_rate() {
        let metrics = TranslationMetrics::new();
        for _ in 0..3 {
            metrics.record_filled();
        }
        metrics.record_missing();

        let report = metrics.report();
        assert_eq!(report.filled, 3);
        assert_eq!(report.missing, 1);
        assert!((report.completeness_rate - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_filled();

        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["filled"], 1);
        assert_eq!(json["completeness_rate"], 100.0);
    }

    #[test]
    fn test_reset() {
        let metrics = TranslationMetrics::new();
        metrics.record_filled();
        metrics.record_malformed();

        metrics.reset();

        assert_eq!(metrics.status_checks(), 0);
        assert_eq!(metrics.malformed_values(), 0);
    }

    #[test]
    fn test_global_is_singleton() {
        assert!(std::ptr::eq(
            TranslationMetrics::global(),
            TranslationMetrics::global()
        ));
    }
}
