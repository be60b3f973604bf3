//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Mood resolution (outcomes, result sizes, category failures)
//! - External services (TMDB)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Mood Resolution Metrics
// =============================================================================

/// Mood resolutions total by result.
pub static MOOD_RESOLUTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "found404_mood_resolutions_total",
            "Total mood resolutions",
        ),
        &["result"], // "ok", "empty", "degraded", "unknown_mood"
    )
    .unwrap()
});

/// Items returned per mood resolution.
pub static MOOD_RESULTS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "found404_mood_results",
            "Number of items returned per mood resolution",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 15.0, 20.0]),
    )
    .unwrap()
});

/// Category queries that failed or timed out during mood resolution.
pub static MOOD_CATEGORY_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "found404_mood_category_failures_total",
            "Category queries that failed during mood resolution",
        ),
        &["media_type", "reason"], // reason: "error", "timeout"
    )
    .unwrap()
});

// =============================================================================
// External Service Metrics
// =============================================================================

/// External service request duration.
pub static EXTERNAL_SERVICE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "found404_external_service_duration_seconds",
            "Duration of external service calls",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["service", "operation"],
    )
    .unwrap()
});

/// External service requests total.
pub static EXTERNAL_SERVICE_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "found404_external_service_requests_total",
            "Total external service requests",
        ),
        &["service", "operation", "status"], // status: "success", "error"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Moods
        Box::new(MOOD_RESOLUTIONS.clone()),
        Box::new(MOOD_RESULTS.clone()),
        Box::new(MOOD_CATEGORY_FAILURES.clone()),
        // External services
        Box::new(EXTERNAL_SERVICE_DURATION.clone()),
        Box::new(EXTERNAL_SERVICE_REQUESTS.clone()),
    ]
}
