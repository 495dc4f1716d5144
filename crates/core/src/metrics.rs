//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Search pipeline (debounce cycles, stale-response drops)
//! - Upstream photo API (request counts, latency)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Search Pipeline Metrics
// =============================================================================

/// Debounce cycles fired, by outcome.
pub static SEARCH_CYCLES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "viewfinder_search_cycles_total",
            "Total debounce cycles fired",
        ),
        &["outcome"], // "fetched", "cleared", "unsupported_mode"
    )
    .unwrap()
});

/// Responses dropped because a newer cycle fired while they were in flight.
pub static STALE_RESPONSES_DROPPED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "viewfinder_stale_responses_dropped_total",
        "Superseded search responses dropped on arrival",
    )
    .unwrap()
});

// =============================================================================
// Upstream API Metrics
// =============================================================================

/// Upstream search requests by result.
pub static UPSTREAM_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "viewfinder_upstream_requests_total",
            "Total upstream photo API requests",
        ),
        &["result"], // "ok", "error"
    )
    .unwrap()
});

/// Upstream request duration in seconds.
pub static UPSTREAM_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "viewfinder_upstream_request_duration_seconds",
            "Duration of upstream photo API requests",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["result"],
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(SEARCH_CYCLES_TOTAL.clone()),
        Box::new(STALE_RESPONSES_DROPPED.clone()),
        Box::new(UPSTREAM_REQUESTS_TOTAL.clone()),
        Box::new(UPSTREAM_REQUEST_DURATION.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Registry;

    #[test]
    fn test_all_metrics_register_cleanly() {
        let registry = Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }
    }
}
