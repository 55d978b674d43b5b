//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Session lifecycle (seeded, ended, evicted)
//! - Ticket submissions
//! - Table edits

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts};

// =============================================================================
// Session Metrics
// =============================================================================

/// Sessions seeded with sample data.
pub static SESSIONS_SEEDED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "helpdesk_sessions_seeded_total",
        "Total sessions seeded with sample tickets",
    )
    .unwrap()
});

/// Sessions discarded, by reason.
pub static SESSIONS_DISCARDED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "helpdesk_sessions_discarded_total",
            "Total sessions discarded",
        ),
        &["reason"], // "ended", "evicted"
    )
    .unwrap()
});

// =============================================================================
// Ticket Metrics
// =============================================================================

/// Ticket submissions by result.
pub static TICKETS_SUBMITTED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "helpdesk_tickets_submitted_total",
            "Total ticket submissions",
        ),
        &["result"], // "created" or a rejection kind
    )
    .unwrap()
});

/// Table edits by result.
pub static TABLE_EDITS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("helpdesk_table_edits_total", "Total table edits received"),
        &["result"], // "applied" or a rejection kind
    )
    .unwrap()
});

/// Rows whose status or priority changed through edits.
pub static ROWS_CHANGED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "helpdesk_rows_changed_total",
        "Total rows changed by applied edits",
    )
    .unwrap()
});

/// Get all core metrics for registration.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(SESSIONS_SEEDED.clone()),
        Box::new(SESSIONS_DISCARDED.clone()),
        Box::new(TICKETS_SUBMITTED.clone()),
        Box::new(TABLE_EDITS.clone()),
        Box::new(ROWS_CHANGED.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Registry;

    #[test]
    fn test_all_metrics_register() {
        let registry = Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }

        SESSIONS_SEEDED.inc();
        TICKETS_SUBMITTED.with_label_values(&["created"]).inc();
        TABLE_EDITS.with_label_values(&["applied"]).inc();
        SESSIONS_DISCARDED.with_label_values(&["ended"]).inc();

        let names: Vec<String> = registry
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.contains(&"helpdesk_sessions_seeded_total".to_string()));
        assert!(names.contains(&"helpdesk_tickets_submitted_total".to_string()));
        assert!(names.contains(&"helpdesk_table_edits_total".to_string()));
        assert!(names.contains(&"helpdesk_sessions_discarded_total".to_string()));
    }
}
