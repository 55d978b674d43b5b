use serde::Serialize;

use crate::ticket::{Ticket, TicketStatus};

/// Delta shown next to the open ticket count. Not derived from data.
pub const OPEN_TICKETS_DELTA: f64 = 10.0;

/// First response time display metric, `(value, delta)` in hours.
/// Fixed figures, not derived from data.
pub const FIRST_RESPONSE_HOURS: (f64, f64) = (5.2, -1.5);

/// Average resolution time display metric, `(value, delta)` in hours.
/// Fixed figures, not derived from data.
pub const AVG_RESOLUTION_HOURS: (f64, f64) = (16.0, 2.0);

/// A labelled metric with a change indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayMetric {
    pub label: &'static str,
    pub value: f64,
    pub delta: f64,
}

/// Aggregate statistics over a ticket table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Tickets whose status is `Open`.
    pub open_tickets: usize,
    /// Metrics in display order; only the first is computed from the rows.
    pub metrics: Vec<DisplayMetric>,
}

impl Statistics {
    pub fn compute(rows: &[Ticket]) -> Self {
        let open_tickets = rows
            .iter()
            .filter(|t| t.status == TicketStatus::Open)
            .count();

        Self {
            open_tickets,
            metrics: vec![
                DisplayMetric {
                    label: "Number of open tickets",
                    value: open_tickets as f64,
                    delta: OPEN_TICKETS_DELTA,
                },
                DisplayMetric {
                    label: "First response time (hours)",
                    value: FIRST_RESPONSE_HOURS.0,
                    delta: FIRST_RESPONSE_HOURS.1,
                },
                DisplayMetric {
                    label: "Average resolution time (hours)",
                    value: AVG_RESOLUTION_HOURS.0,
                    delta: AVG_RESOLUTION_HOURS.1,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::{TicketId, TicketPriority};
    use chrono::NaiveDate;

    fn row(number: u32, status: TicketStatus) -> Ticket {
        Ticket {
            id: TicketId::new(number),
            issue: "Data backup failure".to_string(),
            status,
            priority: TicketPriority::Medium,
            date_submitted: NaiveDate::from_ymd_opt(2023, 8, 15).unwrap(),
        }
    }

    #[test]
    fn test_empty_table_has_no_open_tickets() {
        let stats = Statistics::compute(&[]);
        assert_eq!(stats.open_tickets, 0);
        assert_eq!(stats.metrics[0].value, 0.0);
    }

    #[test]
    fn test_counts_only_open() {
        let rows = vec![
            row(1, TicketStatus::Open),
            row(2, TicketStatus::InProgress),
            row(3, TicketStatus::Open),
            row(4, TicketStatus::Closed),
        ];
        let stats = Statistics::compute(&rows);
        assert_eq!(stats.open_tickets, 2);
        assert_eq!(stats.metrics[0].value, 2.0);
        assert_eq!(stats.metrics[0].delta, 10.0);
    }

    #[test]
    fn test_fixed_metrics_ignore_rows() {
        let a = Statistics::compute(&[]);
        let b = Statistics::compute(&[row(1, TicketStatus::Closed)]);
        assert_eq!(a.metrics[1..], b.metrics[1..]);
        assert_eq!(a.metrics[1].value, 5.2);
        assert_eq!(a.metrics[1].delta, -1.5);
        assert_eq!(a.metrics[2].value, 16.0);
        assert_eq!(a.metrics[2].delta, 2.0);
    }
}
