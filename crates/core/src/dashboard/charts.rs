use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::ticket::{Ticket, TicketPriority, TicketStatus};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Ticket count for one (month, status) bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMonthCount {
    /// Month of year, 1 to 12. Years are folded together.
    pub month: u32,
    pub month_label: &'static str,
    pub status: TicketStatus,
    pub count: usize,
}

/// Ticket count for one priority slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub priority: TicketPriority,
    pub count: usize,
}

/// Datasets behind the two dashboard charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    /// Grouped bars: x = month, offset/colour = status. Sorted by month, then status.
    pub status_by_month: Vec<StatusMonthCount>,
    /// Arc chart slices. Only priorities present in the table appear.
    pub priority_share: Vec<PriorityCount>,
}

impl ChartData {
    pub fn compute(rows: &[Ticket]) -> Self {
        let mut by_month: BTreeMap<(u32, TicketStatus), usize> = BTreeMap::new();
        let mut by_priority: BTreeMap<TicketPriority, usize> = BTreeMap::new();

        for ticket in rows {
            *by_month
                .entry((ticket.date_submitted.month(), ticket.status))
                .or_default() += 1;
            *by_priority.entry(ticket.priority).or_default() += 1;
        }

        Self {
            status_by_month: by_month
                .into_iter()
                .map(|((month, status), count)| StatusMonthCount {
                    month,
                    month_label: MONTH_LABELS[(month - 1) as usize],
                    status,
                    count,
                })
                .collect(),
            priority_share: by_priority
                .into_iter()
                .map(|(priority, count)| PriorityCount { priority, count })
                .collect(),
        }
    }
}
