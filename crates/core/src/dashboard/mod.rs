//! Read-only projections over a ticket table for the UI host.

mod charts;
mod stats;

pub use charts::{ChartData, PriorityCount, StatusMonthCount};
pub use stats::{
    DisplayMetric, Statistics, AVG_RESOLUTION_HOURS, FIRST_RESPONSE_HOURS, OPEN_TICKETS_DELTA,
};

use serde::Serialize;

use crate::ticket::{SessionId, Ticket};

/// Everything the UI host needs to render one session.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub session_id: SessionId,
    pub ticket_count: usize,
    pub tickets: Vec<Ticket>,
    pub statistics: Statistics,
    pub charts: ChartData,
}

impl DashboardView {
    /// Build the view from the session's current rows.
    pub fn new(session_id: SessionId, rows: &[Ticket]) -> Self {
        Self {
            session_id,
            ticket_count: rows.len(),
            tickets: rows.to_vec(),
            statistics: Statistics::compute(rows),
            charts: ChartData::compute(rows),
        }
    }
}
