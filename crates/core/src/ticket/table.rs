//! Ordered ticket table of a single session.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use super::{
    EditSummary, SubmitTicketRequest, Ticket, TicketError, TicketFilter, TicketId, TicketStatus,
};

/// Rows of one session in display order (most recent submission first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketTable {
    rows: Vec<Ticket>,
    /// Number handed out when the table has no rows.
    first_id: u32,
}

impl TicketTable {
    pub fn new(rows: Vec<Ticket>, first_id: u32) -> Self {
        Self { rows, first_id }
    }

    pub fn rows(&self) -> &[Ticket] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identifier for the next submission: one above the current maximum,
    /// or `first_id` for an empty table.
    pub fn next_id(&self) -> Result<TicketId, TicketError> {
        match self.rows.iter().map(|t| t.id).max() {
            Some(max) => max.next().ok_or(TicketError::IdSpaceExhausted),
            None => Ok(TicketId::new(self.first_id)),
        }
    }

    /// Create an `Open` ticket dated `today` and put it in front of the table.
    pub fn submit(
        &mut self,
        request: SubmitTicketRequest,
        today: NaiveDate,
        reject_empty_issue: bool,
    ) -> Result<Ticket, TicketError> {
        if reject_empty_issue && request.issue.trim().is_empty() {
            return Err(TicketError::EmptyIssue);
        }

        let ticket = Ticket {
            id: self.next_id()?,
            issue: request.issue,
            status: TicketStatus::Open,
            priority: request.priority,
            date_submitted: today,
        };
        self.rows.insert(0, ticket.clone());
        Ok(ticket)
    }

    /// Adopt an edited copy of the table.
    ///
    /// The copy must hold exactly the current ids, each once, with unchanged
    /// `issue` and `date_submitted`. Row order is taken from the copy. The
    /// table is left untouched when the copy is rejected.
    pub fn reconcile(&mut self, edited: Vec<Ticket>) -> Result<EditSummary, TicketError> {
        let current: HashMap<TicketId, &Ticket> = self.rows.iter().map(|t| (t.id, t)).collect();
        let mut seen = HashSet::with_capacity(edited.len());
        let mut changed = 0;

        for row in &edited {
            if !seen.insert(row.id) {
                return Err(TicketError::DuplicateId(row.id.to_string()));
            }

            let original = current.get(&row.id).ok_or_else(|| TicketError::EditRejected {
                ticket_id: row.id.to_string(),
                reason: "rows cannot be added through an edit".to_string(),
            })?;

            if original.date_submitted != row.date_submitted {
                return Err(rejected(row.id, "date_submitted is read-only"));
            }
            if original.issue != row.issue {
                return Err(rejected(row.id, "issue is read-only"));
            }

            if original.status != row.status || original.priority != row.priority {
                changed += 1;
            }
        }

        if let Some(missing) = self.rows.iter().find(|t| !seen.contains(&t.id)) {
            return Err(rejected(missing.id, "rows cannot be removed through an edit"));
        }

        self.rows = edited;
        Ok(EditSummary {
            rows: self.rows.len(),
            changed,
        })
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.rows.iter().find(|t| t.id == id)
    }

    /// Rows matching the filter, honouring its offset and limit.
    pub fn list(&self, filter: &TicketFilter) -> Vec<Ticket> {
        self.rows
            .iter()
            .filter(|t| filter.matches(t))
            .skip(filter.offset)
            .take(filter.limit)
            .cloned()
            .collect()
    }

    /// Number of rows matching the filter, ignoring offset and limit.
    pub fn count(&self, filter: &TicketFilter) -> usize {
        self.rows.iter().filter(|t| filter.matches(t)).count()
    }
}

fn rejected(id: TicketId, reason: &str) -> TicketError {
    TicketError::EditRejected {
        ticket_id: id.to_string(),
        reason: reason.to_string(),
    }
}
