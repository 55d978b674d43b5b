//! Ticket storage trait and types.

use thiserror::Error;

use crate::dashboard::DashboardView;
use crate::ticket::{SessionId, Ticket, TicketId, TicketPriority, TicketStatus};

/// Error type for ticket operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TicketError {
    /// Identifier is not of the form `TICKET-<number>`.
    #[error("Invalid ticket id: {0}")]
    InvalidId(String),

    /// Status outside the allowed set.
    #[error("Invalid status: {0} (expected one of Open, In Progress, Closed)")]
    InvalidStatus(String),

    /// Priority outside the allowed set.
    #[error("Invalid priority: {0} (expected one of High, Medium, Low)")]
    InvalidPriority(String),

    /// Submission without an issue description.
    #[error("Issue description cannot be empty")]
    EmptyIssue,

    /// Ticket not found in the session's table.
    #[error("Ticket not found: {0}")]
    NotFound(String),

    /// Session not found.
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Session identifier has an invalid shape.
    #[error("Invalid session id: {0:?}")]
    InvalidSessionId(String),

    /// The same ticket id appears twice in an edited table.
    #[error("Duplicate ticket id in edited table: {0}")]
    DuplicateId(String),

    /// An edited table violates the edit policy.
    #[error("Edit rejected for {ticket_id}: {reason}")]
    EditRejected { ticket_id: String, reason: String },

    /// No ticket number left above the current maximum.
    #[error("Ticket number space exhausted")]
    IdSpaceExhausted,

    /// Request body or query string could not be decoded.
    #[error("Invalid request: {0}")]
    InvalidBody(String),
}

impl TicketError {
    /// Short machine-readable name, used for metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            TicketError::InvalidId(_) => "invalid_id",
            TicketError::InvalidStatus(_) => "invalid_status",
            TicketError::InvalidPriority(_) => "invalid_priority",
            TicketError::EmptyIssue => "empty_issue",
            TicketError::NotFound(_) => "not_found",
            TicketError::SessionNotFound(_) => "session_not_found",
            TicketError::InvalidSessionId(_) => "invalid_session_id",
            TicketError::DuplicateId(_) => "duplicate_id",
            TicketError::EditRejected { .. } => "edit_rejected",
            TicketError::IdSpaceExhausted => "id_space_exhausted",
            TicketError::InvalidBody(_) => "invalid_body",
        }
    }
}

/// Request to submit a new ticket.
#[derive(Debug, Clone)]
pub struct SubmitTicketRequest {
    /// Free-text description of the problem.
    pub issue: String,
    /// Priority chosen by the submitter.
    pub priority: TicketPriority,
}

impl SubmitTicketRequest {
    pub fn new(issue: impl Into<String>, priority: TicketPriority) -> Self {
        Self {
            issue: issue.into(),
            priority,
        }
    }
}

/// Outcome of reconciling an edited table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct EditSummary {
    /// Rows in the adopted table.
    pub rows: usize,
    /// Rows whose status or priority differ from the previous table.
    pub changed: usize,
}

/// Result of a successful edit, with the view rendered from the adopted table.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EditOutcome {
    pub summary: EditSummary,
    pub view: DashboardView,
}

/// One page of a filtered listing and the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketPage {
    pub tickets: Vec<Ticket>,
    /// Matches before limit/offset are applied.
    pub total: usize,
}

/// Filter for listing tickets of a session.
#[derive(Debug, Clone)]
pub struct TicketFilter {
    /// Filter by status.
    pub status: Option<TicketStatus>,
    /// Filter by priority.
    pub priority: Option<TicketPriority>,
    /// Maximum number of results.
    pub limit: usize,
    /// Offset for pagination.
    pub offset: usize,
}

impl Default for TicketFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketFilter {
    /// Create a new filter with defaults.
    pub fn new() -> Self {
        Self {
            status: None,
            priority: None,
            limit: usize::MAX,
            offset: 0,
        }
    }

    /// Filter by status.
    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter by priority.
    pub fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set offset.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Whether a ticket passes the status and priority conditions.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.status.is_none_or(|s| ticket.status == s)
            && self.priority.is_none_or(|p| ticket.priority == p)
    }
}

/// Trait for session-keyed ticket storage backends.
///
/// Every operation addresses one session's table. A session that has not
/// been seen yet is seeded first; reads never displace another session to
/// make room for it.
pub trait TicketStore: Send + Sync {
    /// Register a session, seeding its table, and return its first view.
    ///
    /// Unlike the read operations this may evict the least recently used
    /// session when the store is at capacity.
    fn open_session(&self, session: &SessionId) -> Result<DashboardView, TicketError>;

    /// Full render payload for a session: rows, statistics and chart data.
    fn view(&self, session: &SessionId) -> Result<DashboardView, TicketError>;

    /// List the session's tickets matching the filter, in display order.
    fn list(&self, session: &SessionId, filter: &TicketFilter) -> Result<Vec<Ticket>, TicketError>;

    /// Count the session's tickets matching the filter (ignores limit/offset).
    fn count(&self, session: &SessionId, filter: &TicketFilter) -> Result<usize, TicketError>;

    /// One page of matches and the total match count, read from the same table state.
    fn page(&self, session: &SessionId, filter: &TicketFilter) -> Result<TicketPage, TicketError>;

    /// Get a ticket by ID.
    fn get(&self, session: &SessionId, id: TicketId) -> Result<Option<Ticket>, TicketError>;

    /// Submit a new ticket; it is prepended to the session's table.
    fn submit(
        &self,
        session: &SessionId,
        request: SubmitTicketRequest,
    ) -> Result<Ticket, TicketError>;

    /// Replace the session's table with an edited copy.
    ///
    /// The returned view is rendered from the adopted table before any other
    /// operation on the session can run.
    fn apply_edits(
        &self,
        session: &SessionId,
        rows: Vec<Ticket>,
    ) -> Result<EditOutcome, TicketError>;

    /// Discard a session and its table.
    fn end_session(&self, session: &SessionId) -> Result<(), TicketError>;

    /// Number of live sessions.
    fn session_count(&self) -> usize;
}
