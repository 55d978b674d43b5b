//! Core ticket data types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TicketError;

// ============================================================================
// Identifiers
// ============================================================================

/// Prefix shared by every ticket identifier.
pub const TICKET_ID_PREFIX: &str = "TICKET-";

/// Ticket identifier, rendered as `TICKET-<number>`.
///
/// Ordering follows the numeric suffix, so the newest ticket is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketId(u32);

impl TicketId {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Numeric suffix of the identifier.
    pub fn number(&self) -> u32 {
        self.0
    }

    /// The identifier that follows this one, if the number space allows it.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", TICKET_ID_PREFIX, self.0)
    }
}

impl FromStr for TicketId {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(TICKET_ID_PREFIX)
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            // One spelling per id: "TICKET-01050" would alias TICKET-1050
            .filter(|d| d.len() == 1 || !d.starts_with('0'))
            .ok_or_else(|| TicketError::InvalidId(s.to_string()))?;
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| TicketError::InvalidId(s.to_string()))
    }
}

impl TryFrom<String> for TicketId {
    type Error = TicketError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TicketId> for String {
    fn from(id: TicketId) -> Self {
        id.to_string()
    }
}

/// Identifier of a UI session. Each session owns an independent ticket table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Longest accepted session identifier.
    pub const MAX_LEN: usize = 128;

    /// Validate and wrap a session identifier.
    ///
    /// Accepts 1 to [`Self::MAX_LEN`] characters from `[A-Za-z0-9_-]`.
    pub fn new(id: impl Into<String>) -> Result<Self, TicketError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id.len() <= Self::MAX_LEN
            && id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if valid {
            Ok(Self(id))
        } else {
            Err(TicketError::InvalidSessionId(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// Workflow status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 3] = [Self::Open, Self::InProgress, Self::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TicketError::InvalidStatus(s.to_string()))
    }
}

/// Urgency chosen by the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TicketPriority {
    High,
    Medium,
    Low,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| TicketError::InvalidPriority(s.to_string()))
    }
}

// ============================================================================
// Ticket
// ============================================================================

/// A support ticket row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub issue: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub date_submitted: NaiveDate,
}
