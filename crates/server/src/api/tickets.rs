//! Ticket API handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use helpdesk_core::{
    EditOutcome, SessionId, SubmitTicketRequest, Ticket, TicketError, TicketFilter, TicketId,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ApiResult;
use crate::state::AppState;

/// Maximum allowed limit for ticket queries
const MAX_LIMIT: usize = 1000;

/// Default limit for ticket queries
const DEFAULT_LIMIT: usize = 100;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for submitting a ticket
#[derive(Debug, Deserialize)]
pub struct SubmitTicketBody {
    /// Description of the issue
    #[serde(default)]
    pub issue: String,
    /// One of High, Medium, Low
    pub priority: String,
}

/// Query parameters for listing tickets
#[derive(Debug, Deserialize)]
pub struct ListTicketsParams {
    /// Filter by status
    pub status: Option<String>,
    /// Filter by priority
    pub priority: Option<String>,
    /// Maximum number of tickets to return
    pub limit: Option<usize>,
    /// Pagination offset
    pub offset: Option<usize>,
}

/// One row of an edited table, as sent back by the UI host
#[derive(Debug, Deserialize)]
pub struct TicketRowBody {
    pub id: String,
    pub issue: String,
    pub status: String,
    pub priority: String,
    pub date_submitted: NaiveDate,
}

impl TryFrom<TicketRowBody> for Ticket {
    type Error = TicketError;

    fn try_from(row: TicketRowBody) -> Result<Self, Self::Error> {
        Ok(Ticket {
            id: row.id.parse()?,
            issue: row.issue,
            status: row.status.parse()?,
            priority: row.priority.parse()?,
            date_submitted: row.date_submitted,
        })
    }
}

/// Request body for replacing the table with an edited copy
#[derive(Debug, Deserialize)]
pub struct EditTableBody {
    pub tickets: Vec<TicketRowBody>,
}

/// Response for a submitted ticket
#[derive(Debug, Serialize)]
pub struct SubmitTicketResponse {
    pub message: String,
    pub ticket: Ticket,
}

/// Response for listing tickets
#[derive(Debug, Serialize)]
pub struct ListTicketsResponse {
    pub tickets: Vec<Ticket>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// Submit a new ticket
pub async fn submit_ticket(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    body: Result<Json<SubmitTicketBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SubmitTicketResponse>)> {
    let session = SessionId::new(session_id)?;
    let Json(body) = body?;
    let request = SubmitTicketRequest::new(body.issue, body.priority.parse()?);

    let ticket = state.ticket_store().submit(&session, request)?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitTicketResponse {
            message: "Ticket submitted! Here are the ticket details:".to_string(),
            ticket,
        }),
    ))
}

/// Get a ticket by ID
pub async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path((session_id, id)): Path<(String, String)>,
) -> ApiResult<Json<Ticket>> {
    let session = SessionId::new(session_id)?;
    let id: TicketId = id.parse()?;

    state
        .ticket_store()
        .get(&session, id)?
        .map(Json)
        .ok_or_else(|| TicketError::NotFound(id.to_string()).into())
}

/// List tickets with optional filters
pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    params: Result<Query<ListTicketsParams>, QueryRejection>,
) -> ApiResult<Json<ListTicketsResponse>> {
    let session = SessionId::new(session_id)?;
    let Query(params) = params?;
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0);

    let mut filter = TicketFilter::new().with_limit(limit).with_offset(offset);

    if let Some(ref status) = params.status {
        filter = filter.with_status(status.parse()?);
    }

    if let Some(ref priority) = params.priority {
        filter = filter.with_priority(priority.parse()?);
    }

    let page = state.ticket_store().page(&session, &filter)?;

    Ok(Json(ListTicketsResponse {
        tickets: page.tickets,
        total: page.total,
        limit,
        offset,
    }))
}

/// Replace the session's table with an edited copy (PUT endpoint)
pub async fn edit_tickets(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    body: Result<Json<EditTableBody>, JsonRejection>,
) -> ApiResult<Json<EditOutcome>> {
    let session = SessionId::new(session_id)?;
    let Json(body) = body?;
    let rows = body
        .tickets
        .into_iter()
        .map(Ticket::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(state.ticket_store().apply_edits(&session, rows)?))
}
