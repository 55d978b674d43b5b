//! Session API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use helpdesk_core::{ChartData, DashboardView, SessionId, Statistics};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::error::ApiResult;
use crate::state::AppState;

/// Open a new session and return its seeded view
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<DashboardView>)> {
    let session = SessionId::new(Uuid::new_v4().to_string())?;
    let view = state.ticket_store().open_session(&session)?;
    info!(session = %session, "Session opened");
    Ok((StatusCode::CREATED, Json(view)))
}

/// Render request: table rows, statistics and chart datasets
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<DashboardView>> {
    let session = SessionId::new(session_id)?;
    Ok(Json(state.ticket_store().view(&session)?))
}

/// End a session and discard its table
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> ApiResult<StatusCode> {
    let session = SessionId::new(session_id)?;
    state.ticket_store().end_session(&session)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Statistics only
pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<Statistics>> {
    let session = SessionId::new(session_id)?;
    Ok(Json(state.ticket_store().view(&session)?.statistics))
}

/// Chart datasets only
pub async fn get_charts(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<ChartData>> {
    let session = SessionId::new(session_id)?;
    Ok(Json(state.ticket_store().view(&session)?.charts))
}
