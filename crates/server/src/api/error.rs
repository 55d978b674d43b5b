//! Mapping of core errors onto HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use helpdesk_core::TicketError;
use serde::Serialize;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler error carrying a core ticket error.
#[derive(Debug)]
pub struct ApiError(pub TicketError);

impl From<TicketError> for ApiError {
    fn from(err: TicketError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(TicketError::InvalidBody(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(TicketError::InvalidBody(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            TicketError::NotFound(_) | TicketError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            TicketError::IdSpaceExhausted => StatusCode::CONFLICT,
            TicketError::InvalidId(_)
            | TicketError::InvalidStatus(_)
            | TicketError::InvalidPriority(_)
            | TicketError::EmptyIssue
            | TicketError::InvalidSessionId(_)
            | TicketError::DuplicateId(_)
            | TicketError::EditRejected { .. }
            | TicketError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(TicketError::EmptyIssue).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(TicketError::InvalidPriority("Urgent".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(TicketError::NotFound("TICKET-1".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(TicketError::SessionNotFound("s".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(TicketError::IdSpaceExhausted).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError(TicketError::InvalidBody("expected value".into())).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
