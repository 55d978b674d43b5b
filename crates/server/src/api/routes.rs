use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::metrics_middleware, sessions, tickets};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let permissive_cors = state.config().server.permissive_cors;

    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Sessions
        .route("/sessions", post(sessions::create_session))
        .route(
            "/sessions/{session_id}",
            get(sessions::get_view).delete(sessions::end_session),
        )
        .route("/sessions/{session_id}/statistics", get(sessions::get_statistics))
        .route("/sessions/{session_id}/charts", get(sessions::get_charts))
        // Tickets
        .route(
            "/sessions/{session_id}/tickets",
            get(tickets::list_tickets)
                .post(tickets::submit_ticket)
                .put(tickets::edit_tickets),
        )
        .route("/sessions/{session_id}/tickets/{id}", get(tickets::get_ticket));

    let router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if permissive_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
