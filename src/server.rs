use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::timeout::TimeoutLayer;

use crate::audit::AuditLog;
use crate::handlers;
use crate::store::StudentStore;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub students: StudentStore,
    pub audit: AuditLog,
}

// ============================================================================
// Server Setup
// ============================================================================

pub fn build_app(state: AppState, request_timeout_seconds: u64) -> Router {
    let student_v1 = Router::new()
        .route(
            "/students",
            get(handlers::v1::list_students).post(handlers::v1::create_student),
        )
        .route(
            "/students/{student_id}",
            get(handlers::v1::get_student).delete(handlers::v1::delete_student),
        )
        .with_state(state.clone())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_seconds),
        ))
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024)); // 2 MB

    Router::new()
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .with_state(state)
        .nest("/student/v1", student_v1)
}
