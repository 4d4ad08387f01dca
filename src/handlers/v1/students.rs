//! Student record HTTP handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{debug, warn};

use crate::handlers::problem_details;
use crate::server::AppState;
use crate::store::Student;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct CreateStudentResponse {
    pub id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /student/v1/students
///
/// Caller-supplied `enrollmentNumber` and `isDeleted` values are overwritten
/// by the store; only a body that fails to decode is rejected.
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<Student>, JsonRejection>,
) -> Response {
    let Json(student) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected malformed student body");
            state.audit.record("rejected malformed student body");
            return problem_details::bad_request(rejection.body_text()).into_response();
        }
    };

    let id = state.students.insert(student);
    state.audit.record(format!("created student {id}"));

    (StatusCode::OK, Json(CreateStudentResponse { id })).into_response()
}

/// GET /student/v1/students
pub async fn list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    let students = state.students.list_active();
    state.audit.record("listed students");
    Json(students)
}

/// GET /student/v1/students/{student_id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    match state.students.get(&student_id) {
        Ok(student) => {
            state.audit.record(format!("fetched student {student_id}"));
            (StatusCode::OK, Json(student)).into_response()
        }
        Err(e) => {
            debug!(student_id = %student_id, "student not found");
            state
                .audit
                .record(format!("student not found {student_id}"));
            problem_details::not_found(e.to_string()).into_response()
        }
    }
}

/// DELETE /student/v1/students/{student_id}
///
/// Deleting an already-deleted record reports not found, matching what `get`
/// and the list report for tombstoned records.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    match state.students.soft_delete(&student_id) {
        Ok(()) => {
            state
                .audit
                .record(format!("soft-deleted student {student_id}"));
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            debug!(student_id = %student_id, "student not found");
            state
                .audit
                .record(format!("student not found {student_id}"));
            problem_details::not_found(e.to_string()).into_response()
        }
    }
}
