//! RFC 7807 problem responses.
//!
//! Client errors are rendered as `application/problem+json` bodies carrying
//! `type`, `title`, `status`, and `detail` fields.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    problem_type: &'static str,
    title: &'static str,
    status: u16,
    detail: String,
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(self),
        )
            .into_response()
    }
}

fn problem(status: StatusCode, title: &'static str, detail: String) -> ProblemDetails {
    ProblemDetails {
        problem_type: "about:blank",
        title,
        status: status.as_u16(),
        detail,
    }
}

pub fn bad_request(detail: impl Into<String>) -> ProblemDetails {
    problem(StatusCode::BAD_REQUEST, "Bad Request", detail.into())
}

pub fn not_found(detail: impl Into<String>) -> ProblemDetails {
    problem(StatusCode::NOT_FOUND, "Not Found", detail.into())
}
