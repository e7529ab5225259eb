use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tiendita_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        // The display string is the fixed client-facing message.
        DomainError::NotFound => detail_error(StatusCode::NOT_FOUND, err.to_string()),
    }
}

/// Client-facing error body: `{"detail": "..."}`.
pub fn detail_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "detail": message.into(),
        })),
    )
        .into_response()
}
