use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

pub fn router() -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health))
}

/// Course welcome banner served at the root.
pub async fn greeting() -> impl IntoResponse {
    Json(serde_json::json!({
        "Saludo": "Hola, ¡bienvenido al curso!",
    }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
