use axum::Router;

pub mod items;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(system::router())
        .merge(items::router())
}
