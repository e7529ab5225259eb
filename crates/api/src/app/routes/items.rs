use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use tiendita_catalog::ItemId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/items/", post(create_item))
        .route("/items/:id", get(get_item))
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    let stored = services.queries().create_item(body.into_draft());

    (StatusCode::OK, Json(dto::submitted_to_json(stored))).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Query(query): Query<dto::StockQuery>,
) -> axum::response::Response {
    match services.queries().get_item(ItemId::new(id), query.count) {
        Ok(result) => (StatusCode::OK, Json(dto::stock_result_to_json(result))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
