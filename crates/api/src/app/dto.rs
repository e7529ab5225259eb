use serde::Deserialize;

use tiendita_catalog::{ItemDraft, ItemId, StockQueryResult, SubmittedItem, Tags};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /items/`.
///
/// The field types are the validation contract: a body that does not decode
/// into this shape is rejected by the extractor before any handler runs.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub tags: Tags,
    pub item_id: ItemId,
}

impl CreateItemRequest {
    pub fn into_draft(self) -> ItemDraft {
        ItemDraft {
            name: self.name,
            tags: self.tags,
            item_id: self.item_id,
        }
    }
}

/// Query string of `GET /items/{item_id}`.
#[derive(Debug, Deserialize)]
pub struct StockQuery {
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    1
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn submitted_to_json(item: SubmittedItem) -> serde_json::Value {
    serde_json::json!({
        "name": item.name,
        "tags": item.tags,
        "item_id": item.item_id,
        "received": item.received,
    })
}

pub fn stock_result_to_json(result: StockQueryResult) -> serde_json::Value {
    serde_json::json!({
        "name": result.name,
        "tags": result.tags,
        "item_id": result.item_id,
        "quantity_requested": result.quantity_requested,
        "in_stock": result.in_stock,
    })
}
