//! `tiendita-catalog` — catalog domain: seed stock, submissions, queries.

pub mod item;
pub mod registry;
pub mod service;
pub mod store;

pub use item::{ItemDraft, ItemId, StockEntry, StockQueryResult, SubmittedItem, Tags};
pub use registry::ItemRegistry;
pub use service::QueryService;
pub use store::CatalogStore;
