use serde::{Deserialize, Serialize};

/// Catalog item identifier (integer lookup key, caller-supplied).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ItemId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Item tags: a single tag or an ordered list of tags.
///
/// Both wire forms are accepted (`"shoes"` or `["hats", "summer"]`) and each
/// is echoed back in the form it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    Single(String),
    Multiple(Vec<String>),
}

impl Tags {
    pub fn single(tag: impl Into<String>) -> Self {
        Self::Single(tag.into())
    }

    pub fn multiple<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multiple(tags.into_iter().map(Into::into).collect())
    }
}

/// One entry of the seed stock catalog. Immutable after seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub name: String,
    pub tags: Tags,
    pub item_id: ItemId,
}

/// A decoded item submission, as produced by the HTTP decoding layer.
///
/// Field types are the only validation contract; anything that decodes into
/// this shape is accepted downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub tags: Tags,
    pub item_id: ItemId,
}

/// Marker stored on every accepted submission.
pub const RECEIVED_OK: &str = "OK";

/// The most recently submitted item, as stored in the registry slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedItem {
    pub name: String,
    pub tags: Tags,
    pub item_id: ItemId,
    pub received: String,
}

/// In-stock marker on lookup results.
///
/// The catalog carries no quantities, so every matched entry reports the
/// textual `"True"`.
pub const IN_STOCK: &str = "True";

/// Result of a stock lookup: the matched entry plus request details.
/// Derived per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockQueryResult {
    pub name: String,
    pub tags: Tags,
    pub item_id: ItemId,
    pub quantity_requested: i64,
    pub in_stock: &'static str,
}
