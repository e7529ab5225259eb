use crate::item::{ItemId, StockEntry, Tags};

/// Fixed, read-mostly list of stock entries.
///
/// Built once at startup and immutable afterwards, so handles can be shared
/// across request tasks without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    entries: Vec<StockEntry>,
}

impl CatalogStore {
    /// Catalog populated with the fixed seed records.
    ///
    /// Seed ids are assumed unique; nothing enforces it.
    pub fn with_seed() -> Self {
        Self::from_entries(vec![
            StockEntry {
                name: "Air Jordan 1".to_string(),
                tags: Tags::single("shoes"),
                item_id: ItemId(1),
            },
            StockEntry {
                name: "MacBook Pro".to_string(),
                tags: Tags::single("electronics"),
                item_id: ItemId(2),
            },
            StockEntry {
                name: "Guitar".to_string(),
                tags: Tags::single("music"),
                item_id: ItemId(3),
            },
        ])
    }

    /// Catalog over caller-provided entries (isolated tests).
    pub fn from_entries(entries: Vec<StockEntry>) -> Self {
        Self { entries }
    }

    /// First entry whose id matches, if any.
    ///
    /// Linear scan in seed order; the catalog is tiny and this is not a hot
    /// path.
    pub fn find_by_id(&self, item_id: ItemId) -> Option<&StockEntry> {
        self.entries.iter().find(|entry| entry.item_id == item_id)
    }

    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }
}
