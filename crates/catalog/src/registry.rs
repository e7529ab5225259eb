use std::sync::RwLock;

use crate::item::{ItemDraft, RECEIVED_OK, SubmittedItem};

/// Single-slot registry for the most recently submitted item.
///
/// One shared slot, last-write-wins: every submit overwrites whatever was
/// stored before. The lock serializes concurrent submits so "last" stays well
/// defined; critical sections are lock-clone-release with no await points.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    slot: RwLock<Option<SubmittedItem>>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the draft, overwriting the slot, and return the stored record.
    ///
    /// Never fails: malformed input is rejected upstream by the decoding
    /// layer before a draft exists.
    pub fn submit(&self, draft: ItemDraft) -> SubmittedItem {
        let stored = SubmittedItem {
            name: draft.name,
            tags: draft.tags,
            item_id: draft.item_id,
            received: RECEIVED_OK.to_string(),
        };

        *self.slot.write().unwrap() = Some(stored.clone());
        stored
    }

    /// Current slot contents, if anything was ever submitted.
    ///
    /// There is no HTTP read endpoint over the slot; this accessor exists for
    /// the overwrite law and tests.
    pub fn last(&self) -> Option<SubmittedItem> {
        self.slot.read().unwrap().clone()
    }
}
