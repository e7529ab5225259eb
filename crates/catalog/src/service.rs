use std::sync::Arc;

use tiendita_core::{DomainError, DomainResult};

use crate::item::{IN_STOCK, ItemDraft, ItemId, StockQueryResult, SubmittedItem};
use crate::registry::ItemRegistry;
use crate::store::CatalogStore;

/// Create/read operations over the catalog store and item registry.
///
/// Store handles are injected at construction so tests can run the service
/// against their own instances instead of process-wide state.
#[derive(Debug, Clone)]
pub struct QueryService {
    catalog: Arc<CatalogStore>,
    registry: Arc<ItemRegistry>,
}

impl QueryService {
    pub fn new(catalog: Arc<CatalogStore>, registry: Arc<ItemRegistry>) -> Self {
        Self { catalog, registry }
    }

    /// Store a submitted item and echo the stored record.
    ///
    /// Always succeeds once the payload decoded; the registry slot is
    /// overwritten, last-write-wins.
    pub fn create_item(&self, draft: ItemDraft) -> SubmittedItem {
        self.registry.submit(draft)
    }

    /// Look up a stock entry and describe it for the requested quantity.
    ///
    /// `quantity` is taken as-is, zero and negatives included; the HTTP layer
    /// applies the default of 1. A miss surfaces verbatim as `NotFound`.
    pub fn get_item(&self, item_id: ItemId, quantity: i64) -> DomainResult<StockQueryResult> {
        let entry = self
            .catalog
            .find_by_id(item_id)
            .ok_or_else(DomainError::not_found)?;

        Ok(StockQueryResult {
            name: entry.name.clone(),
            tags: entry.tags.clone(),
            item_id: entry.item_id,
            quantity_requested: quantity,
            in_stock: IN_STOCK,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{RECEIVED_OK, Tags};

    fn service() -> QueryService {
        QueryService::new(
            Arc::new(CatalogStore::with_seed()),
            Arc::new(ItemRegistry::new()),
        )
    }

    #[test]
    fn get_item_copies_the_matched_entry_and_adds_request_details() {
        let result = service().get_item(ItemId(1), 2).unwrap();

        assert_eq!(result.name, "Air Jordan 1");
        assert_eq!(result.tags, Tags::single("shoes"));
        assert_eq!(result.item_id, ItemId(1));
        assert_eq!(result.quantity_requested, 2);
        assert_eq!(result.in_stock, "True");
    }

    #[test]
    fn get_item_fails_not_found_for_unseeded_ids() {
        let err = service().get_item(ItemId(99), 1).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(err.to_string(), "Item not found");
    }

    #[test]
    fn get_item_accepts_zero_and_negative_quantities_as_is() {
        let svc = service();
        assert_eq!(svc.get_item(ItemId(2), 0).unwrap().quantity_requested, 0);
        assert_eq!(svc.get_item(ItemId(2), -5).unwrap().quantity_requested, -5);
    }

    #[test]
    fn create_item_echoes_the_submission_with_received_marker() {
        let stored = service().create_item(ItemDraft {
            name: "Cap".to_string(),
            tags: Tags::multiple(["hats", "summer"]),
            item_id: ItemId(10),
        });

        assert_eq!(stored.name, "Cap");
        assert_eq!(stored.tags, Tags::multiple(["hats", "summer"]));
        assert_eq!(stored.item_id, ItemId(10));
        assert_eq!(stored.received, RECEIVED_OK);
    }

    #[test]
    fn create_item_twice_leaves_only_the_second_payload() {
        let registry = Arc::new(ItemRegistry::new());
        let svc = QueryService::new(Arc::new(CatalogStore::with_seed()), Arc::clone(&registry));

        svc.create_item(ItemDraft {
            name: "Cap".to_string(),
            tags: Tags::single("hats"),
            item_id: ItemId(10),
        });
        let second = svc.create_item(ItemDraft {
            name: "Scarf".to_string(),
            tags: Tags::single("winter"),
            item_id: ItemId(11),
        });

        assert_eq!(registry.last(), Some(second));
    }

    #[test]
    fn create_item_does_not_affect_catalog_lookups() {
        let svc = service();
        svc.create_item(ItemDraft {
            name: "Cap".to_string(),
            tags: Tags::single("hats"),
            item_id: ItemId(1),
        });

        // The submitted item shares id 1 with the seed entry; lookups still
        // resolve against the catalog only.
        assert_eq!(svc.get_item(ItemId(1), 1).unwrap().name, "Air Jordan 1");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every seeded id resolves, fields unchanged, and the
            /// requested quantity is preserved as-is.
            #[test]
            fn seeded_ids_resolve_with_any_quantity(idx in 0usize..3, quantity in any::<i64>()) {
                let svc = service();
                let entry = CatalogStore::with_seed().entries()[idx].clone();

                let result = svc.get_item(entry.item_id, quantity).unwrap();
                prop_assert_eq!(result.name, entry.name);
                prop_assert_eq!(result.tags, entry.tags);
                prop_assert_eq!(result.item_id, entry.item_id);
                prop_assert_eq!(result.quantity_requested, quantity);
                prop_assert_eq!(result.in_stock, "True");
            }

            /// Property: ids outside the seed set always miss.
            #[test]
            fn unseeded_ids_always_miss(
                id in prop_oneof![i64::MIN..=0i64, 4i64..=i64::MAX],
                quantity in any::<i64>(),
            ) {
                let err = service().get_item(ItemId(id), quantity).unwrap_err();
                prop_assert_eq!(err, DomainError::NotFound);
            }

            /// Property: the stored record echoes the draft exactly, plus the
            /// received marker.
            #[test]
            fn submissions_echo_the_draft(name in "[A-Za-z0-9 ]{0,40}", id in any::<i64>()) {
                let stored = service().create_item(ItemDraft {
                    name: name.clone(),
                    tags: Tags::single("prop"),
                    item_id: ItemId(id),
                });
                prop_assert_eq!(stored.name, name);
                prop_assert_eq!(stored.item_id, ItemId(id));
                prop_assert_eq!(stored.received, RECEIVED_OK);
            }
        }
    }
}
