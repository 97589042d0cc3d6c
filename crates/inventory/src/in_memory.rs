use std::collections::HashMap;
use std::sync::RwLock;

use storepickup_core::{Sku, SourceCode};

use crate::source_item::{SourceStockLookup, SourceStockRecord};

/// In-memory source item store for tests/dev.
///
/// Records are kept per SKU in insertion order, so a lookup returns them in the
/// order they were added (duplicates included).
#[derive(Debug, Default)]
pub struct InMemorySourceItems {
    inner: RwLock<HashMap<Sku, Vec<SourceStockRecord>>>,
}

impl InMemorySourceItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: SourceStockRecord) {
        if let Ok(mut map) = self.inner.write() {
            map.entry(record.sku.clone()).or_default().push(record);
        }
    }

    /// Drop every record for `sku` (e.g. unassign it from all sources).
    pub fn remove_sku(&self, sku: &Sku) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(sku);
        }
    }
}

impl FromIterator<SourceStockRecord> for InMemorySourceItems {
    fn from_iter<I: IntoIterator<Item = SourceStockRecord>>(iter: I) -> Self {
        let store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

impl SourceStockLookup for InMemorySourceItems {
    fn source_items_by_sku_and_source_codes(
        &self,
        sku: &Sku,
        source_codes: &[SourceCode],
    ) -> Vec<SourceStockRecord> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => {
                tracing::warn!(sku = %sku, "source item store lock poisoned; returning no records");
                return vec![];
            }
        };

        map.get(sku)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| source_codes.contains(&r.source_code))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::source_item::SourceItemStatus;

    fn record(sku: &str, source: &str, quantity: i64) -> SourceStockRecord {
        SourceStockRecord {
            sku: Sku::new(sku).unwrap(),
            source_code: SourceCode::new(source).unwrap(),
            status: SourceItemStatus::Enabled,
            quantity: Decimal::from(quantity),
        }
    }

    #[test]
    fn lookup_filters_by_sku_and_source() {
        let store: InMemorySourceItems = [
            record("ABC", "STORE1", 5),
            record("ABC", "STORE2", 7),
            record("XYZ", "STORE1", 1),
        ]
        .into_iter()
        .collect();

        let found = store.source_items_by_sku_and_source_codes(
            &Sku::new("ABC").unwrap(),
            &[SourceCode::new("STORE1").unwrap()],
        );
        assert_eq!(found, vec![record("ABC", "STORE1", 5)]);
    }

    #[test]
    fn unknown_sku_yields_empty_list() {
        let store = InMemorySourceItems::new();
        let found = store.source_items_by_sku_and_source_codes(
            &Sku::new("NOPE").unwrap(),
            &[SourceCode::new("STORE1").unwrap()],
        );
        assert!(found.is_empty());
    }

    #[test]
    fn poisoned_lock_yields_no_records() {
        let store = std::sync::Arc::new(InMemorySourceItems::new());
        store.insert(record("ABC", "STORE1", 5));

        let writer = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = writer.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        let found = store.source_items_by_sku_and_source_codes(
            &Sku::new("ABC").unwrap(),
            &[SourceCode::new("STORE1").unwrap()],
        );
        assert!(found.is_empty());
    }

    #[test]
    fn duplicates_are_returned_in_insertion_order() {
        let store = InMemorySourceItems::new();
        store.insert(record("ABC", "STORE1", 1));
        store.insert(record("ABC", "STORE1", 9));

        let found = store.source_items_by_sku_and_source_codes(
            &Sku::new("ABC").unwrap(),
            &[SourceCode::new("STORE1").unwrap()],
        );
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].quantity, Decimal::from(9));

        store.remove_sku(&Sku::new("ABC").unwrap());
        assert!(store
            .source_items_by_sku_and_source_codes(
                &Sku::new("ABC").unwrap(),
                &[SourceCode::new("STORE1").unwrap()],
            )
            .is_empty());
    }
}
