//! Inventory source stock (read side).
//!
//! Per-source stock snapshots and the lookup contract validation rules use
//! to fetch them. Pure data + traits (no storage, no HTTP).

pub mod in_memory;
pub mod source_item;

pub use in_memory::InMemorySourceItems;
pub use source_item::{SourceItemStatus, SourceStockLookup, SourceStockRecord};
