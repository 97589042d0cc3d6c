use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storepickup_core::{Sku, SourceCode};

/// Whether a source item may be sold from its source.
///
/// Stored upstream as an integer where `1` means enabled; any other value is
/// treated as disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum SourceItemStatus {
    Enabled,
    Disabled,
}

impl SourceItemStatus {
    pub const ENABLED_RAW: i32 = 1;
    pub const DISABLED_RAW: i32 = 0;

    pub fn from_raw(raw: i32) -> Self {
        if raw == Self::ENABLED_RAW {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Self::Enabled => Self::ENABLED_RAW,
            Self::Disabled => Self::DISABLED_RAW,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

impl From<i32> for SourceItemStatus {
    fn from(value: i32) -> Self {
        Self::from_raw(value)
    }
}

impl From<SourceItemStatus> for i32 {
    fn from(value: SourceItemStatus) -> Self {
        value.as_raw()
    }
}

/// Stock snapshot of one SKU at one inventory source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStockRecord {
    pub sku: Sku,
    pub source_code: SourceCode,
    pub status: SourceItemStatus,
    pub quantity: Decimal,
}

impl SourceStockRecord {
    /// True when the source is enabled for this SKU and holds at least `qty`.
    pub fn can_fulfill(&self, qty: Decimal) -> bool {
        self.status.is_enabled() && self.quantity >= qty
    }
}

/// Read access to source items, filtered by SKU and source codes.
pub trait SourceStockLookup: Send + Sync {
    /// Records for `sku` at any of `source_codes`. An empty list means the SKU
    /// is not assigned to those sources.
    fn source_items_by_sku_and_source_codes(
        &self,
        sku: &Sku,
        source_codes: &[SourceCode],
    ) -> Vec<SourceStockRecord>;
}

impl<S> SourceStockLookup for Arc<S>
where
    S: SourceStockLookup + ?Sized,
{
    fn source_items_by_sku_and_source_codes(
        &self,
        sku: &Sku,
        source_codes: &[SourceCode],
    ) -> Vec<SourceStockRecord> {
        (**self).source_items_by_sku_and_source_codes(sku, source_codes)
    }
}
