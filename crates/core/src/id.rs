//! Strongly-typed identifiers used across the domain.
//!
//! Catalog and inventory data is keyed by human-assigned string codes rather
//! than generated ids, so most identifiers here wrap a `String`.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Stock keeping unit of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

/// Code of an inventory source (warehouse, store, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SourceCode(String);

/// Code of a pickup location customers can collect orders from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PickupLocationCode(String);

/// Code of a website (sales channel scope).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WebsiteCode(String);

macro_rules! impl_code_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a code, rejecting blank values.
            pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
                let code = code.into();
                if code.trim().is_empty() {
                    return Err(DomainError::invalid_code(format!(
                        "{}: cannot be empty",
                        $name
                    )));
                }
                Ok(Self(code))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_code_newtype!(Sku, "Sku");
impl_code_newtype!(SourceCode, "SourceCode");
impl_code_newtype!(PickupLocationCode, "PickupLocationCode");
impl_code_newtype!(WebsiteCode, "WebsiteCode");

impl PickupLocationCode {
    /// A pickup location is backed by the inventory source with the same code.
    pub fn to_source_code(&self) -> SourceCode {
        SourceCode(self.0.clone())
    }
}

/// Numeric identifier of a store view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(u32);

impl StoreId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for StoreId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_codes_are_rejected() {
        let err = Sku::new("   ").unwrap_err();
        assert_eq!(err, DomainError::invalid_code("Sku: cannot be empty"));
        assert!("".parse::<WebsiteCode>().is_err());
    }

    #[test]
    fn pickup_location_code_maps_to_same_source_code() {
        let code: PickupLocationCode = "STORE1".parse().unwrap();
        assert_eq!(code.to_source_code().as_str(), "STORE1");
    }

    #[test]
    fn blank_codes_are_rejected_when_deserializing() {
        let err = serde_json::from_str::<Sku>("\"   \"").unwrap_err();
        assert!(err.to_string().contains("Sku: cannot be empty"));
        assert!(serde_json::from_str::<PickupLocationCode>("\"\"").is_err());
        assert!(serde_json::from_str::<SourceCode>("\"\\t\"").is_err());
    }

    #[test]
    fn codes_serialize_transparently() {
        let sku = Sku::new("ABC").unwrap();
        assert_eq!(serde_json::to_string(&sku).unwrap(), "\"ABC\"");
        let store: StoreId = serde_json::from_str("3").unwrap();
        assert_eq!(store, StoreId::new(3));
    }
}
