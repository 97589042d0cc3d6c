use serde::{Deserialize, Serialize};

use storepickup_core::{PickupLocationCode, SourceCode, WebsiteCode};

/// Kind of sales channel a pickup location is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesChannelType {
    Website,
}

impl SalesChannelType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
        }
    }
}

impl core::fmt::Display for SalesChannelType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sales channel (type + code) under which a pickup location is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalesChannel {
    #[serde(rename = "type")]
    pub channel_type: SalesChannelType,
    pub code: WebsiteCode,
}

impl SalesChannel {
    pub fn website(code: WebsiteCode) -> Self {
        Self {
            channel_type: SalesChannelType::Website,
            code,
        }
    }
}

/// Physical location customers can collect orders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupLocation {
    pub code: PickupLocationCode,
    pub name: String,
    pub sales_channel: SalesChannel,
}

impl PickupLocation {
    pub fn new(code: PickupLocationCode, name: impl Into<String>, sales_channel: SalesChannel) -> Self {
        Self {
            code,
            name: name.into(),
            sales_channel,
        }
    }

    /// Inventory source backing this location.
    pub fn source_code(&self) -> SourceCode {
        self.code.to_source_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_is_backed_by_source_with_same_code() {
        let location = PickupLocation::new(
            PickupLocationCode::new("STORE1").unwrap(),
            "Downtown",
            SalesChannel::website(WebsiteCode::new("base").unwrap()),
        );

        assert_eq!(location.code.as_str(), "STORE1");
        assert_eq!(location.source_code(), SourceCode::new("STORE1").unwrap());
    }

    #[test]
    fn sales_channel_serializes_with_type_key() {
        let channel = SalesChannel::website(WebsiteCode::new("base").unwrap());
        let json = serde_json::to_value(&channel).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "website", "code": "base" }));
    }
}
