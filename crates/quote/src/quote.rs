use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use storepickup_core::{DomainError, PickupLocationCode, Sku, StoreId};

/// Shipping address of a quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Pickup location chosen for in-store pickup. `None` means the quote is
    /// not a pickup delivery or the location has not been resolved yet.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_code_as_none"
    )]
    pub pickup_location_code: Option<PickupLocationCode>,
}

/// An empty or whitespace-only code on the address means no location was
/// chosen, not a malformed one.
fn blank_code_as_none<'de, D>(deserializer: D) -> Result<Option<PickupLocationCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(code) if !code.trim().is_empty() => PickupLocationCode::new(code)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl ShippingAddress {
    pub fn for_pickup(code: PickupLocationCode) -> Self {
        Self {
            pickup_location_code: Some(code),
        }
    }

    pub fn pickup_location_code(&self) -> Option<&PickupLocationCode> {
        self.pickup_location_code.as_ref()
    }
}

/// Quote line: product, display name, requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLineItem")]
pub struct LineItem {
    pub sku: Sku,
    pub name: String,
    pub qty: Decimal,
}

impl LineItem {
    pub fn new(sku: Sku, name: impl Into<String>, qty: Decimal) -> Result<Self, DomainError> {
        if qty < Decimal::ZERO {
            return Err(DomainError::validation("qty cannot be negative"));
        }
        Ok(Self {
            sku,
            name: name.into(),
            qty,
        })
    }
}

/// Unchecked wire shape of a line item.
#[derive(Deserialize)]
struct RawLineItem {
    sku: Sku,
    name: String,
    qty: Decimal,
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = DomainError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        Self::new(raw.sku, raw.name, raw.qty)
    }
}

/// A shopping cart prior to order placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    store_id: StoreId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shipping_address: Option<ShippingAddress>,
    /// Carrier/method code selected at checkout (e.g. `instore_pickup`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shipping_method: Option<String>,
    #[serde(default)]
    items: Vec<LineItem>,
}

impl Quote {
    pub fn new(store_id: StoreId) -> Self {
        Self {
            store_id,
            shipping_address: None,
            shipping_method: None,
            items: Vec::new(),
        }
    }

    pub fn with_shipping_address(mut self, address: ShippingAddress) -> Self {
        self.shipping_address = Some(address);
        self
    }

    pub fn with_shipping_method(mut self, method: impl Into<String>) -> Self {
        self.shipping_method = Some(method.into());
        self
    }

    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn store_id(&self) -> StoreId {
        self.store_id
    }

    pub fn shipping_address(&self) -> Option<&ShippingAddress> {
        self.shipping_address.as_ref()
    }

    pub fn shipping_method(&self) -> Option<&str> {
        self.shipping_method.as_deref()
    }

    /// Line items in the order they were added to the cart.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Pickup location code carried on the shipping address, if any.
    pub fn pickup_location_code(&self) -> Option<&PickupLocationCode> {
        self.shipping_address
            .as_ref()
            .and_then(ShippingAddress::pickup_location_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(code: &str) -> Sku {
        Sku::new(code).unwrap()
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = LineItem::new(sku("ABC"), "Widget", Decimal::NEGATIVE_ONE).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("qty") => {}
            _ => panic!("Expected Validation error for negative qty"),
        }
    }

    #[test]
    fn items_keep_insertion_order() {
        let quote = Quote::new(StoreId::new(1))
            .with_item(LineItem::new(sku("B"), "Second", Decimal::ONE).unwrap())
            .with_item(LineItem::new(sku("A"), "First", Decimal::TWO).unwrap());

        let names: Vec<&str> = quote.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn pickup_location_code_requires_address_and_code() {
        let quote = Quote::new(StoreId::new(1));
        assert!(quote.pickup_location_code().is_none());

        let quote = quote.with_shipping_address(ShippingAddress::default());
        assert!(quote.pickup_location_code().is_none());

        let code = PickupLocationCode::new("STORE1").unwrap();
        let quote = quote.with_shipping_address(ShippingAddress::for_pickup(code.clone()));
        assert_eq!(quote.pickup_location_code(), Some(&code));
    }

    #[test]
    fn negative_quantity_is_rejected_when_deserializing() {
        let err = serde_json::from_str::<LineItem>(r#"{"sku":"ABC","name":"Widget","qty":"-3"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("qty cannot be negative"));

        let zero: LineItem =
            serde_json::from_str(r#"{"sku":"ABC","name":"Widget","qty":"0"}"#).unwrap();
        assert_eq!(zero.qty, Decimal::ZERO);
    }

    #[test]
    fn blank_sku_is_rejected_when_deserializing() {
        let json = r#"{"store_id":1,"items":[{"sku":"   ","name":"Widget","qty":"1"}]}"#;
        assert!(serde_json::from_str::<Quote>(json).is_err());
    }

    #[test]
    fn blank_pickup_code_deserializes_as_no_location() {
        for code in ["\"\"", "\"   \"", "null"] {
            let json = format!(r#"{{"store_id":1,"shipping_address":{{"pickup_location_code":{code}}}}}"#);
            let quote: Quote = serde_json::from_str(&json).unwrap();
            assert!(quote.shipping_address().is_some());
            assert!(quote.pickup_location_code().is_none(), "code {code}");
        }
    }

    #[test]
    fn deserializes_from_json_fixture() {
        let json = r#"{
            "store_id": 1,
            "shipping_address": { "pickup_location_code": "STORE1" },
            "shipping_method": "instore_pickup",
            "items": [ { "sku": "ABC", "name": "Widget", "qty": "3" } ]
        }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.store_id(), StoreId::new(1));
        assert_eq!(quote.shipping_method(), Some("instore_pickup"));
        assert_eq!(quote.items()[0].qty, Decimal::from(3));
        assert_eq!(quote.pickup_location_code().map(|c| c.as_str()), Some("STORE1"));
    }
}
