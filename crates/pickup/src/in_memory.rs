//! In-memory collaborators for tests/dev wiring.

use std::collections::HashMap;
use std::sync::RwLock;

use storepickup_core::{DomainError, DomainResult, PickupLocationCode, StoreId, WebsiteCode};
use storepickup_quote::Quote;

use crate::collaborators::{DeliveryMethodCheck, PickupLocationResolver, WebsiteResolver};
use crate::config::PickupConfig;
use crate::location::{PickupLocation, SalesChannelType};

/// Pickup delivery iff the quote's shipping method matches the configured code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingMethodDeliveryCheck {
    method_code: String,
}

impl ShippingMethodDeliveryCheck {
    pub fn new(method_code: impl Into<String>) -> Self {
        Self {
            method_code: method_code.into(),
        }
    }

    pub fn from_config(config: &PickupConfig) -> Self {
        Self::new(config.delivery_method_code.clone())
    }
}

impl Default for ShippingMethodDeliveryCheck {
    fn default() -> Self {
        Self::from_config(&PickupConfig::default())
    }
}

impl DeliveryMethodCheck for ShippingMethodDeliveryCheck {
    fn is_pickup_delivery_cart(&self, quote: &Quote) -> bool {
        quote.shipping_method() == Some(self.method_code.as_str())
    }
}

/// Store → website map.
#[derive(Debug, Default)]
pub struct InMemoryWebsiteResolver {
    inner: RwLock<HashMap<StoreId, WebsiteCode>>,
}

impl InMemoryWebsiteResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&self, store_id: StoreId, website: WebsiteCode) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(store_id, website);
        }
    }
}

impl WebsiteResolver for InMemoryWebsiteResolver {
    fn website_code_by_store_id(&self, store_id: StoreId) -> DomainResult<WebsiteCode> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::invariant("website map lock poisoned"))?;
        map.get(&store_id)
            .cloned()
            .ok_or_else(|| DomainError::no_such_entity(format!("store {store_id}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LocationKey {
    code: PickupLocationCode,
    channel_type: SalesChannelType,
    channel_code: WebsiteCode,
}

/// Pickup location directory keyed by (code, sales channel).
///
/// Inactive locations are known but not offered for pickup; they resolve to
/// `Ok(None)` rather than an error.
#[derive(Debug, Default)]
pub struct InMemoryPickupLocations {
    inner: RwLock<HashMap<LocationKey, (PickupLocation, bool)>>,
}

impl InMemoryPickupLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, location: PickupLocation) {
        self.put(location, true);
    }

    pub fn insert_inactive(&self, location: PickupLocation) {
        self.put(location, false);
    }

    fn put(&self, location: PickupLocation, active: bool) {
        let key = LocationKey {
            code: location.code.clone(),
            channel_type: location.sales_channel.channel_type,
            channel_code: location.sales_channel.code.clone(),
        };
        if let Ok(mut map) = self.inner.write() {
            map.insert(key, (location, active));
        }
    }
}

impl PickupLocationResolver for InMemoryPickupLocations {
    fn get_pickup_location(
        &self,
        code: &PickupLocationCode,
        channel_type: SalesChannelType,
        channel_code: &WebsiteCode,
    ) -> DomainResult<Option<PickupLocation>> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::invariant("pickup location map lock poisoned"))?;
        let key = LocationKey {
            code: code.clone(),
            channel_type,
            channel_code: channel_code.clone(),
        };

        match map.get(&key) {
            Some((location, true)) => Ok(Some(location.clone())),
            Some((_, false)) => Ok(None),
            None => Err(DomainError::no_such_entity(format!(
                "pickup location {code} for {channel_type} {channel_code}"
            ))),
        }
    }
}
