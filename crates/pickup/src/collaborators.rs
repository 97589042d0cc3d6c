//! Read-only services the pickup rules depend on.
//!
//! Implementations live elsewhere (catalog, store configuration, pickup
//! location directory); rules receive them through their constructors.

use std::sync::Arc;

use storepickup_core::{DomainResult, PickupLocationCode, StoreId, WebsiteCode};
use storepickup_quote::Quote;

use crate::location::{PickupLocation, SalesChannelType};

/// Answers whether a quote uses the in-store pickup delivery method.
pub trait DeliveryMethodCheck: Send + Sync {
    fn is_pickup_delivery_cart(&self, quote: &Quote) -> bool;
}

/// Resolves the website a store view belongs to.
pub trait WebsiteResolver: Send + Sync {
    /// Fails with `DomainError::NoSuchEntity` for an unknown store.
    fn website_code_by_store_id(&self, store_id: StoreId) -> DomainResult<WebsiteCode>;
}

/// Looks up pickup locations by code within a sales channel.
pub trait PickupLocationResolver: Send + Sync {
    /// `Ok(None)` when the location exists but is not offered for pickup;
    /// `DomainError::NoSuchEntity` when the code/channel pairing is unknown.
    fn get_pickup_location(
        &self,
        code: &PickupLocationCode,
        channel_type: SalesChannelType,
        channel_code: &WebsiteCode,
    ) -> DomainResult<Option<PickupLocation>>;
}

impl<T> DeliveryMethodCheck for Arc<T>
where
    T: DeliveryMethodCheck + ?Sized,
{
    fn is_pickup_delivery_cart(&self, quote: &Quote) -> bool {
        (**self).is_pickup_delivery_cart(quote)
    }
}

impl<T> WebsiteResolver for Arc<T>
where
    T: WebsiteResolver + ?Sized,
{
    fn website_code_by_store_id(&self, store_id: StoreId) -> DomainResult<WebsiteCode> {
        (**self).website_code_by_store_id(store_id)
    }
}

impl<T> PickupLocationResolver for Arc<T>
where
    T: PickupLocationResolver + ?Sized,
{
    fn get_pickup_location(
        &self,
        code: &PickupLocationCode,
        channel_type: SalesChannelType,
        channel_code: &WebsiteCode,
    ) -> DomainResult<Option<PickupLocation>> {
        (**self).get_pickup_location(code, channel_type, channel_code)
    }
}
