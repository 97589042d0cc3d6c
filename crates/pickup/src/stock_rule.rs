use std::sync::Arc;

use storepickup_core::DomainResult;
use storepickup_inventory::SourceStockLookup;
use storepickup_quote::Quote;

use crate::collaborators::{DeliveryMethodCheck, PickupLocationResolver, WebsiteResolver};
use crate::location::{PickupLocation, SalesChannelType};
use crate::result::ValidationResult;
use crate::rule::QuoteValidationRule;

const MISSING_LOCATION: &str = "Quote does not have Pickup Location assigned.";

/// Checks that an in-store pickup quote has a pickup location and that every
/// item is in enabled, sufficient stock at that location's source.
///
/// Quotes not using pickup delivery always pass. All item failures are
/// collected; nothing short-circuits except a resolver fault, which is returned
/// as `Err` untouched.
pub struct PickupStockValidationRule {
    delivery_method: Arc<dyn DeliveryMethodCheck>,
    websites: Arc<dyn WebsiteResolver>,
    pickup_locations: Arc<dyn PickupLocationResolver>,
    source_items: Arc<dyn SourceStockLookup>,
}

impl PickupStockValidationRule {
    pub fn new(
        delivery_method: Arc<dyn DeliveryMethodCheck>,
        websites: Arc<dyn WebsiteResolver>,
        pickup_locations: Arc<dyn PickupLocationResolver>,
        source_items: Arc<dyn SourceStockLookup>,
    ) -> Self {
        Self {
            delivery_method,
            websites,
            pickup_locations,
            source_items,
        }
    }

    /// Pickup location assigned to the quote's shipping address, if any.
    fn pickup_location(&self, quote: &Quote) -> DomainResult<Option<PickupLocation>> {
        let Some(code) = quote.pickup_location_code() else {
            return Ok(None);
        };

        let website = self.websites.website_code_by_store_id(quote.store_id())?;
        self.pickup_locations
            .get_pickup_location(code, SalesChannelType::Website, &website)
    }

    fn check_items(&self, quote: &Quote, location: &PickupLocation, errors: &mut Vec<String>) {
        let source_codes = [location.source_code()];

        for item in quote.items() {
            let records = self
                .source_items
                .source_items_by_sku_and_source_codes(&item.sku, &source_codes);

            // Duplicates: the last record wins.
            match records.last() {
                None => {
                    tracing::debug!(sku = %item.sku, source = %location.code, "no source item");
                    errors.push(format!("The product \"{}\" has no stocks.", item.name));
                }
                Some(record) if !record.can_fulfill(item.qty) => {
                    tracing::debug!(
                        sku = %item.sku,
                        source = %location.code,
                        status = ?record.status,
                        available = %record.quantity,
                        requested = %item.qty,
                        "insufficient source stock"
                    );
                    errors.push(format!(
                        "The product \"{}\" has insufficient stock in location {}",
                        item.name, location.name
                    ));
                }
                Some(_) => {}
            }
        }
    }
}

impl QuoteValidationRule for PickupStockValidationRule {
    fn validate(&self, quote: &Quote) -> DomainResult<Vec<ValidationResult>> {
        if !self.delivery_method.is_pickup_delivery_cart(quote) {
            tracing::debug!(store_id = %quote.store_id(), "not an in-store pickup quote; skipping");
            return Ok(vec![ValidationResult::valid()]);
        }

        let mut errors = Vec::new();
        match self.pickup_location(quote)? {
            None => {
                tracing::warn!(store_id = %quote.store_id(), "pickup quote without pickup location");
                errors.push(MISSING_LOCATION.to_string());
            }
            Some(location) => self.check_items(quote, &location, &mut errors),
        }

        tracing::debug!(
            store_id = %quote.store_id(),
            items = quote.items().len(),
            errors = errors.len(),
            "pickup stock validated"
        );
        Ok(vec![ValidationResult::new(errors)])
    }
}
