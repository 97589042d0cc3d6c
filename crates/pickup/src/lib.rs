//! In-store pickup quote validation.
//!
//! Decides whether a cart set up for in-store pickup can be fulfilled from the
//! chosen location. Rules only read: quotes, locations and stock snapshots are
//! never modified here.

pub mod collaborators;
pub mod config;
pub mod in_memory;
pub mod location;
pub mod result;
pub mod rule;
pub mod stock_rule;

pub use collaborators::{DeliveryMethodCheck, PickupLocationResolver, WebsiteResolver};
pub use config::PickupConfig;
pub use in_memory::{InMemoryPickupLocations, InMemoryWebsiteResolver, ShippingMethodDeliveryCheck};
pub use location::{PickupLocation, SalesChannel, SalesChannelType};
pub use result::ValidationResult;
pub use rule::{QuoteValidationRule, QuoteValidator};
pub use stock_rule::PickupStockValidationRule;
