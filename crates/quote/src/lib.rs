//! Quote (shopping cart) domain model.
//!
//! Quotes are owned by the checkout session; this crate only describes the
//! shape validation rules read from them.

pub mod quote;

pub use quote::{LineItem, Quote, ShippingAddress};
