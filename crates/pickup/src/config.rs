//! Environment-driven configuration.

/// Shipping method code used when a customer picks "collect in store".
pub const DEFAULT_DELIVERY_METHOD_CODE: &str = "instore_pickup";

/// Environment variable overriding [`DEFAULT_DELIVERY_METHOD_CODE`].
pub const DELIVERY_METHOD_ENV: &str = "STOREPICKUP_DELIVERY_METHOD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupConfig {
    pub delivery_method_code: String,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            delivery_method_code: DEFAULT_DELIVERY_METHOD_CODE.to_string(),
        }
    }
}

impl PickupConfig {
    /// Read configuration from the process environment, falling back to
    /// defaults for unset or blank values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let delivery_method_code = lookup(DELIVERY_METHOD_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                tracing::debug!(
                    "{DELIVERY_METHOD_ENV} not set; using {DEFAULT_DELIVERY_METHOD_CODE}"
                );
                DEFAULT_DELIVERY_METHOD_CODE.to_string()
            });

        Self {
            delivery_method_code,
        }
    }
}
