//! Checkout configuration.
//!
//! Read from the environment:
//! - `MEDISUPPLY_DEFAULT_COUNTRY` (default `Colombia`)
//! - `MEDISUPPLY_DEFAULT_PRIORITY` (`HIGH` / `MEDIUM` / `LOW`, default `MEDIUM`)

use crate::order::Priority;

pub const DEFAULT_COUNTRY_VAR: &str = "MEDISUPPLY_DEFAULT_COUNTRY";
pub const DEFAULT_PRIORITY_VAR: &str = "MEDISUPPLY_DEFAULT_PRIORITY";

/// Values the checkout form starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDefaults {
    pub country: String,
    pub priority: Priority,
}

impl Default for CheckoutDefaults {
    fn default() -> Self {
        Self {
            country: "Colombia".to_string(),
            priority: Priority::Medium,
        }
    }
}

impl CheckoutDefaults {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Missing or blank values fall
    /// back to the defaults; an unparseable priority is logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let country = lookup(DEFAULT_COUNTRY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.country);

        let priority = match lookup(DEFAULT_PRIORITY_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(
                    var = DEFAULT_PRIORITY_VAR,
                    value = %raw,
                    error = %err,
                    "invalid default priority; using MEDIUM"
                );
                defaults.priority
            }),
            _ => defaults.priority,
        };

        Self { country, priority }
    }
}
