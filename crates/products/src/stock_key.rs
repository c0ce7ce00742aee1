use serde::{Deserialize, Serialize};

use medisupply_core::ValueObject;

/// Identity of one stockable unit: the same SKU held in two warehouses is two
/// different units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StockKey {
    pub sku: String,
    pub warehouse: String,
}

impl StockKey {
    pub fn new(sku: impl Into<String>, warehouse: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            warehouse: warehouse.into(),
        }
    }

    /// Exact match on both parts; no prefix or case folding.
    pub fn matches(&self, sku: &str, warehouse: &str) -> bool {
        self.sku == sku && self.warehouse == warehouse
    }
}

impl ValueObject for StockKey {}

impl core::fmt::Display for StockKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}@{}", self.sku, self.warehouse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_requires_both_parts() {
        let key = StockKey::new("SKU001", "WH001");
        assert!(key.matches("SKU001", "WH001"));
        assert!(!key.matches("SKU001", "WH002"));
        assert!(!key.matches("SKU002", "WH001"));
        assert!(!key.matches("sku001", "WH001"));
    }

    #[test]
    fn same_sku_in_different_warehouses_are_different_keys() {
        assert_ne!(StockKey::new("SKU001", "WH001"), StockKey::new("SKU001", "WH002"));
    }

    #[test]
    fn display_joins_sku_and_warehouse() {
        assert_eq!(StockKey::new("SKU001", "WH001").to_string(), "SKU001@WH001");
    }
}
