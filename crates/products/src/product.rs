use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use medisupply_core::{DomainError, DomainResult, Money};

use crate::stock_key::StockKey;

/// Optional catalog metadata carried along for display (not used for pricing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub provider_nit: Option<String>,
    pub product_type: Option<String>,
    pub batch: Option<String>,
    pub warehouse_name: Option<String>,
    pub expiration_date: Option<NaiveDate>,
}

/// Product snapshot as served by the catalog.
///
/// The snapshot is immutable: stock and price are whatever the catalog reported
/// when it was fetched. A fresher snapshot is a new value (see [`Product::with_stock`]).
/// Deserialization goes through [`Product::new`], so catalog payloads are
/// validated like any other input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    #[serde(flatten)]
    key: StockKey,
    name: String,
    stock: i64,
    unit_value: Money,
    #[serde(flatten)]
    metadata: CatalogMetadata,
}

/// Catalog wire shape, before validation.
#[derive(Deserialize)]
struct ProductRecord {
    sku: String,
    warehouse: String,
    name: String,
    stock: i64,
    unit_value: Money,
    #[serde(flatten)]
    metadata: CatalogMetadata,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> DomainResult<Self> {
        Ok(Product::new(
            record.sku,
            record.warehouse,
            record.name,
            record.stock,
            record.unit_value,
        )?
        .with_metadata(record.metadata))
    }
}

impl Product {
    pub fn new(
        sku: impl Into<String>,
        warehouse: impl Into<String>,
        name: impl Into<String>,
        stock: i64,
        unit_value: Money,
    ) -> DomainResult<Self> {
        let key = StockKey::new(sku, warehouse);

        if key.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if key.warehouse.trim().is_empty() {
            return Err(DomainError::validation("warehouse cannot be empty"));
        }
        if stock < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        if unit_value.is_negative() {
            return Err(DomainError::invariant("unit value cannot be negative"));
        }

        Ok(Self {
            key,
            name: name.into(),
            stock,
            unit_value,
            metadata: CatalogMetadata::default(),
        })
    }

    pub fn with_metadata(mut self, metadata: CatalogMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Same product with a different stock level.
    pub fn with_stock(&self, stock: i64) -> DomainResult<Self> {
        if stock < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        Ok(Self {
            stock,
            ..self.clone()
        })
    }

    pub fn key(&self) -> &StockKey {
        &self.key
    }

    pub fn sku(&self) -> &str {
        &self.key.sku
    }

    pub fn warehouse(&self) -> &str {
        &self.key.warehouse
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn unit_value(&self) -> Money {
        self.unit_value
    }

    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// True once `on` is past the expiration date. Products without one never expire.
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        self.metadata.expiration_date.is_some_and(|exp| on > exp)
    }
}
