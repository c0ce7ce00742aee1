//! Products domain module.
//!
//! Read-only product snapshots as the catalog hands them to the cart, plus the
//! `(sku, warehouse)` key that identifies one stockable unit.

pub mod product;
pub mod stock_key;

pub use product::{CatalogMetadata, Product};
pub use stock_key::StockKey;
