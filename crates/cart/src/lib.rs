//! Shopping-cart ledger.
//!
//! One [`CartLedger`] per user session: an ordered list of line items keyed by
//! `(sku, warehouse)`, with quantities bounded by the product's stock and
//! aggregates (`item_count`, `total`) recomputed from the list on every read.
//!
//! Pure in-memory logic: no IO, no persistence, no HTTP.

pub mod error;
pub mod event;
pub mod ledger;
pub mod line_item;
pub mod outcome;

pub use error::CartError;
pub use event::{CartCleared, CartEvent, ItemAdded, ItemRemoved, QuantityChanged};
pub use ledger::CartLedger;
pub use line_item::CartLineItem;
pub use outcome::{CartChange, CartOutcome};
