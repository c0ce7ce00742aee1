use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use medisupply_core::{Entity, Money};
use medisupply_products::{Product, StockKey};

/// One cart line: a product snapshot and how many units of it.
///
/// The subtotal is never stored; it is `quantity × unit_value` of the
/// snapshot, computed on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    product: Product,
    quantity: i64,
}

impl CartLineItem {
    pub(crate) fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn key(&self) -> &StockKey {
        self.product.key()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn subtotal(&self) -> Money {
        self.product.unit_value().times(self.quantity)
    }

    /// Units that still fit on top of this line when `stock` units exist.
    /// Never negative, even if `stock` has dropped below the line's quantity.
    pub fn remaining_within(&self, stock: i64) -> i64 {
        stock.saturating_sub(self.quantity).max(0)
    }
}

impl Entity for CartLineItem {
    type Id = StockKey;

    fn id(&self) -> &Self::Id {
        self.key()
    }
}

impl Serialize for CartLineItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CartLineItem", 3)?;
        state.serialize_field("product", &self.product)?;
        state.serialize_field("quantity", &self.quantity)?;
        state.serialize_field("subtotal", &self.subtotal())?;
        state.end()
    }
}
