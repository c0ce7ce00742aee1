use std::sync::Arc;

use chrono::Utc;

use medisupply_core::{AggregateRoot, CartId, Money};
use medisupply_events::{EventBus, InMemoryEventBus, Subscription};
use medisupply_products::{Product, StockKey};

use crate::error::CartError;
use crate::event::{CartCleared, CartEvent, ItemAdded, ItemRemoved, QuantityChanged};
use crate::line_item::CartLineItem;
use crate::outcome::{CartChange, CartOutcome};

/// Aggregate root: the cart of one user session.
///
/// Every committed change swaps in a new `Arc<[CartLineItem]>` snapshot, bumps
/// the revision and publishes a [`CartEvent`]. Rejected changes do none of
/// the three.
#[derive(Debug)]
pub struct CartLedger {
    id: CartId,
    items: Arc<[CartLineItem]>,
    revision: u64,
    bus: InMemoryEventBus<CartEvent>,
}

impl CartLedger {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Arc::from(Vec::new()),
            revision: 0,
            bus: InMemoryEventBus::new(),
        }
    }

    /// Current line items, in insertion order.
    ///
    /// The returned snapshot is frozen; after the next committed change the
    /// ledger holds a different `Arc` (`Arc::ptr_eq` detects it).
    pub fn items(&self) -> Arc<[CartLineItem]> {
        Arc::clone(&self.items)
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of all line quantities, saturating at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .map(CartLineItem::quantity)
            .fold(0, i64::saturating_add)
    }

    /// Sum of all line subtotals.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of committed changes since the ledger was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Receive a [`CartEvent`] for every change committed from now on.
    pub fn subscribe(&self) -> Subscription<CartEvent> {
        self.bus.subscribe()
    }

    /// Exact-key lookup.
    pub fn get_cart_item(&self, sku: &str, warehouse: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.key().matches(sku, warehouse))
    }

    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> CartOutcome {
        self.try_add_to_cart(product, quantity).into()
    }

    /// Add `quantity` units of `product`, merging into the existing line for the
    /// same `(sku, warehouse)` if there is one.
    ///
    /// Stock is checked against `product` as passed in. A merged line keeps the
    /// snapshot it was created with; only its quantity changes.
    pub fn try_add_to_cart(
        &mut self,
        product: &Product,
        quantity: i64,
    ) -> Result<CartChange, CartError> {
        if quantity <= 0 {
            return Err(self.rejected(product.key(), quantity, CartError::InvalidQuantity));
        }

        if quantity > product.stock() {
            let err = CartError::InsufficientStock {
                available: product.stock(),
            };
            return Err(self.rejected(product.key(), quantity, err));
        }

        let key = product.key().clone();
        let mut next = self.items.to_vec();

        let line_quantity = match self.position(product.sku(), product.warehouse()) {
            Some(idx) => {
                let line = &mut next[idx];
                let new_quantity = line.quantity().saturating_add(quantity);

                if new_quantity > product.stock() {
                    let err = CartError::ExceedsRemainingStock {
                        remaining: line.remaining_within(product.stock()),
                    };
                    return Err(self.rejected(&key, quantity, err));
                }

                line.set_quantity(new_quantity);
                new_quantity
            }
            None => {
                next.push(CartLineItem::new(product.clone(), quantity));
                quantity
            }
        };

        tracing::debug!(
            cart_id = %self.id,
            sku = %key.sku,
            warehouse = %key.warehouse,
            quantity,
            line_quantity,
            "added to cart"
        );

        let event = CartEvent::ItemAdded(ItemAdded {
            cart_id: self.id,
            key: key.clone(),
            quantity_added: quantity,
            line_quantity,
            occurred_at: Utc::now(),
        });
        self.commit(next, event);

        Ok(CartChange::Added {
            key,
            quantity: line_quantity,
        })
    }

    /// Remove the line for `(sku, warehouse)`. Absent keys are a no-op.
    pub fn remove_from_cart(&mut self, sku: &str, warehouse: &str) {
        let Some(idx) = self.position(sku, warehouse) else {
            tracing::debug!(cart_id = %self.id, sku, warehouse, "remove of absent line ignored");
            return;
        };

        self.remove_at(idx);
    }

    pub fn update_quantity(&mut self, sku: &str, warehouse: &str, quantity: i64) -> CartOutcome {
        self.try_update_quantity(sku, warehouse, quantity).into()
    }

    /// Set the quantity of an existing line. Zero or negative removes the line.
    ///
    /// The ceiling is the stock recorded on the snapshot the line was created
    /// with, not the stock of any product passed to later adds.
    pub fn try_update_quantity(
        &mut self,
        sku: &str,
        warehouse: &str,
        quantity: i64,
    ) -> Result<CartChange, CartError> {
        let key = StockKey::new(sku, warehouse);

        let Some(idx) = self.position(sku, warehouse) else {
            return Err(self.rejected(&key, quantity, CartError::NotFound));
        };

        if quantity <= 0 {
            self.remove_at(idx);
            return Ok(CartChange::Removed { key });
        }

        let line = &self.items[idx];
        let stock = line.product().stock();
        if quantity > stock {
            let err = CartError::InsufficientStock { available: stock };
            return Err(self.rejected(&key, quantity, err));
        }

        let from = line.quantity();
        let mut next = self.items.to_vec();
        next[idx].set_quantity(quantity);

        tracing::debug!(
            cart_id = %self.id,
            sku,
            warehouse,
            from,
            to = quantity,
            "cart quantity updated"
        );

        let event = CartEvent::QuantityChanged(QuantityChanged {
            cart_id: self.id,
            key: key.clone(),
            from,
            to: quantity,
            occurred_at: Utc::now(),
        });
        self.commit(next, event);

        Ok(CartChange::Updated { key, quantity })
    }

    pub fn adjust_quantity(&mut self, sku: &str, warehouse: &str, delta: i64) -> CartOutcome {
        self.try_adjust_quantity(sku, warehouse, delta).into()
    }

    /// Step a line's quantity up or down by `delta` (the +/- buttons on the
    /// cart screen). Stepping to zero removes the line.
    pub fn try_adjust_quantity(
        &mut self,
        sku: &str,
        warehouse: &str,
        delta: i64,
    ) -> Result<CartChange, CartError> {
        let Some(current) = self.get_cart_item(sku, warehouse).map(CartLineItem::quantity) else {
            let key = StockKey::new(sku, warehouse);
            return Err(self.rejected(&key, delta, CartError::NotFound));
        };

        self.try_update_quantity(sku, warehouse, current.saturating_add(delta))
    }

    /// Empty the cart. Clearing an empty cart changes nothing.
    pub fn clear_cart(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let removed_lines = self.items.len();
        tracing::debug!(cart_id = %self.id, removed_lines, "cart cleared");

        let event = CartEvent::CartCleared(CartCleared {
            cart_id: self.id,
            removed_lines,
            occurred_at: Utc::now(),
        });
        self.commit(Vec::new(), event);
    }

    fn position(&self, sku: &str, warehouse: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.key().matches(sku, warehouse))
    }

    fn remove_at(&mut self, idx: usize) {
        let mut next = self.items.to_vec();
        let removed = next.remove(idx);
        let key = removed.key().clone();

        tracing::debug!(
            cart_id = %self.id,
            sku = %key.sku,
            warehouse = %key.warehouse,
            "removed from cart"
        );

        let event = CartEvent::ItemRemoved(ItemRemoved {
            cart_id: self.id,
            key,
            occurred_at: Utc::now(),
        });
        self.commit(next, event);
    }

    fn commit(&mut self, next: Vec<CartLineItem>, event: CartEvent) {
        self.items = Arc::from(next);
        self.revision += 1;

        if let Err(err) = self.bus.publish(event) {
            tracing::warn!(cart_id = %self.id, error = ?err, "failed to publish cart event");
        }
    }

    fn rejected(&self, key: &StockKey, quantity: i64, err: CartError) -> CartError {
        tracing::debug!(
            cart_id = %self.id,
            sku = %key.sku,
            warehouse = %key.warehouse,
            quantity,
            reason = %err,
            "cart change rejected"
        );
        err
    }
}

impl AggregateRoot for CartLedger {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.revision
    }
}

impl Default for CartLedger {
    fn default() -> Self {
        Self::new(CartId::new())
    }
}
