use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medisupply_core::CartId;
use medisupply_events::Event;
use medisupply_products::StockKey;

/// Event: ItemAdded (new line, or more units on an existing line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub cart_id: CartId,
    pub key: StockKey,
    pub quantity_added: i64,
    pub line_quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub cart_id: CartId,
    pub key: StockKey,
    pub from: i64,
    pub to: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub cart_id: CartId,
    pub key: StockKey,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub cart_id: CartId,
    pub removed_lines: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantityChanged(QuantityChanged),
    ItemRemoved(ItemRemoved),
    CartCleared(CartCleared),
}

impl CartEvent {
    pub fn cart_id(&self) -> CartId {
        match self {
            CartEvent::ItemAdded(e) => e.cart_id,
            CartEvent::QuantityChanged(e) => e.cart_id,
            CartEvent::ItemRemoved(e) => e.cart_id,
            CartEvent::CartCleared(e) => e.cart_id,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::QuantityChanged(_) => "cart.item.quantity_changed",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::QuantityChanged(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}
