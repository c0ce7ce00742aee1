//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus replaces framework-level reactivity: an aggregate publishes an event
//! after each committed change and every subscriber gets its own copy
//! (broadcast semantics). Delivery is in publish order per subscriber.

use std::sync::mpsc::{Receiver, TryRecvError};

/// A subscription to an event stream.
///
/// ## Usage Pattern
///
/// ```ignore
/// let subscription = ledger.subscribe();
/// ledger.add_to_cart(&product, 2);
///
/// while let Ok(event) = subscription.try_recv() {
///     render(event);
/// }
/// ```
///
/// Dropping the subscription unsubscribes; the bus prunes it on the next
/// publish.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain every message that is already queued.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// - **Transport-agnostic**: in-memory channels today, anything else later
/// - **No storage**: the bus distributes, it does not persist
/// - **Broadcast**: each subscriber gets a copy of every published message
///
/// `publish()` can fail; callers decide whether that is fatal. The state
/// change that produced the message has already happened either way.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
