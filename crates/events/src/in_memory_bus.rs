//! In-memory event bus.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InMemoryBusError {
    /// Publish failed due to internal lock poisoning.
    #[error("event bus lock poisoned")]
    Poisoned,
}

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Fan-out in subscription order
/// - Dropped subscribers are pruned lazily on publish
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions seen at the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|subs| subs.len()).unwrap_or(0)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| InMemoryBusError::Poisoned)?;

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(message.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still hands out a subscription; it just never fires.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_receives_each_message_in_order() {
        let bus = InMemoryEventBus::<u32>::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish(1).unwrap();
        bus.publish(2).unwrap();

        assert_eq!(first.drain(), vec![1, 2]);
        assert_eq!(second.drain(), vec![1, 2]);
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_publish() {
        let bus = InMemoryEventBus::<u32>::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(7).unwrap();

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), 7);
    }

    #[test]
    fn publish_without_subscribers_is_ok() {
        let bus = InMemoryEventBus::<&'static str>::new();
        assert!(bus.publish("nobody listening").is_ok());
    }
}
