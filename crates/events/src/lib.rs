//! Domain events and in-process fan-out.
//!
//! Aggregates describe committed state changes as [`Event`]s; interested parties
//! (screens, checkout, tests) receive them through an [`EventBus`].

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
