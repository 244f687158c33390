//! `recsync-events` — integration events and their distribution.
//!
//! Carries the catalog-save signal from the commerce platform to the change
//! notifier. The bus is transport-agnostic; the in-memory implementation
//! serves tests and local wiring.

pub mod bus;
pub mod event;

pub use bus::{EventBus, InMemoryBusError, InMemoryEventBus, Subscription};
pub use event::{EntrySaved, Event, StoreScope};
