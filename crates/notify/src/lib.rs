//! `recsync-notify` — change notification to the personalization service.
//!
//! Reacts to catalog-entry-saved events: resolves the affected stores,
//! rebuilds the normalized product record per store, and dispatches a
//! re-index request for every store with an active connection. Best-effort:
//! the triggering save never fails because of notifier errors.

pub mod client;
pub mod connection;
pub mod fixtures;
pub mod notifier;

pub use client::{ExportClient, ReindexRequest, TransportError};
pub use connection::{Connection, ConnectionError, ConnectionRegistry, ConnectionState};
pub use notifier::{ChangeNotifier, NotifySummary, SkipReason, StoreOutcome};
