//! Integration events emitted by the commerce platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use recsync_core::{EntryId, StoreId};

/// A domain-agnostic integration event.
///
/// Events are immutable facts, versioned for schema evolution.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "catalog.entry.saved").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Store scope carried by a catalog save.
///
/// The platform encodes "saved for all stores" as store id `0` on the wire;
/// any other id names one specific store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreScope {
    AllStores,
    Store(StoreId),
}

impl StoreScope {
    /// Decode the platform's raw scope id (`0` = all stores).
    pub fn from_raw(raw: u64) -> Self {
        if raw == 0 {
            Self::AllStores
        } else {
            Self::Store(StoreId::new(raw))
        }
    }
}

impl From<u64> for StoreScope {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

/// Event: a catalog entry was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySaved {
    pub event_id: Uuid,
    pub entry_id: EntryId,
    pub scope: StoreScope,
    pub occurred_at: DateTime<Utc>,
}

impl EntrySaved {
    pub fn new(entry_id: EntryId, scope: StoreScope, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            entry_id,
            scope,
            occurred_at,
        }
    }
}

impl Event for EntrySaved {
    fn event_type(&self) -> &'static str {
        "catalog.entry.saved"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
