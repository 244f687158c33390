//! Per-store connection descriptors for the personalization service.

use thiserror::Error;

use recsync_core::StoreId;

/// Lifecycle state of a store's connection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Handshake completed; re-index requests may be dispatched.
    Connected,
    /// Account created but the handshake never completed.
    Pending,
    /// Explicitly disconnected.
    Disconnected,
}

/// Connection descriptor for one store's personalization-service account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Account name at the external service.
    pub account: String,
    /// API token used by the transport client.
    pub token: String,
    pub state: ConnectionState,
}

impl Connection {
    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }
}

/// Connection lookup failed.
///
/// Lookup failures are handled at the store-iteration boundary: the store is
/// recorded as failed and its siblings keep processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("connection lookup failed for store {store}: {reason}")]
    Lookup { store: StoreId, reason: String },
}

impl ConnectionError {
    pub fn lookup(store: StoreId, reason: impl Into<String>) -> Self {
        Self::Lookup {
            store,
            reason: reason.into(),
        }
    }
}

/// Per-store connection lookup.
///
/// `Ok(None)` means the store simply has no connection configured — an
/// expected, common case, not an error.
pub trait ConnectionRegistry {
    fn connection(&self, store: StoreId) -> Result<Option<Connection>, ConnectionError>;
}
