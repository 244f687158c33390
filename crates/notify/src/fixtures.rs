//! In-memory connection registry and transport client for tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use recsync_core::StoreId;

use crate::client::{ExportClient, ReindexRequest, TransportError};
use crate::connection::{Connection, ConnectionError, ConnectionRegistry};

/// Connection registry over a static table, with per-store failure
/// injection for the lookup-throws case.
#[derive(Debug, Default)]
pub struct InMemoryConnections {
    connections: HashMap<StoreId, Connection>,
    failing: HashSet<StoreId>,
}

impl InMemoryConnections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connection(mut self, store: StoreId, connection: Connection) -> Self {
        self.connections.insert(store, connection);
        self
    }

    /// Make lookups for this store fail.
    pub fn with_failing(mut self, store: StoreId) -> Self {
        self.failing.insert(store);
        self
    }
}

impl ConnectionRegistry for InMemoryConnections {
    fn connection(&self, store: StoreId) -> Result<Option<Connection>, ConnectionError> {
        if self.failing.contains(&store) {
            return Err(ConnectionError::lookup(store, "configuration unreadable"));
        }
        Ok(self.connections.get(&store).cloned())
    }
}

/// Transport client recording every dispatched request.
#[derive(Debug, Default)]
pub struct RecordingClient {
    requests: RefCell<Vec<ReindexRequest>>,
    failing_accounts: HashSet<String>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make dispatches for this account fail.
    pub fn failing_for(mut self, account: &str) -> Self {
        self.failing_accounts.insert(account.to_string());
        self
    }

    pub fn requests(&self) -> Vec<ReindexRequest> {
        self.requests.borrow().clone()
    }
}

impl ExportClient for RecordingClient {
    fn reindex(&self, request: &ReindexRequest) -> Result<(), TransportError> {
        if self.failing_accounts.contains(&request.connection.account) {
            return Err(TransportError::Failed(format!(
                "service unreachable for account {}",
                request.connection.account
            )));
        }
        self.requests.borrow_mut().push(request.clone());
        Ok(())
    }
}
