//! Transport contract towards the personalization service.

use thiserror::Error;

use recsync_export::Product;

use crate::connection::Connection;

/// A request to refresh the external service's record of one product for
/// one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReindexRequest {
    pub product: Product,
    pub connection: Connection,
}

/// The transport call failed. Retry/timeout semantics live in the client
/// implementation, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("re-index dispatch failed: {0}")]
    Failed(String),
}

/// Performs the actual network re-index call.
///
/// Implementations wrap the external service's SDK/HTTP API; this core only
/// needs a void-or-throws contract.
pub trait ExportClient {
    fn reindex(&self, request: &ReindexRequest) -> Result<(), TransportError>;
}
