//! Domain error model.

use thiserror::Error;

use crate::id::{EntryId, StoreId};

/// Result type used across the export domain layer.
pub type ExportResult<T> = Result<T, ExportError>;

/// Domain-level export error.
///
/// Keep this focused on structural/contract failures. Optional facets that
/// cannot be resolved (missing image, no tagging subsystem, no exchange rate
/// for one currency) are modeled as absence/skip outcomes in their own
/// components, never as variants here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The catalog entry to export does not exist.
    #[error("catalog entry not found: {0}")]
    EntryNotFound(EntryId),

    /// The target store does not exist in the store registry.
    #[error("store not found: {0}")]
    StoreNotFound(StoreId),

    /// No target store was given and no default store is configured.
    #[error("no default store configured")]
    NoDefaultStore,

    /// Base-currency pricing could not be resolved. Unlike a variation
    /// currency, the base currency has no skip semantics: the record's
    /// required price fields cannot be built without it.
    #[error("base currency pricing unavailable: {0}")]
    PricingUnavailable(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl ExportError {
    pub fn entry_not_found(id: EntryId) -> Self {
        Self::EntryNotFound(id)
    }

    pub fn store_not_found(id: StoreId) -> Self {
        Self::StoreNotFound(id)
    }

    pub fn pricing_unavailable(msg: impl Into<String>) -> Self {
        Self::PricingUnavailable(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
