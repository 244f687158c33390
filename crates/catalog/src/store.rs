//! Read-only view of a store (sales channel) configuration.

use recsync_core::{CurrencyCode, StoreId};

/// Image display configuration of a store.
///
/// `attribute` names the image attribute the store exports. When `cached` is
/// on, image URLs are resolved through the resize pipeline: width-only when
/// `height` is unset, width+height otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    pub attribute: String,
    pub cached: bool,
    pub width: u32,
    pub height: Option<u32>,
}

/// Snapshot of a store's configuration, as handed out by the store registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub id: StoreId,
    /// Store code, used as the URL discriminator for stores sharing a domain.
    pub code: String,
    /// Absolute base URL of the storefront, without a trailing slash.
    pub base_url: String,
    pub base_currency: CurrencyCode,
    /// Configured currencies, base currency included.
    pub currencies: Vec<CurrencyCode>,
    pub multi_currency: bool,
    /// Whether per-currency priced variants are generated for this store
    /// (the multi-currency "price variation" method).
    pub variant_pricing: bool,
    pub image: ImageConfig,
}

impl Store {
    /// Configured currencies other than the base currency, in configuration
    /// order.
    pub fn non_base_currencies(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.currencies
            .iter()
            .filter(|c| **c != self.base_currency)
    }
}
