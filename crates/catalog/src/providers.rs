//! Provider traits: the seams between the export core and the platform.
//!
//! Each trait is a narrow, read-only query interface. Implementations live
//! outside this workspace (the commerce platform); `fixtures` provides
//! in-memory ones for tests and local wiring.

use thiserror::Error;

use recsync_core::{CategoryId, CurrencyCode, EntryId, Money, StoreId};

use crate::entry::CatalogEntry;
use crate::store::Store;

/// Looks up catalog entries by id.
pub trait CatalogProvider {
    fn entry(&self, id: EntryId) -> Option<CatalogEntry>;
}

/// Enumerates stores and their configuration.
pub trait StoreRegistry {
    fn store(&self, id: StoreId) -> Option<Store>;

    /// All configured stores, in registry order.
    fn all_stores(&self) -> Vec<Store>;

    /// The caller-resolved "current" store, used when an export is requested
    /// without an explicit target store.
    fn default_store(&self) -> Option<Store>;
}

/// Pricing failed for the requested currency.
///
/// This is a recoverable condition: callers skip the affected facet (e.g.
/// omit one price variation) rather than aborting the export.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// No price can be derived for the currency, typically because no
    /// exchange rate is configured.
    #[error("no price available in {currency}: {reason}")]
    Unavailable { currency: CurrencyCode, reason: String },
}

impl PricingError {
    pub fn unavailable(currency: CurrencyCode, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            currency,
            reason: reason.into(),
        }
    }
}

/// Final and list price of one entry in one currency, both tax-inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// Price including active discounts/promotions and taxes.
    pub price: Money,
    /// Price without discounts but including taxes.
    pub list_price: Money,
}

/// The pricing engine: gross prices per entry and currency.
pub trait PricingProvider {
    /// Final price including discounts and taxes.
    fn final_price_incl_tax(
        &self,
        entry: &CatalogEntry,
        currency: &CurrencyCode,
    ) -> Result<Money, PricingError>;

    /// List price without discounts but including taxes.
    fn list_price_incl_tax(
        &self,
        entry: &CatalogEntry,
        currency: &CurrencyCode,
    ) -> Result<Money, PricingError>;
}

/// Media pipeline failure while resolving an image URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("media url unavailable: {0}")]
    Unavailable(String),
}

/// The image transformation pipeline.
///
/// URLs are resolved under whatever store context is currently active; the
/// media resolver enters the target store's context before calling in.
pub trait MediaProvider {
    /// Absolute URL of the raw (uncached) media file.
    fn media_url(&self, image_path: &str) -> Result<String, MediaError>;

    /// Absolute URL of a cached, resized rendition of an entry's image
    /// attribute. Width-only resize when `height` is `None`.
    fn resized_url(
        &self,
        entry: &CatalogEntry,
        attribute: &str,
        width: u32,
        height: Option<u32>,
    ) -> Result<String, MediaError>;
}

/// The taxonomy tree: full category paths.
pub trait TaxonomyProvider {
    /// Root-to-leaf, slash-separated path for a category (e.g.
    /// `/Electronics/Computers`). `None` or an empty string means the
    /// category yields no usable path (disabled or root-only).
    fn category_path(&self, category: CategoryId) -> Option<String>;
}

/// The tagging subsystem: approved, store-visible free-form tags.
///
/// Presence of the subsystem is modeled by which implementation is wired in,
/// not by a module-enabled flag: wire [`NoTagging`] when the subsystem is
/// absent.
pub trait TagProvider {
    /// Approved tags for an entry, visible in the given store, in system
    /// order.
    fn approved_tags(&self, entry: EntryId, store: StoreId) -> Vec<String>;
}

/// Tagging subsystem unavailable/disabled: no free-form tags, not an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTagging;

impl TagProvider for NoTagging {
    fn approved_tags(&self, _entry: EntryId, _store: StoreId) -> Vec<String> {
        Vec::new()
    }
}
