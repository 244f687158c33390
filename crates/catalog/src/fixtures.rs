//! In-memory provider implementations for tests and local wiring.
//!
//! - No IO / no async
//! - Deterministic lookups over plain maps
//!
//! These are first-class modules (not `#[cfg(test)]`) so downstream crates
//! can use them in their own tests and examples.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use recsync_core::{CategoryId, CurrencyCode, EntryId, Money, StoreId};

use crate::context::{ContextGuard, ContextSwitcher};
use crate::entry::CatalogEntry;
use crate::providers::{
    CatalogProvider, MediaError, MediaProvider, PricingError, PricingProvider, StoreRegistry,
    TagProvider, TaxonomyProvider,
};
use crate::store::{ImageConfig, Store};

/// Baseline catalog entry for tests: in stock, directly purchasable, one
/// primary image, no optional descriptive fields.
pub fn entry(id: u64, name: &str) -> CatalogEntry {
    CatalogEntry {
        id: EntryId::new(id),
        name: name.to_string(),
        url_path: format!("{}.html", name.to_ascii_lowercase().replace(' ', "-")),
        created_at: None,
        short_description: None,
        description: None,
        brand: None,
        image_values: BTreeMap::from([("image".to_string(), "/p/primary.jpg".to_string())]),
        in_stock: true,
        configurable: false,
        category_ids: Vec::new(),
    }
}

/// Baseline store for tests: USD-only, uncached 600px images.
pub fn store(id: u64, code: &str) -> Store {
    Store {
        id: StoreId::new(id),
        code: code.to_string(),
        base_url: format!("https://{code}.example.com"),
        base_currency: CurrencyCode::new("USD"),
        currencies: vec![CurrencyCode::new("USD")],
        multi_currency: false,
        variant_pricing: false,
        image: ImageConfig {
            attribute: "image".to_string(),
            cached: false,
            width: 600,
            height: None,
        },
    }
}

/// Catalog provider over an in-memory map.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entries: BTreeMap<EntryId, CatalogEntry>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, entry: CatalogEntry) -> Self {
        self.entries.insert(entry.id, entry);
        self
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn entry(&self, id: EntryId) -> Option<CatalogEntry> {
        self.entries.get(&id).cloned()
    }
}

/// Store registry over an in-memory list.
#[derive(Debug, Default)]
pub struct InMemoryStores {
    stores: Vec<Store>,
    default: Option<StoreId>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(mut self, store: Store) -> Self {
        self.stores.push(store);
        self
    }

    pub fn with_default(mut self, id: StoreId) -> Self {
        self.default = Some(id);
        self
    }
}

impl StoreRegistry for InMemoryStores {
    fn store(&self, id: StoreId) -> Option<Store> {
        self.stores.iter().find(|s| s.id == id).cloned()
    }

    fn all_stores(&self) -> Vec<Store> {
        self.stores.clone()
    }

    fn default_store(&self) -> Option<Store> {
        let id = self.default?;
        self.store(id)
    }
}

/// Pricing engine over per-entry base prices and an exchange-rate table.
///
/// Prices are configured in the base currency; other currencies convert via
/// `rates`. A currency without a rate yields [`PricingError::Unavailable`],
/// which is exactly the "missing exchange rate" case of the real engine.
#[derive(Debug)]
pub struct RatePricing {
    base_currency: CurrencyCode,
    /// entry -> (final price, list price), both in the base currency.
    base_prices: HashMap<EntryId, (Decimal, Decimal)>,
    rates: HashMap<CurrencyCode, Decimal>,
}

impl RatePricing {
    pub fn new(base_currency: CurrencyCode) -> Self {
        Self {
            base_currency,
            base_prices: HashMap::new(),
            rates: HashMap::new(),
        }
    }

    pub fn with_prices(mut self, entry: EntryId, final_price: Decimal, list_price: Decimal) -> Self {
        self.base_prices.insert(entry, (final_price, list_price));
        self
    }

    pub fn with_rate(mut self, currency: CurrencyCode, rate: Decimal) -> Self {
        self.rates.insert(currency, rate);
        self
    }

    fn convert(&self, amount: Decimal, currency: &CurrencyCode) -> Result<Money, PricingError> {
        if *currency == self.base_currency {
            return Ok(Money::new(amount, currency.clone()));
        }
        let rate = self.rates.get(currency).ok_or_else(|| {
            PricingError::unavailable(currency.clone(), "no exchange rate configured")
        })?;
        Ok(Money::new(amount * rate, currency.clone()))
    }

    fn prices_for(&self, entry: EntryId, currency: &CurrencyCode) -> Result<(Decimal, Decimal), PricingError> {
        self.base_prices.get(&entry).copied().ok_or_else(|| {
            PricingError::unavailable(currency.clone(), format!("no price configured for entry {entry}"))
        })
    }
}

impl PricingProvider for RatePricing {
    fn final_price_incl_tax(
        &self,
        entry: &CatalogEntry,
        currency: &CurrencyCode,
    ) -> Result<Money, PricingError> {
        let (final_price, _) = self.prices_for(entry.id, currency)?;
        self.convert(final_price, currency)
    }

    fn list_price_incl_tax(
        &self,
        entry: &CatalogEntry,
        currency: &CurrencyCode,
    ) -> Result<Money, PricingError> {
        let (_, list_price) = self.prices_for(entry.id, currency)?;
        self.convert(list_price, currency)
    }
}

/// Context switcher tracking the active store in a cell.
///
/// The guard restores whatever was active before `enter`, so nesting and
/// failure paths can be asserted on in tests.
#[derive(Debug, Default)]
pub struct RecordingContext {
    current: Cell<Option<StoreId>>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<StoreId> {
        self.current.get()
    }
}

impl ContextSwitcher for RecordingContext {
    fn enter(&self, store: StoreId) -> ContextGuard<'_> {
        let previous = self.current.replace(Some(store));
        ContextGuard::new(move || self.current.set(previous))
    }
}

/// Media pipeline producing deterministic URLs under a fixed base.
#[derive(Debug)]
pub struct StaticMedia {
    base_url: String,
}

impl StaticMedia {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl MediaProvider for StaticMedia {
    fn media_url(&self, image_path: &str) -> Result<String, MediaError> {
        Ok(format!("{}/media/catalog/product{image_path}", self.base_url))
    }

    fn resized_url(
        &self,
        entry: &CatalogEntry,
        attribute: &str,
        width: u32,
        height: Option<u32>,
    ) -> Result<String, MediaError> {
        let path = entry
            .image_value(attribute)
            .ok_or_else(|| MediaError::Unavailable(format!("no {attribute} value")))?;
        let size = match height {
            Some(h) => format!("{width}x{h}"),
            None => width.to_string(),
        };
        Ok(format!("{}/media/cache/{size}{path}", self.base_url))
    }
}

/// Media pipeline that always fails, for error-path tests.
#[derive(Debug, Default)]
pub struct FailingMedia;

impl MediaProvider for FailingMedia {
    fn media_url(&self, _image_path: &str) -> Result<String, MediaError> {
        Err(MediaError::Unavailable("media storage offline".to_string()))
    }

    fn resized_url(
        &self,
        _entry: &CatalogEntry,
        _attribute: &str,
        _width: u32,
        _height: Option<u32>,
    ) -> Result<String, MediaError> {
        Err(MediaError::Unavailable("media storage offline".to_string()))
    }
}

/// Taxonomy over a static category-path table.
#[derive(Debug, Default)]
pub struct StaticTaxonomy {
    paths: HashMap<CategoryId, String>,
}

impl StaticTaxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, category: CategoryId, path: impl Into<String>) -> Self {
        self.paths.insert(category, path.into());
        self
    }
}

impl TaxonomyProvider for StaticTaxonomy {
    fn category_path(&self, category: CategoryId) -> Option<String> {
        self.paths.get(&category).cloned()
    }
}

/// Tagging subsystem over a static table.
#[derive(Debug, Default)]
pub struct StaticTags {
    tags: HashMap<(EntryId, StoreId), Vec<String>>,
}

impl StaticTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, entry: EntryId, store: StoreId, tags: Vec<String>) -> Self {
        self.tags.insert((entry, store), tags);
        self
    }
}

impl TagProvider for StaticTags {
    fn approved_tags(&self, entry: EntryId, store: StoreId) -> Vec<String> {
        self.tags.get(&(entry, store)).cloned().unwrap_or_default()
    }
}
