//! Product exporter: assembles the normalized record for one
//! (catalog entry, store) pair.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use recsync_catalog::{
    CatalogEntry, CatalogProvider, ContextSwitcher, MediaProvider, PricingProvider, Store,
    StoreRegistry, TagProvider, TaxonomyProvider,
};
use recsync_core::{EntryId, ExportError, ExportResult, StoreId};

use crate::media::MediaResolver;
use crate::pricing::resolve_prices;
use crate::product::{Product, ProductTags};
use crate::tags::aggregate_tags;
use crate::taxonomy::flatten_categories;
use crate::variation::{VariationOutcome, build_variations};

/// Timestamp format the catalog stores for `created_at`.
const CATALOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pure, synchronous assembler of [`Product`] records.
///
/// Composes the injected provider traits; performs no network or
/// persistence side effects of its own. Each build is independent — no
/// state is shared between builds.
pub struct ProductExporter<'a> {
    catalog: &'a dyn CatalogProvider,
    stores: &'a dyn StoreRegistry,
    pricing: &'a dyn PricingProvider,
    media: &'a dyn MediaProvider,
    taxonomy: &'a dyn TaxonomyProvider,
    tags: &'a dyn TagProvider,
    context: &'a dyn ContextSwitcher,
}

impl<'a> ProductExporter<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        catalog: &'a dyn CatalogProvider,
        stores: &'a dyn StoreRegistry,
        pricing: &'a dyn PricingProvider,
        media: &'a dyn MediaProvider,
        taxonomy: &'a dyn TaxonomyProvider,
        tags: &'a dyn TagProvider,
        context: &'a dyn ContextSwitcher,
    ) -> Self {
        Self {
            catalog,
            stores,
            pricing,
            media,
            taxonomy,
            tags,
            context,
        }
    }

    /// Build the normalized record for an entry in a store.
    ///
    /// With no `store_id`, the registry's default ("current") store is used.
    /// Unknown entry/store ids are contract violations and propagate;
    /// unavailable optional facets (image, tags, single variation
    /// currencies) degrade to absence.
    pub fn build_product(
        &self,
        entry_id: EntryId,
        store_id: Option<StoreId>,
    ) -> ExportResult<Product> {
        let entry = self
            .catalog
            .entry(entry_id)
            .ok_or(ExportError::EntryNotFound(entry_id))?;
        let store = match store_id {
            Some(id) => self
                .stores
                .store(id)
                .ok_or(ExportError::StoreNotFound(id))?,
            None => self
                .stores
                .default_store()
                .ok_or(ExportError::NoDefaultStore)?,
        };
        self.build(&entry, &store)
    }

    fn build(&self, entry: &CatalogEntry, store: &Store) -> ExportResult<Product> {
        let base_currency = store.base_currency.clone();

        let quote = resolve_prices(entry, &base_currency, self.pricing)
            .map_err(|e| ExportError::pricing_unavailable(e.to_string()))?;

        let image_url = MediaResolver::new(self.media, self.context).resolve(entry, store);

        let mut tags = ProductTags::default();
        let aggregated = aggregate_tags(entry, store, self.tags);
        if !aggregated.is_empty() {
            tags.tag1 = aggregated;
        }

        let mut price_variation_id = None;
        let mut price_variations = Vec::new();
        if store.multi_currency {
            // The base currency code doubles as the active variation id,
            // even when variant pricing is off and the list stays empty.
            price_variation_id = Some(base_currency.clone());
            if store.variant_pricing {
                for outcome in build_variations(entry, store, self.pricing) {
                    match outcome {
                        VariationOutcome::Built(variation) => price_variations.push(variation),
                        VariationOutcome::Skipped { currency, reason } => {
                            tracing::debug!(
                                entry_id = %entry.id,
                                store_id = %store.id,
                                %currency,
                                reason = %reason,
                                "price variation omitted"
                            );
                        }
                    }
                }
            }
        }

        Ok(Product {
            url: build_url(entry, store),
            product_id: entry.id.to_string(),
            name: entry.name.clone(),
            image_url,
            price: quote.price,
            list_price: quote.list_price,
            currency: base_currency,
            price_variation_id,
            availability: entry.availability(),
            tags,
            categories: flatten_categories(entry, self.taxonomy),
            short_description: entry.short_description.clone(),
            description: entry.description.clone(),
            brand: entry.brand.clone(),
            date_published: entry
                .created_at
                .as_deref()
                .and_then(parse_date_published),
            price_variations,
        })
    }
}

/// Absolute, store-scoped canonical URL of the product page.
///
/// Carries the store code as a `___store` query parameter so the external
/// crawler can tell apart stores sharing one domain.
fn build_url(entry: &CatalogEntry, store: &Store) -> String {
    format!(
        "{}/{}?___store={}",
        store.base_url.trim_end_matches('/'),
        entry.url_path.trim_start_matches('/'),
        store.code
    )
}

/// Parse the catalog's creation timestamp into a publication date.
///
/// Accepts RFC 3339 and the catalog's own `YYYY-MM-DD HH:MM:SS` format;
/// anything else leaves the publication date absent.
fn parse_date_published(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, CATALOG_TIMESTAMP_FORMAT) {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use recsync_catalog::fixtures::{
        InMemoryCatalog, InMemoryStores, RatePricing, RecordingContext, StaticMedia, StaticTags,
        StaticTaxonomy, entry, store,
    };
    use recsync_catalog::{NoTagging, TagProvider};
    use recsync_core::{Availability, CategoryId, CurrencyCode};
    use rust_decimal::Decimal;

    struct Fixture {
        catalog: InMemoryCatalog,
        stores: InMemoryStores,
        pricing: RatePricing,
        media: StaticMedia,
        taxonomy: StaticTaxonomy,
        tags: StaticTags,
        context: RecordingContext,
    }

    impl Fixture {
        fn exporter(&self) -> ProductExporter<'_> {
            ProductExporter::new(
                &self.catalog,
                &self.stores,
                &self.pricing,
                &self.media,
                &self.taxonomy,
                &self.tags,
                &self.context,
            )
        }
    }

    fn fixture_with(entry: CatalogEntry, store: Store) -> Fixture {
        let entry_id = entry.id;
        Fixture {
            catalog: InMemoryCatalog::new().with_entry(entry),
            stores: InMemoryStores::new().with_store(store),
            pricing: RatePricing::new(CurrencyCode::new("USD"))
                .with_prices(entry_id, Decimal::new(900, 2), Decimal::new(1000, 2))
                .with_rate(CurrencyCode::new("EUR"), Decimal::new(90, 2)),
            media: StaticMedia::new("https://default.example.com"),
            taxonomy: StaticTaxonomy::new(),
            tags: StaticTags::new(),
            context: RecordingContext::new(),
        }
    }

    fn multi_currency_store(variant_pricing: bool) -> Store {
        let mut store = store(1, "default");
        store.currencies = vec![
            CurrencyCode::new("USD"),
            CurrencyCode::new("EUR"),
            CurrencyCode::new("GBP"),
        ];
        store.multi_currency = true;
        store.variant_pricing = variant_pricing;
        store
    }

    #[test]
    fn builds_required_fields_from_entry_and_store() {
        let fixture = fixture_with(entry(1, "Widget"), store(1, "default"));
        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();

        assert_eq!(
            product.url,
            "https://default.example.com/widget.html?___store=default"
        );
        assert_eq!(product.product_id, "1");
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price.amount(), Decimal::new(900, 2));
        assert_eq!(product.list_price.amount(), Decimal::new(1000, 2));
        assert_eq!(product.currency.as_str(), "USD");
        assert_eq!(product.availability, Availability::InStock);
        assert_eq!(
            product.image_url.as_deref(),
            Some("https://default.example.com/media/catalog/product/p/primary.jpg")
        );
    }

    #[test]
    fn unknown_entry_is_a_contract_violation() {
        let fixture = fixture_with(entry(1, "Widget"), store(1, "default"));
        let err = fixture
            .exporter()
            .build_product(EntryId::new(99), Some(StoreId::new(1)))
            .unwrap_err();
        assert_eq!(err, ExportError::EntryNotFound(EntryId::new(99)));
    }

    #[test]
    fn unknown_store_is_a_contract_violation() {
        let fixture = fixture_with(entry(1, "Widget"), store(1, "default"));
        let err = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(99)))
            .unwrap_err();
        assert_eq!(err, ExportError::StoreNotFound(StoreId::new(99)));
    }

    #[test]
    fn missing_store_id_falls_back_to_default_store() {
        let mut fixture = fixture_with(entry(1, "Widget"), store(1, "default"));
        fixture.stores = InMemoryStores::new()
            .with_store(store(1, "default"))
            .with_default(StoreId::new(1));

        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), None)
            .unwrap();
        assert!(product.url.contains("___store=default"));
    }

    #[test]
    fn missing_store_id_without_default_store_fails() {
        let fixture = fixture_with(entry(1, "Widget"), store(1, "default"));
        let err = fixture
            .exporter()
            .build_product(EntryId::new(1), None)
            .unwrap_err();
        assert_eq!(err, ExportError::NoDefaultStore);
    }

    #[test]
    fn tag_slots_always_exist_and_tag1_holds_aggregated_tags() {
        let mut fixture = fixture_with(entry(1, "Widget"), store(1, "default"));
        fixture.tags = StaticTags::new().with_tags(
            EntryId::new(1),
            StoreId::new(1),
            vec!["winter".to_string()],
        );

        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        assert_eq!(product.tags.tag1, vec!["winter", "add-to-cart"]);
        assert!(product.tags.tag2.is_empty());
        assert!(product.tags.tag3.is_empty());
    }

    #[test]
    fn configurable_entry_without_tags_leaves_tag1_empty() {
        let mut configurable = entry(1, "Widget");
        configurable.configurable = true;
        let fixture = fixture_with(configurable, store(1, "default"));

        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        assert!(product.tags.tag1.is_empty());
        assert!(product.tags.tag2.is_empty());
        assert!(product.tags.tag3.is_empty());
    }

    #[test]
    fn categories_are_flattened_paths() {
        let mut with_categories = entry(1, "Widget");
        with_categories.category_ids = vec![CategoryId::new(10), CategoryId::new(20)];
        let mut fixture = fixture_with(with_categories, store(1, "default"));
        fixture.taxonomy = StaticTaxonomy::new()
            .with_path(CategoryId::new(10), "/Electronics/Computers")
            .with_path(CategoryId::new(20), "");

        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        assert_eq!(product.categories, vec!["/Electronics/Computers"]);
    }

    #[test]
    fn optional_descriptive_fields_copied_only_when_present() {
        let mut described = entry(1, "Widget");
        described.short_description = Some("Great shoe".to_string());
        described.brand = Some("Acme".to_string());
        let fixture = fixture_with(described, store(1, "default"));

        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        assert_eq!(product.short_description.as_deref(), Some("Great shoe"));
        assert_eq!(product.description, None);
        assert_eq!(product.brand.as_deref(), Some("Acme"));
        assert_eq!(product.full_description(), "Great shoe");
    }

    #[test]
    fn date_published_parses_catalog_timestamp() {
        let mut dated = entry(1, "Widget");
        dated.created_at = Some("2014-03-17 09:15:00".to_string());
        let fixture = fixture_with(dated, store(1, "default"));

        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        assert_eq!(
            product.date_published,
            NaiveDate::from_ymd_opt(2014, 3, 17)
        );
    }

    #[test]
    fn unparsable_created_at_leaves_date_published_absent() {
        let mut dated = entry(1, "Widget");
        dated.created_at = Some("last tuesday".to_string());
        let fixture = fixture_with(dated, store(1, "default"));

        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        assert_eq!(product.date_published, None);
    }

    #[test]
    fn single_currency_store_has_no_variation_id_and_no_variations() {
        let fixture = fixture_with(entry(1, "Widget"), store(1, "default"));
        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        assert_eq!(product.price_variation_id, None);
        assert!(product.price_variations.is_empty());
    }

    #[test]
    fn multi_currency_without_variant_mode_sets_variation_id_with_empty_list() {
        let fixture = fixture_with(entry(1, "Widget"), multi_currency_store(false));
        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        assert_eq!(
            product.price_variation_id,
            Some(CurrencyCode::new("USD"))
        );
        assert!(product.price_variations.is_empty());
    }

    #[test]
    fn missing_rate_omits_one_variation_without_failing_the_build() {
        // USD(base), EUR, GBP configured; only EUR has a rate.
        let fixture = fixture_with(entry(1, "Widget"), multi_currency_store(true));
        let product = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();

        assert_eq!(product.price_variations.len(), 1);
        assert_eq!(product.price_variations[0].currency.as_str(), "EUR");
        assert_eq!(
            product.price_variations[0].price.amount(),
            Decimal::new(810, 2)
        );
    }

    #[test]
    fn base_currency_pricing_failure_fails_the_build() {
        let mut fixture = fixture_with(entry(1, "Widget"), store(1, "default"));
        fixture.pricing = RatePricing::new(CurrencyCode::new("USD"));

        let err = fixture
            .exporter()
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap_err();
        assert!(matches!(err, ExportError::PricingUnavailable(_)));
    }

    #[test]
    fn builds_are_independent_between_calls() {
        let fixture = fixture_with(entry(1, "Widget"), store(1, "default"));
        let exporter = fixture.exporter();
        let first = exporter
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        let second = exporter
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn works_with_unavailable_tagging_subsystem() {
        let fixture = fixture_with(entry(1, "Widget"), store(1, "default"));
        let no_tagging = NoTagging;
        let tags: &dyn TagProvider = &no_tagging;
        let exporter = ProductExporter::new(
            &fixture.catalog,
            &fixture.stores,
            &fixture.pricing,
            &fixture.media,
            &fixture.taxonomy,
            tags,
            &fixture.context,
        );

        let product = exporter
            .build_product(EntryId::new(1), Some(StoreId::new(1)))
            .unwrap();
        // Only the capability tag remains.
        assert_eq!(product.tags.tag1, vec!["add-to-cart"]);
    }

    #[test]
    fn parse_date_published_accepts_rfc3339() {
        assert_eq!(
            parse_date_published("2014-03-17T09:15:00+02:00"),
            NaiveDate::from_ymd_opt(2014, 3, 17)
        );
        assert_eq!(
            parse_date_published("2014-03-17"),
            NaiveDate::from_ymd_opt(2014, 3, 17)
        );
        assert_eq!(parse_date_published(""), None);
    }
}
