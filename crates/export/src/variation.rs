//! Price variation builder: one priced variant per non-base currency.

use recsync_catalog::{CatalogEntry, PricingError, PricingProvider, Store};
use recsync_core::CurrencyCode;

use crate::pricing::resolve_prices;
use crate::product::PriceVariation;

/// Outcome of building one variation.
///
/// Skips are data, not errors: a currency without a resolvable rate is
/// omitted while the remaining variations still count as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariationOutcome {
    Built(PriceVariation),
    Skipped {
        currency: CurrencyCode,
        reason: PricingError,
    },
}

impl VariationOutcome {
    pub fn into_built(self) -> Option<PriceVariation> {
        match self {
            VariationOutcome::Built(variation) => Some(variation),
            VariationOutcome::Skipped { .. } => None,
        }
    }
}

/// Build one variation per configured non-base currency, preserving
/// configuration order. The base currency is skipped; currencies whose
/// prices cannot be resolved yield [`VariationOutcome::Skipped`].
pub fn build_variations(
    entry: &CatalogEntry,
    store: &Store,
    pricing: &dyn PricingProvider,
) -> Vec<VariationOutcome> {
    store
        .non_base_currencies()
        .map(|currency| match resolve_prices(entry, currency, pricing) {
            Ok(quote) => VariationOutcome::Built(PriceVariation {
                variation_id: currency.clone(),
                price: quote.price,
                list_price: quote.list_price,
                availability: entry.availability(),
                currency: currency.clone(),
            }),
            Err(reason) => VariationOutcome::Skipped {
                currency: currency.clone(),
                reason,
            },
        })
        .collect()
}
