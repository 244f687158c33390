//! Pricing resolver: final + list price for one entry in one currency.

use recsync_catalog::{CatalogEntry, PriceQuote, PricingError, PricingProvider};
use recsync_core::CurrencyCode;

/// Resolve both prices of an entry under a currency context.
///
/// The final price includes active discounts/promotions; the list price does
/// not. Both are tax-inclusive. [`PricingError::Unavailable`] (e.g. a
/// missing exchange rate) is recoverable: callers skip the affected facet
/// instead of aborting the export.
pub fn resolve_prices(
    entry: &CatalogEntry,
    currency: &CurrencyCode,
    pricing: &dyn PricingProvider,
) -> Result<PriceQuote, PricingError> {
    let price = pricing.final_price_incl_tax(entry, currency)?;
    let list_price = pricing.list_price_incl_tax(entry, currency)?;
    Ok(PriceQuote { price, list_price })
}
