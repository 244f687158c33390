//! The normalized product record sent to the personalization service.

use chrono::NaiveDate;
use serde::Serialize;

use recsync_core::{Availability, CurrencyCode, Money};

/// The three fixed tag slots of a product record.
///
/// All three slots always exist (possibly empty); only `tag1` is populated
/// by the default export logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductTags {
    pub tag1: Vec<String>,
    pub tag2: Vec<String>,
    pub tag3: Vec<String>,
}

/// One priced variant of a product in a non-base currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceVariation {
    pub variation_id: CurrencyCode,
    pub price: Money,
    pub list_price: Money,
    pub availability: Availability,
    pub currency: CurrencyCode,
}

/// Normalized, platform-independent product representation.
///
/// Built fresh per (catalog entry, store) pair, immutable once built,
/// value-equal by all fields. Lifecycle is build → serialize/transmit →
/// discard; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Absolute, store-scoped canonical URL of the product page.
    pub url: String,
    pub product_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Final price including discounts, tax-inclusive, in the store's base
    /// currency.
    pub price: Money,
    /// List price without discounts, tax-inclusive.
    pub list_price: Money,
    pub currency: CurrencyCode,
    /// Set iff the store is multi-currency; equals the base currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_variation_id: Option<CurrencyCode>,
    pub availability: Availability,
    pub tags: ProductTags,
    /// Full category-path strings, e.g. `/Electronics/Computers`.
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<NaiveDate>,
    pub price_variations: Vec<PriceVariation>,
}

impl Product {
    /// Short and long descriptions concatenated with a space, omitting
    /// absent parts; empty string when both are absent.
    pub fn full_description(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(2);
        if let Some(short) = self.short_description.as_deref() {
            if !short.is_empty() {
                parts.push(short);
            }
        }
        if let Some(long) = self.description.as_deref() {
            if !long.is_empty() {
                parts.push(long);
            }
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn base_product() -> Product {
        let usd = CurrencyCode::new("USD");
        Product {
            url: "https://shop.example.com/widget.html?___store=default".to_string(),
            product_id: "1".to_string(),
            name: "Widget".to_string(),
            image_url: None,
            price: Money::new(Decimal::new(900, 2), usd.clone()),
            list_price: Money::new(Decimal::new(1000, 2), usd.clone()),
            currency: usd,
            price_variation_id: None,
            availability: Availability::InStock,
            tags: ProductTags::default(),
            categories: Vec::new(),
            short_description: None,
            description: None,
            brand: None,
            date_published: None,
            price_variations: Vec::new(),
        }
    }

    #[test]
    fn full_description_joins_both_parts_with_a_space() {
        let mut product = base_product();
        product.short_description = Some("Great shoe".to_string());
        product.description = Some("Lasts forever".to_string());
        assert_eq!(product.full_description(), "Great shoe Lasts forever");
    }

    #[test]
    fn full_description_with_only_description_equals_description() {
        let mut product = base_product();
        product.description = Some("Lasts forever".to_string());
        assert_eq!(product.full_description(), "Lasts forever");
    }

    #[test]
    fn full_description_empty_when_both_absent() {
        assert_eq!(base_product().full_description(), "");
    }

    #[test]
    fn serialized_record_always_carries_all_three_tag_slots() {
        let value = serde_json::to_value(base_product()).unwrap();
        let tags = &value["tags"];
        assert!(tags["tag1"].as_array().unwrap().is_empty());
        assert!(tags["tag2"].as_array().unwrap().is_empty());
        assert!(tags["tag3"].as_array().unwrap().is_empty());
    }

    #[test]
    fn absent_optional_fields_are_omitted_from_serialization() {
        let value = serde_json::to_value(base_product()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("image_url"));
        assert!(!object.contains_key("brand"));
        assert!(!object.contains_key("date_published"));
        assert!(!object.contains_key("price_variation_id"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Full description is the space-join of the present,
            /// non-empty parts, in short-then-long order.
            #[test]
            fn full_description_joins_present_parts(
                short in proptest::option::of("[a-zA-Z ]{1,30}"),
                long in proptest::option::of("[a-zA-Z ]{1,30}"),
            ) {
                let mut product = base_product();
                product.short_description = short.clone();
                product.description = long.clone();

                let expected: Vec<String> = [short, long]
                    .into_iter()
                    .flatten()
                    .collect();
                prop_assert_eq!(product.full_description(), expected.join(" "));
            }
        }
    }
}
