//! Read-only view of a catalog entry at the provider boundary.

use std::collections::BTreeMap;

use recsync_core::{Availability, CategoryId, EntryId};

/// Snapshot of a sellable product record, as handed out by the catalog
/// platform.
///
/// This is a plain data view: the export core never mutates it and never
/// writes it back. `brand` is already the display text of the manufacturer
/// attribute (not the raw option id). `image_values` maps image attribute
/// codes (e.g. `"image"`, `"small_image"`, `"thumbnail"`) to media file
/// paths; the platform uses the literal `"no_selection"` as its
/// nothing-chosen sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub name: String,
    /// URL path of the product page, relative to a store's base URL.
    pub url_path: String,
    /// Creation timestamp as stored by the catalog (string-typed there).
    pub created_at: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub image_values: BTreeMap<String, String>,
    pub in_stock: bool,
    /// Whether the entry requires configuration (option choices) before it
    /// can be added to a cart.
    pub configurable: bool,
    pub category_ids: Vec<CategoryId>,
}

impl CatalogEntry {
    /// Value of an image attribute, if the entry carries one.
    pub fn image_value(&self, attribute: &str) -> Option<&str> {
        self.image_values.get(attribute).map(String::as_str)
    }

    /// Whether the entry can be purchased directly, without any
    /// configuration step.
    pub fn is_directly_purchasable(&self) -> bool {
        !self.configurable
    }

    pub fn availability(&self) -> Availability {
        Availability::from_in_stock(self.in_stock)
    }
}
