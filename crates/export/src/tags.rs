//! Tag aggregator: free-form tags plus the capability tag.

use recsync_catalog::{CatalogEntry, Store, TagProvider};

/// Capability tag signaling the product can be added to a cart directly,
/// without any configuration step. Storefronts use it to enable one-click
/// add-to-cart in recommendation slots.
pub const ADD_TO_CART_TAG: &str = "add-to-cart";

/// Aggregate the exported tags for an entry in a store: approved,
/// store-visible free-form tags in system order, with [`ADD_TO_CART_TAG`]
/// appended last iff the entry is directly purchasable.
///
/// An unavailable tagging subsystem (see `NoTagging`) contributes an empty
/// free-form portion; that is not an error.
pub fn aggregate_tags(entry: &CatalogEntry, store: &Store, tags: &dyn TagProvider) -> Vec<String> {
    let mut aggregated = tags.approved_tags(entry.id, store.id);
    if entry.is_directly_purchasable() {
        aggregated.push(ADD_TO_CART_TAG.to_string());
    }
    aggregated
}
