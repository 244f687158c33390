//! Taxonomy flattener: full category-path strings for an entry.

use recsync_catalog::{CatalogEntry, TaxonomyProvider};

/// Flatten the entry's category associations into full path strings
/// (root-to-leaf, slash-separated), in association order.
///
/// Categories that yield no path (disabled or root-only) are skipped, so the
/// output never contains empty strings.
pub fn flatten_categories(entry: &CatalogEntry, taxonomy: &dyn TaxonomyProvider) -> Vec<String> {
    entry
        .category_ids
        .iter()
        .filter_map(|id| taxonomy.category_path(*id))
        .filter(|path| !path.is_empty())
        .collect()
}
