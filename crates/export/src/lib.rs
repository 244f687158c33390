//! `recsync-export` — normalized product representation and its assembly.
//!
//! This crate turns a (catalog entry, store) pair into one consistent,
//! serializable [`Product`] record: base-currency prices, a store-scoped
//! image URL, flattened category paths, aggregated tags, and per-currency
//! price variations. Assembly is pure and synchronous; all platform access
//! goes through the `recsync-catalog` provider traits.

pub mod exporter;
pub mod media;
pub mod pricing;
pub mod product;
pub mod tags;
pub mod taxonomy;
pub mod variation;

pub use exporter::ProductExporter;
pub use media::MediaResolver;
pub use product::{PriceVariation, Product, ProductTags};
pub use tags::ADD_TO_CART_TAG;
pub use variation::VariationOutcome;
