//! `recsync-catalog` — read-only collaborator contracts for the export core.
//!
//! The commerce platform (catalog storage, store configuration, pricing
//! engine, media pipeline, taxonomy tree, tagging system) is reached only
//! through the traits in this crate. The export core composes them; it never
//! talks to storage or the network itself.

pub mod context;
pub mod entry;
pub mod fixtures;
pub mod providers;
pub mod store;

pub use context::{ContextGuard, ContextSwitcher};
pub use entry::CatalogEntry;
pub use providers::{
    CatalogProvider, MediaError, MediaProvider, NoTagging, PriceQuote, PricingError,
    PricingProvider, StoreRegistry, TagProvider, TaxonomyProvider,
};
pub use store::{ImageConfig, Store};
