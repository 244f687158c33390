//! `recsync-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly typed identifiers, money/currency value objects, availability, and
//! the domain error model shared across the export pipeline.

pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use error::{ExportError, ExportResult};
pub use id::{CategoryId, EntryId, StoreId};
pub use money::{Availability, CurrencyCode, Money};
pub use value_object::ValueObject;
