//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Identifier of a catalog entry (a sellable product record).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

/// Identifier of a store (a sales channel/locale configuration).
///
/// Store id `0` is reserved by the catalog platform as the "all stores"
/// scope on save events; it never names a concrete store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(u64);

/// Identifier of a taxonomy category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

macro_rules! impl_numeric_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = ExportError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = s
                    .parse::<u64>()
                    .map_err(|e| ExportError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(id))
            }
        }
    };
}

impl_numeric_id!(EntryId, "EntryId");
impl_numeric_id!(StoreId, "StoreId");
impl_numeric_id!(CategoryId, "CategoryId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_parses_from_decimal_string() {
        let id: EntryId = "42".parse().unwrap();
        assert_eq!(id, EntryId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn store_id_rejects_non_numeric_input() {
        let err = "default".parse::<StoreId>().unwrap_err();
        match err {
            ExportError::InvalidId(msg) => assert!(msg.contains("StoreId")),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }
}
