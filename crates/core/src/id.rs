//! Strongly-typed identifiers used across the domain.
//!
//! Stockyard and product ids are opaque strings assigned by the upstream
//! master-data system (`CMO_LOC_*`, `PROD_*`); the newtypes keep them from
//! being swapped at call sites.

use serde::{Deserialize, Serialize};

/// Identifier of a stockyard (storage/distribution location).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockyardId(String);

/// Identifier of a product shipped out of a stockyard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $prefix:literal) => {
        impl $t {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the id belongs to the recognized upstream namespace.
            pub fn has_valid_prefix(&self) -> bool {
                self.0.starts_with($prefix)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

impl_string_newtype!(StockyardId, "CMO_LOC_");
impl_string_newtype!(ProductId, "PROD_");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_recognition() {
        assert!(StockyardId::new("CMO_LOC_001").has_valid_prefix());
        assert!(!StockyardId::new("LOC_001").has_valid_prefix());
        assert!(ProductId::new("PROD_HRP_001").has_valid_prefix());
        assert!(!ProductId::new("HRP_001").has_valid_prefix());
    }
}
