//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are small integers handed out by the owning store. Using newtype
//! wrappers prevents accidentally mixing up ids from different entity types
//! at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// The id handed to the first record of an empty store
            pub const FIRST: Self = Self(1);

            /// Create an ID from a raw integer
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the underlying integer
            pub const fn get(&self) -> u32 {
                self.0
            }

            /// The id following the largest of `existing`, or `FIRST` if there is none
            pub fn next_after<I>(existing: I) -> Self
            where
                I: IntoIterator<Item = Self>,
            {
                existing
                    .into_iter()
                    .max()
                    .map(|max| Self(max.0 + 1))
                    .unwrap_or(Self::FIRST)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            /// Accepts "4", "#4" and the prefixed form (e.g. "acc-4")
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                let s = s.strip_prefix('#').unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(TransactionId, "txn-");
