//! Strongly-typed string identifiers used in navigation configuration.

use core::str::FromStr;
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a navigation item, unique within its sibling list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Cow<'static, str>);

/// Key into a caller's attribute bag (e.g. `assignedClasses`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(Cow<'static, str>);

macro_rules! impl_str_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a name without validation.
            ///
            /// Intended for compiled-in tables; documents loaded at runtime
            /// are checked with [`Self::is_valid`] during catalog validation.
            pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Non-empty, no whitespace, no `.` (reserved as a path separator).
            pub fn is_valid(&self) -> bool {
                !self.0.is_empty() && !self.0.chars().any(|c| c.is_whitespace() || c == '.')
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&'static str> for $t {
            fn from(value: &'static str) -> Self {
                Self(Cow::Borrowed(value))
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(Cow::Owned(value))
            }
        }

        impl FromStr for $t {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = Self(Cow::Owned(s.to_string()));
                if id.is_valid() {
                    Ok(id)
                } else {
                    Err(CatalogError::invalid_id(format!("{}: {:?}", $name, s)))
                }
            }
        }
    };
}

impl_str_newtype!(ItemId, "ItemId");
impl_str_newtype!(AttributeKey, "AttributeKey");
