//! `learnhub-core`: shared primitives for the navigation resolver.
//!
//! This crate contains **pure** building blocks (no IO, no logging setup).

pub mod error;
pub mod id;

pub use error::{CatalogError, CatalogResult};
pub use id::{AttributeKey, ItemId};
