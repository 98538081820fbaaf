// crates/countrycodes-core/src/lib.rs

//! # countrycodes-core
//!
//! The ISO-3166-1 country code table compiled into the binary, with exact
//! lookups by alpha-2, alpha-3, name and numeric code, and a case-insensitive
//! prefix search over names backed by a compressed trie.
//!
//! ```rust
//! use countrycodes_core::prelude::*;
//!
//! let registry = Registry::global();
//! let fi = registry.get_by_alpha3("FIN").unwrap();
//! assert_eq!(fi.alpha2, "FI");
//! assert_eq!(fi.assignment, Assignment::OfficiallyAssigned);
//!
//! // Free functions go through the same global registry.
//! assert_eq!(countrycodes_core::get_by_numeric(246), Some(fi));
//! assert!(countrycodes_core::find_by_name("zz-nonexistent-prefix").is_empty());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod data;
pub mod error;
pub mod model;
pub mod prelude;
pub mod registry;
pub mod search; // CountrySearch for Registry
pub mod text;
pub mod traits;
pub mod trie;

// Re-exports
pub use crate::common::RegistryStats;
pub use crate::error::{CountryCodeError, Result};
pub use crate::model::{Assignment, CountryCode};
pub use crate::registry::{
    find_by_name, get_by_alpha2, get_by_alpha3, get_by_name, get_by_numeric, Registry,
};
pub use crate::traits::CountrySearch;
pub use crate::trie::PrefixTrie;
