//! countrycodes-cli
//! ================
//!
//! Command-line interface for the `countrycodes-core` ISO-3166-1 registry.
//!
//! The binary (`countrycodes`) is the primary deliverable; the library
//! target holds the argument definitions and output formatting so they can
//! be tested.
//!
//! Basic usage:
//!
//! ```text
//! countrycodes stats
//! countrycodes alpha2 DE
//! countrycodes search "united states"
//! countrycodes --json dial +1
//! countrycodes list --assignment transitionally-reserved
//! ```
//!
//! For programmatic access use the [`countrycodes-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod render;
