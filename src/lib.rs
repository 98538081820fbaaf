//! Umbrella crate re-exporting [`countrycodes_core`] for the demos.
pub use countrycodes_core::*;
