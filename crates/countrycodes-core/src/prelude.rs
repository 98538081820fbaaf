// crates/countrycodes-core/src/prelude.rs
pub use crate::common::RegistryStats;
pub use crate::error::{CountryCodeError, Result};
pub use crate::model::{Assignment, CountryCode};
pub use crate::registry::Registry;
pub use crate::traits::CountrySearch;
