// crates/countrycodes-core/src/error.rs
use thiserror::Error;

/// Errors raised by the fallible helpers of this crate.
///
/// Plain lookups never fail; they return `None` on a miss. These variants
/// exist for parsing user input and for callers that want `?` propagation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CountryCodeError {
    #[error("No country found for: {0}")]
    NotFound(String),

    #[error("Unknown assignment status: {0}")]
    UnknownAssignment(String),
}

pub type Result<T> = std::result::Result<T, CountryCodeError>;
