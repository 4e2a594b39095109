//! Error types for the core domain.

use thiserror::Error;

/// Core domain error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid boolean {value:?} for {param} (expected one of true/1/yes/y or false/0/no/n)")]
    InvalidBool { param: &'static str, value: String },

    #[error("invalid integer {value:?} for {param}")]
    InvalidInteger { param: &'static str, value: String },

    #[error("contains_character must be exactly one character, got {0:?}")]
    InvalidCharacter(String),

    #[error("conflicting filters: min_length {min} exceeds max_length {max}")]
    ConflictingFilters { min: u64, max: u64 },

    #[error("unable to extract any filters from query {0:?}")]
    UnparseableQuery(String),

    #[error("invalid hash: {0}")]
    InvalidHash(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
