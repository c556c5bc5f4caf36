//! Error types for the filterkit crate.

use thiserror::Error;

/// Errors raised while building a filter.
///
/// Both variants reject literal input the caller supplied. They surface at
/// the offending call so a chain aborts before anything is compiled.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Date text did not match the active format.
    #[error("failed to parse date from '{input}' with format '{format}': {source}")]
    InvalidDate {
        input: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Identifier text is not a valid object id.
    #[error("invalid object id '{input}': {source}")]
    InvalidObjectId {
        input: String,
        #[source]
        source: hex::FromHexError,
    },
}

/// Result type for filterkit operations.
pub type Result<T> = std::result::Result<T, FilterError>;
