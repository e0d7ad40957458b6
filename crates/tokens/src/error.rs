//! Token lookup errors

use thiserror::Error;

/// Errors raised when a token name is resolved at runtime
///
/// Keys known at compile time go through the key enums and cannot fail.
/// Only names coming from outside the crate (configuration, host bridges)
/// can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The name is not part of the table's key set
    #[error("Unknown {table} token: {key}")]
    UnknownKey {
        /// Table the lookup was made against
        table: &'static str,
        /// The rejected name
        key: String,
    },
}

impl TokenError {
    pub(crate) fn unknown(table: &'static str, key: &str) -> Self {
        TokenError::UnknownKey {
            table,
            key: key.to_string(),
        }
    }
}

/// Result alias for token lookups
pub type Result<T> = std::result::Result<T, TokenError>;
