//! Common error types for passhash.
//!
//! Verification outcomes are plain booleans and entropy failures panic, so
//! these errors only describe stored records that cannot be read back.

use thiserror::Error;

/// Top-level error type for passhash operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A stored record is structurally invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An encoded field could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("missing hash".to_string());
        assert_eq!(err.to_string(), "Invalid input: missing hash");

        let err = Error::Serialization("bad base64".to_string());
        assert_eq!(err.to_string(), "Serialization error: bad base64");
    }
}
