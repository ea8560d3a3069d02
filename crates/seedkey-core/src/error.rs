//! Error types for seedkey

use thiserror::Error;

/// Result type for seedkey operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing seeds or deriving keys
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Seed was not exactly [`crate::SEED_LEN`] bytes
    #[error("Invalid seed length: expected {expected} bytes, got {got}")]
    InvalidSeedLength { expected: usize, got: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Embedded checksum does not match the payload
    #[error("Checksum mismatch")]
    ChecksumMismatch,
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHex(e.to_string())
    }
}
