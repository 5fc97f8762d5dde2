//! Error handling for the codec
//!
//! This module provides the error types returned by Base58 conversion,
//! coinstring decoding and the surrounding adapters.

use std::fmt;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CoinstringError>;

/// Error types for codec operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoinstringError {
    /// Input contains a symbol outside the Base58 alphabet
    InvalidCharacter { character: char, position: usize },
    /// Decoded bytes cannot hold a version byte and a checksum
    TooShort { length: usize },
    /// Recomputed checksum disagrees with the trailing checksum bytes
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },
    /// Decoded version byte disagrees with the requested one
    VersionMismatch { expected: u8, actual: u8 },
    /// Malformed hexadecimal payload
    InvalidHex(String),
    /// Configuration errors
    Config(String),
    /// Serialization errors
    Serialization(String),
}

impl fmt::Display for CoinstringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinstringError::InvalidCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Invalid Base58 character {character:?} at position {position}"
                )
            }
            CoinstringError::TooShort { length } => write!(
                f,
                "Decoded data too short: {length} bytes, need at least 5"
            ),
            CoinstringError::ChecksumMismatch { expected, actual } => write!(
                f,
                "Checksum mismatch: expected {}, found {}",
                hex::encode(expected),
                hex::encode(actual)
            ),
            CoinstringError::VersionMismatch { expected, actual } => write!(
                f,
                "Version mismatch: expected {expected:#04x}, found {actual:#04x}"
            ),
            CoinstringError::InvalidHex(msg) => write!(f, "Invalid hex: {msg}"),
            CoinstringError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CoinstringError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for CoinstringError {}

impl From<hex::FromHexError> for CoinstringError {
    fn from(err: hex::FromHexError) -> Self {
        CoinstringError::InvalidHex(err.to_string())
    }
}
