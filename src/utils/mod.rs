//! Utility functions and helpers
//!
//! This module contains the checksum digest collaborator and the adapters
//! that turn caller-facing representations into payload bytes.

pub mod crypto;
pub mod payload;

pub use crypto::{double_sha256_digest, sha256_digest, ChecksumHash, DoubleSha256};

pub use payload::{
    has_compression_flag, parse_hex, to_hex, COMPRESSION_FLAG, PRIVATE_KEY_LEN,
};
