//! Codec core
//!
//! `base58` converts between bytes and the 58-symbol alphabet. `coinstring`
//! frames payloads with a version byte and checksum on top of it, and
//! `versioned` fixes the version for repeated use.

pub mod base58;
pub mod coinstring;
pub mod versioned;

pub use coinstring::{Coinstring, Decoded, CHECKSUM_LEN, MIN_ENCODED_LEN};
pub use versioned::VersionedCodec;
