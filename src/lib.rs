//! # Coinstring - Versioned, Checksummed Base58 Strings
//!
//! This is the codec behind Bitcoin-style addresses and WIF private keys.
//! When I come back to this code, here's what I need to remember:
//!
//! ## What It Does
//! - **Base58**: lossless bytes <-> text over the Bitcoin alphabet, one `'1'`
//!   per leading zero byte
//! - **Framing**: `version ‖ payload ‖ checksum`, checksum = first 4 bytes of
//!   double SHA-256 (or any injected hasher)
//! - **Decoding**: checksum verified first, then the version if one was asked for
//! - **Versioned codecs**: fix a version once with `for_version` and reuse it
//!
//! ## How I Organized My Code
//! - `codec/`: Base58 conversion, the coinstring codec, versioned codecs
//! - `utils/`: checksum digest collaborator and payload adapters
//! - `error/`: the crate-wide error enum
//! - `config/`: environment settings for the command-line tool
//! - `cli/`: command-line parsing and dispatch
//!
//! ## Things Worth Knowing
//! - `decode_any` trusts whatever version byte the string carries; use
//!   `decode` with an explicit version for strict validation
//! - The WIF compression marker (`0x01` after a 32-byte key) is payload, not
//!   framing: it comes back as the last byte of `Decoded::bytes`
//!
//! ```
//! let address = coinstring::encode(0x00, hex_literal::hex!("3c176e659bea0f29a3e9bf7880c112b1b31b4dc8"));
//! assert_eq!(address, "16UjcYNBG9GTK4uq2f7yYEbuifqCzoLMGS");
//! assert!(coinstring::validate(0x00, &address));
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{execute, Command, CommandOutput, Opt};
pub use codec::{base58, Coinstring, Decoded, VersionedCodec, CHECKSUM_LEN, MIN_ENCODED_LEN};
pub use config::{parse_version, Config, GLOBAL_CONFIG};
pub use error::{CoinstringError, Result};
pub use utils::{
    double_sha256_digest, has_compression_flag, parse_hex, sha256_digest, to_hex, ChecksumHash,
    DoubleSha256, COMPRESSION_FLAG, PRIVATE_KEY_LEN,
};

/// Encode `payload` under `version` with the double SHA-256 checksum
pub fn encode(version: u8, payload: impl AsRef<[u8]>) -> String {
    Coinstring::new().encode(version, payload)
}

/// Decode `text`, requiring its version byte to equal `version`
pub fn decode(version: u8, text: &str) -> Result<Decoded> {
    Coinstring::new().decode(version, text)
}

/// Decode `text` and report whichever version byte it carries
pub fn decode_any(text: &str) -> Result<Decoded> {
    Coinstring::new().decode_any(text)
}

pub fn validate(version: u8, text: &str) -> bool {
    Coinstring::new().validate(version, text)
}

/// Codec with `version` fixed, using the double SHA-256 checksum
pub fn for_version(version: u8) -> VersionedCodec {
    Coinstring::new().for_version(version)
}
