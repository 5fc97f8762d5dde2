// Boundary adapters between caller-facing representations and payload bytes
use crate::error::Result;

/// Length of a raw private key payload
pub const PRIVATE_KEY_LEN: usize = 32;

/// Trailing marker requesting a compressed public key
pub const COMPRESSION_FLAG: u8 = 0x01;

/// Returns true when `payload` is a private key followed by the compression marker
pub fn has_compression_flag(payload: &[u8]) -> bool {
    payload.len() == PRIVATE_KEY_LEN + 1 && payload.last() == Some(&COMPRESSION_FLAG)
}

/// Parse a hex payload, tolerating surrounding whitespace and a `0x` prefix
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    Ok(hex::decode(digits)?)
}

pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
