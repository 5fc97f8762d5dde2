//! Base58 conversion over the Bitcoin alphabet.
//! Leading zero bytes map one-to-one onto leading '1' symbols; the rest of the
//! input is treated as a big-endian unsigned integer.

use crate::error::{CoinstringError, Result};
use num_bigint::BigUint;
use zeroize::Zeroize;

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE: u32 = 58;

// Symbol for digit zero, also the marker for a leading zero byte
const ZERO_SYMBOL: char = ALPHABET[0] as char;

const INVALID: u8 = 255;

const DIGIT_TO_VAL: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encodes bytes as a Base58 string.
#[must_use]
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let significant = &input[zeros..];

    // log(256) / log(58) ~= 1.366 symbols per byte
    let mut output = String::with_capacity(zeros + significant.len() * 137 / 100 + 1);
    output.extend(std::iter::repeat(ZERO_SYMBOL).take(zeros));
    if significant.is_empty() {
        return output;
    }

    let digits = BigUint::from_bytes_be(significant).to_radix_be(BASE);
    output.extend(digits.iter().map(|&d| ALPHABET[d as usize] as char));
    output
}

/// Decodes a Base58 string to bytes.
///
/// The digit buffer is wiped before returning. `BigUint` offers no zeroize
/// support, so its internal limbs are freed without wiping.
///
/// # Errors
/// - `InvalidCharacter`: a symbol outside the alphabet, with its character position.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(input.len());
    for (position, character) in input.chars().enumerate() {
        match digit_value(character) {
            Some(value) => digits.push(value),
            None => {
                digits.zeroize();
                return Err(CoinstringError::InvalidCharacter {
                    character,
                    position,
                });
            }
        }
    }

    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    let significant = &digits[zeros..];
    if significant.is_empty() {
        return Ok(vec![0u8; zeros]);
    }

    let value = significant
        .iter()
        .fold(BigUint::default(), |acc, &d| acc * BASE + u32::from(d));
    digits.zeroize();
    let mut magnitude = value.to_bytes_be();
    let mut output = Vec::with_capacity(zeros + magnitude.len());
    output.resize(zeros, 0u8);
    output.extend_from_slice(&magnitude);
    magnitude.zeroize();
    Ok(output)
}

/// Returns true when every character of `input` belongs to the alphabet
pub fn is_base58(input: &str) -> bool {
    input.chars().all(|c| digit_value(c).is_some())
}

fn digit_value(character: char) -> Option<u8> {
    if !character.is_ascii() {
        return None;
    }
    match DIGIT_TO_VAL[character as usize] {
        INVALID => None,
        value => Some(value),
    }
}
