//! # Word Codec
//!
//! Encoding of a single dynamic `string` in the 32-byte word layout:
//!
//! - bytes 0-31: offset of the string's head (always 0x20 when alone)
//! - bytes offset..offset+32: length in bytes (Len)
//! - bytes offset+32..offset+32+Len: UTF-8 data, zero-padded to a word

use crate::domain::value_objects::U256;
use crate::errors::AbiError;

/// Size of one ABI word.
pub const WORD: usize = 32;

/// Encodes `value` as a big-endian word.
#[must_use]
pub fn encode_word(value: usize) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    U256::from(value).to_big_endian(&mut word);
    word
}

/// Reads the word at `offset` as a `usize`.
///
/// # Errors
///
/// `InputTooShort` if fewer than 32 bytes remain, `InvalidOffset` if the
/// word does not fit a `usize`.
pub fn decode_word(data: &[u8], offset: usize) -> Result<usize, AbiError> {
    let end = offset
        .checked_add(WORD)
        .ok_or_else(|| AbiError::InvalidOffset(format!("{offset} overflows")))?;
    let bytes = data.get(offset..end).ok_or(AbiError::InputTooShort {
        expected: end,
        actual: data.len(),
    })?;
    let value = U256::from_big_endian(bytes);
    if value > U256::from(usize::MAX) {
        return Err(AbiError::InvalidOffset(format!("{value} exceeds usize")));
    }
    Ok(value.as_usize())
}

/// Encodes one `string` value (offset, length, padded data).
#[must_use]
pub fn encode_string(value: &str) -> Vec<u8> {
    let data = value.as_bytes();
    let padded = data.len().div_ceil(WORD) * WORD;

    let mut out = Vec::with_capacity(2 * WORD + padded);
    out.extend_from_slice(&encode_word(WORD));
    out.extend_from_slice(&encode_word(data.len()));
    out.extend_from_slice(data);
    out.resize(2 * WORD + padded, 0);
    out
}

/// Decodes one `string` value from `data` (arguments only, no selector).
///
/// # Errors
///
/// Any [`AbiError`] describing where the layout breaks.
pub fn decode_string(data: &[u8]) -> Result<String, AbiError> {
    let offset = decode_word(data, 0)?;
    if offset > data.len() {
        return Err(AbiError::InvalidOffset(format!(
            "{offset} past end of {} bytes",
            data.len()
        )));
    }

    let length = decode_word(data, offset)?;
    let start = offset + WORD;
    let end = start
        .checked_add(length)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| {
            AbiError::InvalidLength(format!(
                "{length} bytes at {start} past end of {} bytes",
                data.len()
            ))
        })?;

    String::from_utf8(data[start..end].to_vec()).map_err(|_| AbiError::InvalidUtf8)
}

// =============================================================================
// TESTS
// =============================================================================
