//! Fixed-length Identitie hashes.
//!
//! Every `u64` is written as exactly [`HASH_LEN`] characters, most
//! significant digit first and zero-padded. Eleven 6-bit digits form a
//! 66-bit window, so for any `u64` the first character carries only 4
//! significant bits and is always one of `0`-`f`.
use crate::alphabet::{BITS_PER_CHAR, digit_byte, lookup};
use crate::{Error, Result};
#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Number of characters in a fixed-length hash.
pub const HASH_LEN: usize = 11;

/// Stack buffer holding one encoded hash.
pub type HashArray = [u8; HASH_LEN];

/// Largest digit value the leading character may hold while still fitting
/// in 64 bits.
const MAX_LEADING_DIGIT: u8 = (1 << (u64::BITS as usize - (HASH_LEN - 1) * BITS_PER_CHAR)) - 1;

/// Encodes `value` into `buf` without allocating.
///
/// Digits are filled from the least significant (index 10) to the most
/// significant (index 0). The buffer always holds valid ASCII afterwards.
///
/// ```
/// use identitie::{HashArray, encode_hash_to_buf};
///
/// let mut buf = HashArray::default();
/// encode_hash_to_buf(u64::MAX, &mut buf);
/// assert_eq!(&buf, b"f$$$$$$$$$$");
/// ```
#[inline]
pub fn encode_hash_to_buf(mut value: u64, buf: &mut HashArray) {
    for slot in buf.iter_mut().rev() {
        *slot = digit_byte((value & 0x3F) as u8);
        value >>= BITS_PER_CHAR;
    }
}

/// Encodes `value` as an 11-character Identitie hash.
///
/// This never fails: every `u64` has a fixed-length encoding.
///
/// ```
/// use identitie::encode_hash;
///
/// assert_eq!(encode_hash(0), "00000000000");
/// assert_eq!(encode_hash(0xFE21_B3A4_D9C8_E712), "fUxIWjpOesi");
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
#[must_use]
pub fn encode_hash(value: u64) -> String {
    let mut buf = HashArray::default();
    encode_hash_to_buf(value, &mut buf);
    buf.iter().map(|&b| b as char).collect()
}

/// Decodes an 11-character Identitie hash.
///
/// # Errors
///
/// - [`Error::InvalidLength`] if `s` is not exactly [`HASH_LEN`] characters.
///   Length is checked before any character is inspected.
/// - [`Error::InvalidCharacter`] for the first character outside the
///   alphabet.
/// - [`Error::Overflow`] if the leading digit is above `f`, meaning the
///   string encodes a value wider than 64 bits.
///
/// ```
/// use identitie::{Error, decode_hash};
///
/// assert_eq!(decode_hash("0000000000G"), Ok(42));
/// assert_eq!(
///     decode_hash("abc"),
///     Err(Error::InvalidLength { len: 3, expected: 11 })
/// );
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", err))]
pub fn decode_hash(s: &str) -> Result<u64> {
    let len = s.chars().count();
    if len != HASH_LEN {
        return Err(Error::InvalidLength {
            len,
            expected: HASH_LEN,
        });
    }

    let mut value = 0_u64;
    for (index, character) in s.chars().enumerate() {
        let digit = lookup(index, character)?;
        if index == 0 && digit > MAX_LEADING_DIGIT {
            return Err(Error::Overflow);
        }
        value = (value << BITS_PER_CHAR) | u64::from(digit);
    }

    Ok(value)
}
