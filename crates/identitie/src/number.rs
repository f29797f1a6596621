use crate::alphabet::{digit_byte, lookup};
use crate::{Error, Radix64, Result};
#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Encodes `value` into the front of `buf` and returns the number of
/// characters written.
///
/// The output is minimal: `0` is the single character `"0"`, and any other
/// value never starts with a zero digit. Bytes past the returned length are
/// left untouched.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `value` is negative.
///
/// ```
/// use identitie::{Radix64, encode_to_buf};
///
/// let mut buf = <u64 as Radix64>::DigitArray::default();
/// let len = encode_to_buf(4096_u64, &mut buf).unwrap();
/// assert_eq!(&buf[..len], b"100");
/// ```
pub fn encode_to_buf<T: Radix64>(value: T, buf: &mut T::DigitArray) -> Result<usize> {
    if value.is_negative() {
        return Err(Error::InvalidInput {
            reason: "negative integers cannot be encoded",
        });
    }

    let out = buf.as_mut();
    if value.is_zero() {
        out[0] = digit_byte(0);
        return Ok(1);
    }

    let mut len = 0;
    let mut rest = value;
    while !rest.is_zero() {
        let (quotient, digit) = rest.split_digit();
        out[len] = digit_byte(digit);
        len += 1;
        rest = quotient;
    }
    out[..len].reverse();

    Ok(len)
}

/// Encodes `value` as a variable-length Identitie string.
///
/// ```
/// use identitie::encode;
///
/// assert_eq!(encode(0_u64).unwrap(), "0");
/// assert_eq!(encode(63_u8).unwrap(), "$");
/// assert_eq!(encode(0xFE21_B3A4_D9C8_E712_u64).unwrap(), "fUxIWjpOesi");
/// assert!(encode(-1_i32).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `value` is negative.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[cfg_attr(feature = "tracing", instrument(level = "trace", err))]
pub fn encode<T: Radix64>(value: T) -> Result<String> {
    let mut buf = T::DigitArray::default();
    let len = encode_to_buf(value, &mut buf)?;
    Ok(buf.as_ref()[..len].iter().map(|&b| b as char).collect())
}

/// Decodes a variable-length Identitie string into `T`.
///
/// Leading zero digits are accepted, so `"00a"` decodes to 10.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `s` is empty.
/// - [`Error::InvalidCharacter`] for the first character outside the
///   alphabet, with its character index.
/// - [`Error::Overflow`] if the value does not fit in `T`.
///
/// ```
/// use identitie::{Error, decode};
///
/// assert_eq!(decode::<u64>("fUxIWjpOesi"), Ok(0xFE21_B3A4_D9C8_E712));
/// assert_eq!(decode::<u8>("40"), Err(Error::Overflow));
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", err))]
pub fn decode<T: Radix64>(s: &str) -> Result<T> {
    if s.is_empty() {
        return Err(Error::InvalidInput {
            reason: "cannot decode an empty string",
        });
    }

    let mut value = T::default();
    for (index, character) in s.chars().enumerate() {
        let digit = lookup(index, character)?;
        value = value.push_digit(digit).ok_or(Error::Overflow)?;
    }

    Ok(value)
}
