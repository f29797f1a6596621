use crate::{Error, Result};

/// The 64 Identitie digits, in value order.
///
/// `0-9` map to 0..=9, `a-z` to 10..=35, `A-Z` to 36..=61, `_` to 62 and `$`
/// to 63. The order is part of the wire format.
pub const ALPHABET: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_$";

/// Radix of both encodings.
pub const BASE: u8 = 64;

/// Bits carried by each encoded character.
pub const BITS_PER_CHAR: usize = 6;

const MASK: u8 = BASE - 1;

/// Inverse of [`ALPHABET`], indexed by ASCII code.
///
/// Built at compile time. A duplicate or non-ASCII alphabet character is a
/// compile error, so the table is always an exact bijection with `ALPHABET`.
const LOOKUP: [Option<u8>; 128] = {
    let mut lut = [None; 128];
    let mut i = 0_u8;
    while i < BASE {
        let c = ALPHABET[i as usize];
        assert!(c.is_ascii(), "alphabet must be ASCII");
        assert!(lut[c as usize].is_none(), "alphabet characters must be distinct");
        lut[c as usize] = Some(i);
        i += 1;
    }
    lut
};

/// Returns the character for a digit value. Only the low 6 bits are used.
#[inline]
#[must_use]
pub const fn digit_char(value: u8) -> char {
    ALPHABET[(value & MASK) as usize] as char
}

/// Returns the ASCII byte for a digit value. Only the low 6 bits are used.
#[inline(always)]
pub(crate) const fn digit_byte(value: u8) -> u8 {
    ALPHABET[(value & MASK) as usize]
}

/// Returns the digit value of `c`, or `None` if `c` is not in the alphabet.
///
/// ```
/// use identitie::digit_value;
///
/// assert_eq!(digit_value('0'), Some(0));
/// assert_eq!(digit_value('$'), Some(63));
/// assert_eq!(digit_value('!'), None);
/// assert_eq!(digit_value('é'), None);
/// ```
#[inline]
#[must_use]
pub fn digit_value(c: char) -> Option<u8> {
    LOOKUP.get(c as usize).copied().flatten()
}

/// Looks up the character at `index` of some input, shared by both decoders.
#[inline(always)]
pub(crate) fn lookup(index: usize, character: char) -> Result<u8> {
    digit_value(character).ok_or(Error::InvalidCharacter { character, index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_a_bijection() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            let value = digit_value(c as char).expect("alphabet char must decode");
            assert_eq!(value as usize, i, "char {:?}", c as char);
            assert_eq!(digit_char(value), c as char);
        }
    }

    #[test]
    fn every_other_ascii_code_is_unassigned() {
        let assigned = (0_u8..128)
            .filter(|&code| digit_value(code as char).is_some())
            .count();
        assert_eq!(assigned, 64);

        for code in 0_u8..128 {
            if !ALPHABET.contains(&code) {
                assert_eq!(digit_value(code as char), None, "code {code}");
            }
        }
    }

    #[test]
    fn wire_order_is_digits_lower_upper_underscore_dollar() {
        assert_eq!(digit_value('9'), Some(9));
        assert_eq!(digit_value('a'), Some(10));
        assert_eq!(digit_value('z'), Some(35));
        assert_eq!(digit_value('A'), Some(36));
        assert_eq!(digit_value('Z'), Some(61));
        assert_eq!(digit_value('_'), Some(62));
        assert_eq!(digit_value('$'), Some(63));
    }

    #[test]
    fn characters_beyond_the_table_are_rejected() {
        for c in ['\u{80}', 'é', 'ß', '€', '😀', char::MAX] {
            assert_eq!(digit_value(c), None);
        }
    }

    #[test]
    fn digit_char_masks_to_six_bits() {
        assert_eq!(digit_char(64), '0');
        assert_eq!(digit_char(0xFF), '$');
    }

    #[test]
    fn lookup_reports_character_and_index() {
        assert_eq!(lookup(0, 'Q'), Ok(52));
        assert_eq!(
            lookup(7, '-'),
            Err(Error::InvalidCharacter {
                character: '-',
                index: 7
            })
        );
    }
}
