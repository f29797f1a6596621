use crate::BITS_PER_CHAR;
use core::fmt;
use core::hash::Hash;

const fn max_digits(bits: u32) -> usize {
    (bits as usize).div_ceil(BITS_PER_CHAR)
}

/// A primitive integer that can be written in variable-length Identitie form.
///
/// Implemented for every built-in integer type. Signed types are accepted so
/// that callers get an explicit [`crate::Error::InvalidInput`] for negative
/// values rather than a type error at some distant conversion.
pub trait Radix64: Copy + Default + fmt::Debug + fmt::Display + PartialEq + Eq + Hash {
    /// Upper bound on the number of digits for any value of this type.
    const MAX_DIGITS: usize;

    /// Stack buffer large enough for [`Self::MAX_DIGITS`] ASCII digits.
    type DigitArray: AsRef<[u8]> + AsMut<[u8]> + fmt::Debug + Default + Copy;

    fn is_negative(self) -> bool;

    fn is_zero(self) -> bool;

    /// Splits off the least-significant base-64 digit, returning
    /// `(self / 64, self % 64)`. Only meaningful for non-negative values.
    fn split_digit(self) -> (Self, u8);

    /// Appends `digit` as the new least-significant digit
    /// (`self * 64 + digit`), or `None` on overflow.
    fn push_digit(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_radix64 {
    (@common $t:ty) => {
        const MAX_DIGITS: usize = max_digits(<$t>::BITS);

        type DigitArray = [u8; Self::MAX_DIGITS];

        #[inline(always)]
        fn is_zero(self) -> bool {
            self == 0
        }

        #[inline(always)]
        fn split_digit(self) -> (Self, u8) {
            (self >> BITS_PER_CHAR, (self & 0x3F) as u8)
        }

        #[inline(always)]
        fn push_digit(self, digit: u8) -> Option<Self> {
            self.checked_mul(64)?.checked_add(digit as $t)
        }
    };
    (unsigned: $($t:ty),+) => {$(
        impl Radix64 for $t {
            impl_radix64!(@common $t);

            #[inline(always)]
            fn is_negative(self) -> bool {
                false
            }
        }
    )+};
    (signed: $($t:ty),+) => {$(
        impl Radix64 for $t {
            impl_radix64!(@common $t);

            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }
        }
    )+};
}

impl_radix64!(unsigned: u8, u16, u32, u64, u128, usize);
impl_radix64!(signed: i8, i16, i32, i64, i128, isize);
