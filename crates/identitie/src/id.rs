use crate::{HashArray, Result, decode_hash, encode_hash_to_buf};
use core::fmt;
use core::str::FromStr;

/// A `u64` identifier whose textual form is the fixed-length Identitie hash.
///
/// `Display` writes exactly 11 characters and [`FromStr`] accepts them back,
/// so the type can be used directly in formatted output and parsed from
/// route parameters or configuration.
///
/// ```
/// use identitie::IdentitieHash;
///
/// let id = IdentitieHash::from_raw(0xFE21_B3A4_D9C8_E712);
/// assert_eq!(id.to_string(), "fUxIWjpOesi");
///
/// let parsed: IdentitieHash = "fUxIWjpOesi".parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct IdentitieHash {
    id: u64,
}

impl IdentitieHash {
    pub const ZERO: Self = Self::from_raw(0);
    pub const MAX: Self = Self::from_raw(u64::MAX);

    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    #[must_use]
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Writes the 11-character form into `buf` without allocating.
    pub fn encode_to_buf(&self, buf: &mut HashArray) {
        encode_hash_to_buf(self.id, buf);
    }

    /// Returns the 11-character form as a [`String`](alloc::string::String).
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[must_use]
    pub fn encode(&self) -> alloc::string::String {
        crate::encode_hash(self.id)
    }

    /// Parses an 11-character Identitie hash.
    ///
    /// # Errors
    ///
    /// See [`decode_hash`].
    pub fn decode(s: &str) -> Result<Self> {
        decode_hash(s).map(Self::from_raw)
    }
}

impl fmt::Display for IdentitieHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = HashArray::default();
        self.encode_to_buf(&mut buf);
        // SAFETY: the alphabet is ASCII, so every encoded byte is valid UTF-8
        f.write_str(unsafe { core::str::from_utf8_unchecked(&buf) })
    }
}

impl fmt::Debug for IdentitieHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentitieHash")
            .field("id", &format_args!("{} (0x{:016x})", self, self.id))
            .finish()
    }
}

impl FromStr for IdentitieHash {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl From<u64> for IdentitieHash {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<IdentitieHash> for u64 {
    fn from(id: IdentitieHash) -> Self {
        id.to_raw()
    }
}
