//! Serde support, enabled by the `serde` feature.
//!
//! [`IdentitieHash`] serializes as its 11-character string. For fields that
//! stay plain integers in Rust, use one of the `with` modules:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     #[serde(with = "identitie::as_identitie_hash")]
//!     hash: u64,
//!     #[serde(with = "identitie::as_identitie")]
//!     counter: u32,
//! }
//! ```
use crate::IdentitieHash;
use core::marker::PhantomData;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for IdentitieHash {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IdentitieHash {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HashVisitor;

        impl Visitor<'_> for HashVisitor {
            type Value = IdentitieHash;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("an 11-character Identitie hash")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                IdentitieHash::decode(v).map_err(E::custom)
            }
        }

        d.deserialize_str(HashVisitor)
    }
}

pub mod as_identitie_hash {
    use super::{Deserialize, Deserializer, IdentitieHash, Serialize, Serializer};

    /// Serialize a `u64` as its fixed-length Identitie hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(raw: &u64, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        IdentitieHash::from_raw(*raw).serialize(s)
    }

    /// Deserialize a `u64` from its fixed-length Identitie hash.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not a valid hash (length, characters, or overflow)
    pub fn deserialize<'de, D>(d: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        IdentitieHash::deserialize(d).map(|id| id.to_raw())
    }
}

pub mod as_identitie {
    use super::{Deserializer, PhantomData, Serializer, Visitor};
    use crate::{Radix64, decode, encode};

    /// Serialize an integer as its variable-length Identitie string.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or the underlying serializer
    /// fails.
    pub fn serialize<T, S>(value: &T, s: S) -> Result<S::Ok, S::Error>
    where
        T: Radix64,
        S: Serializer,
    {
        let encoded = encode(*value).map_err(serde::ser::Error::custom)?;
        s.serialize_str(&encoded)
    }

    /// Deserialize an integer from its variable-length Identitie string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is empty or contains characters outside the alphabet
    /// - The value does not fit in `T`
    pub fn deserialize<'de, T, D>(d: D) -> Result<T, D::Error>
    where
        T: Radix64,
        D: Deserializer<'de>,
    {
        struct NumberVisitor<T>(PhantomData<T>);

        impl<T: Radix64> Visitor<'_> for NumberVisitor<T> {
            type Value = T;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a variable-length Identitie string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                decode(v).map_err(E::custom)
            }
        }

        d.deserialize_str(NumberVisitor(PhantomData))
    }
}
