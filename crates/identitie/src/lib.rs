//! Compact, URL-safe base-64 identifiers ("Identitie" strings) for integers.
//!
//! Two encodings share one 64-symbol alphabet
//! (`0-9`, `a-z`, `A-Z`, `_`, `$`):
//!
//! - **Fixed-length**: every `u64` becomes exactly 11 characters
//!   ([`encode_hash`], [`decode_hash`], [`IdentitieHash`]).
//! - **Variable-length**: the minimal number of digits with no leading zero,
//!   for any primitive integer up to `u128` ([`encode`], [`decode`]).
//!
//! ```
//! # #[cfg(feature = "alloc")]
//! # {
//! use identitie::{decode, decode_hash, encode, encode_hash};
//!
//! assert_eq!(encode_hash(42), "0000000000G");
//! assert_eq!(decode_hash("0000000000G").unwrap(), 42);
//!
//! assert_eq!(encode(4096_u64).unwrap(), "100");
//! assert_eq!(decode::<u64>("100").unwrap(), 4096);
//! # }
//! ```
//!
//! The buffer-based encoders and both decoders work in `no_std` builds
//! without `alloc`.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod alphabet;
mod error;
mod hash;
mod id;
mod number;
mod radix;
#[cfg(feature = "serde")]
mod serde;

pub use crate::alphabet::*;
pub use crate::error::*;
pub use crate::hash::*;
pub use crate::id::*;
pub use crate::number::*;
pub use crate::radix::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
