//! Error types for Identitie encoding and decoding.
//!
//! Every failure is a deterministic validation error about the caller's
//! input. Nothing here is transient or retryable.

/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `identitie` can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A fixed-length string did not have exactly `expected` characters.
    #[error("invalid length: {len} (expected {expected})")]
    InvalidLength {
        /// Number of characters in the rejected input.
        len: usize,
        /// Required number of characters.
        expected: usize,
    },

    /// A character outside the 64-symbol alphabet was found.
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character position within the input.
        index: usize,
    },

    /// The caller violated a precondition, such as encoding a negative
    /// integer or decoding an empty string.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    /// The decoded value does not fit in the target integer type.
    #[error("decode overflow")]
    Overflow,
}
