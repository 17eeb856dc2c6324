//! Library-wide error and result types.

use std::fmt;

/// Result alias used throughout mosaic-codec.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the codec can produce.
///
/// Error messages are kept intentionally terse; callers that need richer
/// context should wrap `Error` in their own type. The decoder reports the
/// first failure it encounters and never attempts recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A non-whitespace, non-noise, non-alphabet, non-terminator character
    /// appeared in the stream.
    InvalidCharacter,
    /// The block terminator was encountered before reading all 8 symbols
    /// of a block.
    ShortBlock,
    /// Eight symbols were read but the next meaningful character was not
    /// the terminator.
    MissingTerminator,
    /// The checksum character following a completed window did not match
    /// the computed checksum.
    ChecksumMismatch,
    /// The trailer's third character was not a base-alphabet symbol, the
    /// pad value was out of range, or it exceeded the bytes produced.
    BadTrailer,
    /// Characters followed the trailer's third character.
    TrailingGarbage,
    /// Input was exhausted before the trailer was seen.
    MissingTrailer,
    /// The caller-supplied output buffer is smaller than the required
    /// capacity. Carries that capacity so a query-then-fill caller can
    /// retry without recomputing it.
    BufferTooSmall {
        /// Bytes required to hold the full output.
        needed: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter => write!(f, "invalid character in stream"),
            Error::ShortBlock => write!(f, "terminator encountered before end of block"),
            Error::MissingTerminator => write!(f, "missing block terminator"),
            Error::ChecksumMismatch => write!(f, "checksum mismatch"),
            Error::BadTrailer => write!(f, "malformed trailer"),
            Error::TrailingGarbage => write!(f, "trailing garbage after trailer"),
            Error::MissingTrailer => write!(f, "missing trailer"),
            Error::BufferTooSmall { needed } => {
                write!(f, "output buffer too small: need {needed} bytes")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Errors from the supplementary hex-wrapped XOR cipher.
///
/// This is a distinct failure domain from [`Error`]: the hex cipher has no
/// block framing, checksum, or trailer, so its only failure mode is
/// malformed hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexDecodeError {
    /// The ciphertext's length was not a multiple of two.
    OddLength,
    /// A character outside `[0-9a-fA-F]` appeared in the ciphertext.
    InvalidHexDigit,
}

impl fmt::Display for HexDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexDecodeError::OddLength => write!(f, "hex ciphertext has odd length"),
            HexDecodeError::InvalidHexDigit => write!(f, "invalid hex digit in ciphertext"),
        }
    }
}

impl std::error::Error for HexDecodeError {}
