//! Shared codec parameters.
//!
//! All fields are fixed constants known to both the encoder and the
//! decoder; the codec has no self-describing header and no runtime
//! configuration.
//!
//! | Field             | Value | Meaning |
//! |-------------------|-------|---------|
//! | `alphabet`        | 47 distinct printable characters | digit-value ↔ symbol map |
//! | `noise_set`       | 26 characters disjoint from `alphabet`/`term` | legal in the stream, ignored on decode |
//! | `term`            | `'~'` | block terminator and trailer marker |
//! | `base`            | 47 | radix of encoded digits |
//! | `block_bytes`     | 5 | raw bytes per block |
//! | `block_symbols`   | 8 | encoded digits per block |
//! | `checksum_period` | 4 | blocks between checksum symbols |

/// Immutable, process-wide codec parameters.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// 47 distinct printable characters, in fixed digit-value order.
    pub alphabet: &'static [u8; BASE],
    /// 26 characters legal anywhere in the stream but ignored on decode.
    pub noise_set: &'static [u8; 26],
    /// Block terminator and trailer marker.
    pub term: u8,
    /// Radix of encoded digits. `47^8 >= 256^5`, so every 5-byte block
    /// fits in 8 base-47 digits.
    pub base: usize,
    /// Raw bytes consumed per block.
    pub block_bytes: usize,
    /// Encoded digits (and symbols) produced per block.
    pub block_symbols: usize,
    /// Blocks accumulated between checksum symbols.
    pub checksum_period: usize,
}

/// Radix of encoded digits; see [`Params::base`].
pub const BASE: usize = 47;
/// Raw bytes per block; see [`Params::block_bytes`].
pub const BLOCK_BYTES: usize = 5;
/// Encoded digits per block; see [`Params::block_symbols`].
pub const BLOCK_SYMBOLS: usize = 8;
/// Blocks between checksum symbols; see [`Params::checksum_period`].
pub const CHECKSUM_PERIOD: usize = 4;
/// Block terminator and trailer marker; see [`Params::term`].
pub const TERM: u8 = b'~';

const ALPHABET: &[u8; BASE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*_-?";
const NOISE_SET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

const PARAMS: Params = Params {
    alphabet: ALPHABET,
    noise_set: NOISE_SET,
    term: TERM,
    base: BASE,
    block_bytes: BLOCK_BYTES,
    block_symbols: BLOCK_SYMBOLS,
    checksum_period: CHECKSUM_PERIOD,
};

/// Read-only accessor for the fixed codec parameters.
///
/// Exposed for introspection only; there is nothing to configure.
pub fn params() -> &'static Params {
    &PARAMS
}

/// `true` if `c` is one of the 26 noise characters.
#[inline]
pub(crate) fn is_noise(c: u8) -> bool {
    NOISE_SET.contains(&c)
}

/// Index of `c` in the unrotated alphabet, or `None` if `c` is not a
/// member.
#[inline]
pub(crate) fn base_index_of(c: u8) -> Option<usize> {
    ALPHABET.iter().position(|&a| a == c)
}
