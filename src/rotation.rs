//! Per-block alphabet rotation.
//!
//! Rotation decorrelates identical plaintext blocks visually; it carries no
//! integrity information and needs no side channel, since it is
//! deterministic in the block index alone.

use crate::params::{self, BASE, Params};

/// `r = (13·b + 11) mod 47`.
///
/// 13 and 11 are both coprime with 47 (47 is prime), so as `b` ranges over
/// the naturals this schedule visits all 47 residues.
pub(crate) fn rotation_for(b: u64) -> usize {
    (((b % BASE as u64) * 13 + 11) % BASE as u64) as usize
}

/// The alphabet rotated left by `r`: `rotated[i] = alphabet[(i + r) % 47]`.
pub(crate) fn rotate(alphabet: &[u8; BASE], r: usize) -> [u8; BASE] {
    let mut out = [0u8; BASE];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = alphabet[(i + r) % BASE];
    }
    out
}

/// A rotated alphabet for one block, plus its reverse (character → digit)
/// map. Implementations precompute this once per block rather than per
/// symbol.
pub(crate) struct BlockAlphabet {
    rotated: [u8; BASE],
}

impl BlockAlphabet {
    pub(crate) fn for_block(params: &Params, b: u64) -> Self {
        let r = rotation_for(b);
        Self {
            rotated: rotate(params.alphabet, r),
        }
    }

    /// `symbol = alphabet[(digit + r) mod 47]`.
    pub(crate) fn encode_symbol(&self, digit: u8) -> u8 {
        self.rotated[digit as usize]
    }

    /// `digit = index_in_rotated_alphabet(symbol)`, or `None` if `c` is not
    /// a member of this block's rotated alphabet.
    pub(crate) fn decode_symbol(&self, c: u8) -> Option<u8> {
        self.rotated.iter().position(|&a| a == c).map(|i| i as u8)
    }
}
