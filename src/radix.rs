//! Base-256 ↔ base-47 radix conversion for a single 5-byte block.
//!
//! `47^8 = 2,373,046,875,552,693,601 >= 256^5 = 1,099,511,627,776`, so a
//! 5-byte block always fits in 8 base-47 digits with slack to spare. The
//! converter itself cannot fail on well-formed input; a digit outside
//! `[0, 47)` can only arise from a programmer error at encode time or an
//! unmapped character at decode time, and the latter is caught before it
//! ever reaches [`digits_to_bytes`].

use crate::params::BASE;

/// Treat `block` as a big-endian 40-bit unsigned integer and convert it to
/// 8 base-47 digits, most significant first, via repeated long division.
pub(crate) fn bytes_to_digits(block: [u8; 5]) -> [u8; 8] {
    let mut buf = block;
    let mut digits = [0u8; 8];
    for d in (0..8).rev() {
        let mut rem: u32 = 0;
        for byte in buf.iter_mut() {
            let cur = (rem << 8) | *byte as u32;
            *byte = (cur / BASE as u32) as u8;
            rem = cur % BASE as u32;
        }
        digits[d] = rem as u8;
    }
    digits
}

/// Inverse of [`bytes_to_digits`]: fold 8 base-47 digits back into 5 raw
/// bytes via Horner's method with byte-wise carry propagation.
pub(crate) fn digits_to_bytes(digits: [u8; 8]) -> [u8; 5] {
    let mut acc = [0u8; 5];
    for &digit in digits.iter() {
        let mut carry = digit as u32;
        for byte in acc.iter_mut().rev() {
            let v = *byte as u32 * BASE as u32 + carry;
            *byte = (v & 0xFF) as u8;
            carry = v >> 8;
        }
    }
    acc
}
