//! Frame encoder and decoder: framing, noise insertion/skipping, checksum
//! accumulation, and the trailer.
//!
//! ## Canonical stream format
//!
//! ```text
//! stream  := block (checksum?)  block (checksum?)  …  trailer
//! block   := symbol{8} noise? term
//! checksum:= base-symbol            -- every checksum_period blocks
//! trailer := term term base-symbol  -- pad count 0..block_bytes-1
//! ```
//!
//! `base-symbol` is looked up in the unrotated alphabet; `symbol` is looked
//! up in the alphabet rotated for the current block. Whitespace and
//! noise-set characters are permitted between any two tokens on decode.

use crate::error::{Error, Result};
use crate::noise::{NoisePolicy, NoiseSource};
use crate::params::{self, CHECKSUM_PERIOD, Params, base_index_of, is_noise};
use crate::rotation::BlockAlphabet;

/// Bytes required to hold `encode(input, noise)` for an input of length
/// `n`, per the capacity formula
/// `B·(block_symbols + 1) + ⌊B / checksum_period⌋ + 3` where
/// `B = ⌈n / block_bytes⌉`. When `noise` may emit a character, one extra
/// byte per block is reserved so the noise slot never overflows the
/// buffer.
pub fn required_encode_capacity(n: usize, noise: &NoisePolicy) -> usize {
    let p = params::params();
    let blocks = n.div_ceil(p.block_bytes);
    let mut per_block = p.block_symbols + 1; // digits + terminator
    if noise.may_emit() {
        per_block += 1;
    }
    blocks * per_block + blocks / p.checksum_period + 3
}

/// Encode `input` into the canonical Mosaic stream, returning an owned
/// buffer sized to exactly what was written.
pub fn encode(input: &[u8], noise: NoisePolicy) -> Vec<u8> {
    let needed = required_encode_capacity(input.len(), &noise);
    let mut out = vec![0u8; needed];
    let written =
        encode_into(input, &mut out, noise).expect("required_encode_capacity computed exactly");
    out.truncate(written);
    out
}

/// Encode `input` into the caller-supplied `out` buffer, returning the
/// number of bytes written or [`Error::BufferTooSmall`] if `out` is
/// undersized. A null-capacity query is modeled by passing an empty slice
/// and inspecting the error's `needed` field.
pub fn encode_into(input: &[u8], out: &mut [u8], noise: NoisePolicy) -> Result<usize> {
    let p = params::params();
    let needed = required_encode_capacity(input.len(), &noise);
    if out.len() < needed {
        return Err(Error::BufferTooSmall { needed });
    }

    let mut o = 0usize;
    let mut noise_src = NoiseSource::new(noise);
    let mut window = ChecksumWindow::new();
    let n_blocks = input.len().div_ceil(p.block_bytes);

    for b in 0..n_blocks {
        let start = b * p.block_bytes;
        let end = (start + p.block_bytes).min(input.len());
        let mut buf5 = [0u8; 5];
        buf5[..end - start].copy_from_slice(&input[start..end]);

        let digits = crate::radix::bytes_to_digits(buf5);
        let alphabet = BlockAlphabet::for_block(p, b as u64);
        for &digit in digits.iter() {
            out[o] = alphabet.encode_symbol(digit);
            o += 1;
        }

        if let Some(noise_char) = noise_src.next_for_block(b as u64) {
            out[o] = noise_char;
            o += 1;
        }

        out[o] = p.term;
        o += 1;

        window.push(buf5);
        if window.is_full(p.checksum_period) {
            out[o] = p.alphabet[window.checksum()];
            o += 1;
            window.clear();
        }
    }

    let pad = (p.block_bytes - (input.len() % p.block_bytes)) % p.block_bytes;
    out[o] = p.term;
    o += 1;
    out[o] = p.term;
    o += 1;
    out[o] = p.alphabet[pad];
    o += 1;

    Ok(o)
}

/// Decode a Mosaic stream into an owned buffer.
///
/// Decoded output is never larger than `input.len()` bytes (each block
/// maps at least 9 input characters to 5 output bytes), so that bound is
/// used as the scratch capacity; the result is truncated to the actual
/// decoded length.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = vec![0u8; input.len()];
    let n = decode_into(input, &mut out)?;
    out.truncate(n);
    Ok(out)
}

/// Decode a Mosaic stream into the caller-supplied `out` buffer, returning
/// the number of bytes written.
///
/// Fails with the first error encountered; see [`Error`] for the full
/// taxonomy. The decoder never attempts recovery.
pub fn decode_into(input: &[u8], out: &mut [u8]) -> Result<usize> {
    let p = params::params();
    let mut i = 0usize;
    let mut o = 0usize;
    let mut b: u64 = 0;
    let mut window = ChecksumWindow::new();

    loop {
        skip_filler(p, input, &mut i);

        if i >= input.len() {
            return Err(Error::MissingTrailer);
        }

        if input[i] == p.term && input.get(i + 1) == Some(&p.term) {
            let pad_char = *input.get(i + 2).ok_or(Error::BadTrailer)?;
            let pad = base_index_of(pad_char).ok_or(Error::BadTrailer)?;
            if pad >= p.block_bytes || pad > o {
                return Err(Error::BadTrailer);
            }
            if i + 3 != input.len() {
                return Err(Error::TrailingGarbage);
            }
            return Ok(o - pad);
        }

        let alphabet = BlockAlphabet::for_block(p, b);
        let mut digits = [0u8; 8];
        for digit in digits.iter_mut() {
            skip_filler(p, input, &mut i);
            let c = *input.get(i).ok_or(Error::MissingTrailer)?;
            if c == p.term {
                return Err(Error::ShortBlock);
            }
            *digit = alphabet.decode_symbol(c).ok_or(Error::InvalidCharacter)?;
            i += 1;
        }

        skip_filler(p, input, &mut i);
        match input.get(i) {
            Some(&c) if c == p.term => i += 1,
            Some(_) => return Err(Error::MissingTerminator),
            None => return Err(Error::MissingTrailer),
        }

        let block5 = crate::radix::digits_to_bytes(digits);
        if o + p.block_bytes > out.len() {
            return Err(Error::BufferTooSmall {
                needed: o + p.block_bytes,
            });
        }
        out[o..o + p.block_bytes].copy_from_slice(&block5);
        o += p.block_bytes;

        window.push(block5);
        b += 1;

        if window.is_full(p.checksum_period) {
            skip_filler(p, input, &mut i);
            let chk_char = *input.get(i).ok_or(Error::MissingTrailer)?;
            i += 1;
            let got = base_index_of(chk_char).ok_or(Error::InvalidCharacter)?;
            if got != window.checksum() {
                return Err(Error::ChecksumMismatch);
            }
            window.clear();
        }
    }
}

/// Skip any run of ASCII whitespace and/or noise-set characters. Both are
/// legal filler between any two tokens, per the canonical grammar.
fn skip_filler(p: &Params, input: &[u8], i: &mut usize) {
    while let Some(&c) = input.get(*i) {
        if c.is_ascii_whitespace() || is_noise(c) {
            *i += 1;
        } else {
            break;
        }
    }
}

/// Up to `checksum_period` 5-byte blocks accumulated for integrity
/// verification. Fixed-size: the checksum window never scales with input,
/// matching the `O(1)` interior working-set bound.
struct ChecksumWindow {
    blocks: [[u8; 5]; CHECKSUM_PERIOD],
    len: usize,
}

impl ChecksumWindow {
    fn new() -> Self {
        Self {
            blocks: [[0; 5]; CHECKSUM_PERIOD],
            len: 0,
        }
    }

    fn push(&mut self, block: [u8; 5]) {
        self.blocks[self.len] = block;
        self.len += 1;
    }

    fn is_full(&self, period: usize) -> bool {
        self.len == period
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    /// `(XOR of all bytes in the window's blocks) mod 47`. XOR is
    /// order-independent, so the window's insertion order doesn't matter.
    fn checksum(&self) -> usize {
        let mut x: u32 = 0;
        for block in &self.blocks[..self.len] {
            for &byte in block {
                x ^= byte as u32;
            }
        }
        (x % params::BASE as u32) as usize
    }
}
