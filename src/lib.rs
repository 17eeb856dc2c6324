//! **mosaic-codec** - a reversible printable-text codec over arbitrary
//! byte buffers.
//!
//! Bytes are radix-converted into a 47-symbol alphabet, framed into
//! terminator-delimited blocks whose alphabet rotates per block, checked
//! periodically with a lightweight XOR checksum, and closed with a
//! trailer that records how many zero bytes were padded onto the final
//! block. The decoder tolerates inserted noise characters and ASCII
//! whitespace between any two tokens.
//!
//! # Modules
//! | Module | Responsibility |
//! |--------|-----------------|
//! | [`params`]     | Fixed alphabet, terminator, radix, and block-size constants |
//! | [`radix`]      | Base-256 ↔ base-47 conversion for one 5-byte block |
//! | [`rotation`]   | Per-block alphabet rotation |
//! | [`noise`]      | Explicit noise-insertion policy for the encoder |
//! | [`codec`]      | The encoder/decoder: framing, checksums, trailer |
//! | [`cipher`]     | Repeating-key XOR overlay composed with the codec |
//! | [`hex_cipher`] | A simpler, unframed hex-wrapped XOR-only cipher |
//!
//! # Scope
//!
//! This crate is the codec only. The interactive prompt, command
//! dispatch, argument tokenization, help text, session-key storage, and
//! banner printing that might drive a CLI around this codec are not part
//! of it - every function here is a pure transform over byte buffers with
//! no I/O of its own.
//!
//! This is not a cryptographic primitive: the [`cipher`] overlay is
//! obfuscation, and any key security derives solely from the strength of
//! the XOR key.

pub mod cipher;
pub mod codec;
pub mod error;
pub mod hex_cipher;
pub mod noise;
pub mod params;
mod radix;
mod rotation;

pub use cipher::{decrypt_text, encrypt_text};
pub use codec::{decode, decode_into, encode, encode_into, required_encode_capacity};
pub use error::{Error, Result};
pub use noise::{NoiseGenerator, NoisePolicy};
