//! Hex-wrapped XOR-only cipher.
//!
//! A second, simpler cipher supplementing the Mosaic codec: XOR the
//! plaintext with a repeating key, then hex-encode the result (and the
//! inverse on decode). It shares the same `(plaintext, key) -> ciphertext`
//! / `(ciphertext, key) -> Result<plaintext>` shape as
//! [`crate::cipher::encrypt_text`]/[`crate::cipher::decrypt_text`] so a
//! caller can select between the two ciphers behind one interface.
//!
//! Like the Mosaic overlay, an empty key is treated as the identity
//! transform; unlike the Mosaic overlay, the default-key substitution seen
//! in the reference implementation is left entirely to the caller - this
//! module never silently substitutes a key.

use crate::error::HexDecodeError;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn xor_with_key(data: &mut [u8], key: &[u8]) {
    if key.is_empty() {
        return;
    }
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= key[i % key.len()];
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(10 + c - b'a'),
        b'A'..=b'F' => Some(10 + c - b'A'),
        _ => None,
    }
}

/// XOR `plaintext` with `key`, then hex-encode the result (uppercase
/// digits).
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> String {
    let mut buf = plaintext.to_vec();
    xor_with_key(&mut buf, key);

    let mut out = String::with_capacity(buf.len() * 2);
    for byte in buf {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    out
}

/// Hex-decode `ciphertext`, then XOR the result with `key`.
pub fn decrypt(ciphertext: &str, key: &[u8]) -> Result<Vec<u8>, HexDecodeError> {
    let bytes = ciphertext.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(HexDecodeError::OddLength);
    }

    let mut out = Vec::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks_exact(2) {
        let hi = hex_value(pair[0]).ok_or(HexDecodeError::InvalidHexDigit)?;
        let lo = hex_value(pair[1]).ok_or(HexDecodeError::InvalidHexDigit)?;
        out.push((hi << 4) | lo);
    }

    xor_with_key(&mut out, key);
    Ok(out)
}

/// String-level convenience wrapper around [`encrypt`].
pub fn encrypt_text(plaintext: &str, key: &str) -> String {
    encrypt(plaintext.as_bytes(), key.as_bytes())
}

/// String-level convenience wrapper around [`decrypt`].
///
/// Returns the decoded bytes lossily converted to UTF-8, matching
/// [`crate::cipher::decrypt_text`]'s convention.
pub fn decrypt_text(ciphertext: &str, key: &str) -> Result<String, HexDecodeError> {
    let out = decrypt(ciphertext, key.as_bytes())?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
