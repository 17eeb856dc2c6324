//! Repeating-key XOR overlay composed with the Mosaic codec.
//!
//! `encrypt_text` XORs plaintext with a repeating key and then runs it
//! through [`crate::codec::encode`]; `decrypt_text` is the exact inverse.
//! An empty key is treated uniformly as the identity transform on both
//! paths - the C reference applies this rule inconsistently (a no-op in
//! `xor_with_key` but rejected by some callers); this crate picks the
//! no-op reading everywhere.
//!
//! This overlay is not a cryptographic primitive: its only security
//! derives from the XOR key, the codec itself provides obfuscation, not
//! confidentiality, and it intentionally leaks plaintext length up to a
//! 5-byte quantization.

use crate::codec;
use crate::error::Result;
use crate::noise::NoisePolicy;

/// XOR `data` in place with `key`, repeating the key as needed. An empty
/// key is the identity.
fn xor_with_key(data: &mut [u8], key: &[u8]) {
    if key.is_empty() {
        return;
    }
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= key[i % key.len()];
    }
}

/// XOR `plaintext` with `key`, then Mosaic-encode the result.
pub fn encrypt(plaintext: &[u8], key: &[u8], noise: NoisePolicy) -> Vec<u8> {
    let mut buf = plaintext.to_vec();
    xor_with_key(&mut buf, key);
    codec::encode(&buf, noise)
}

/// Mosaic-decode `ciphertext`, then XOR the result with `key`.
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let mut buf = codec::decode(ciphertext)?;
    xor_with_key(&mut buf, key);
    Ok(buf)
}

/// String-level convenience wrapper around [`encrypt`].
///
/// `plaintext` and `key` are taken as UTF-8 text; the ciphertext is always
/// plain ASCII (the Mosaic alphabet, noise set, and terminator are all
/// ASCII), so it's returned as a `String` without further validation.
pub fn encrypt_text(plaintext: &str, key: &str) -> String {
    let out = encrypt(plaintext.as_bytes(), key.as_bytes(), NoisePolicy::None);
    // Safety note: `out` is built entirely from `Params::alphabet`,
    // `Params::noise_set`, and `Params::term`, all ASCII, so this is
    // always valid UTF-8.
    String::from_utf8(out).expect("mosaic output is always ASCII")
}

/// String-level convenience wrapper around [`decrypt`].
pub fn decrypt_text(ciphertext: &str, key: &str) -> Result<String> {
    let out = decrypt(ciphertext.as_bytes(), key.as_bytes())?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
