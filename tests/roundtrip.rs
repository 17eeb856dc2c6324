use mosaic_codec::{Error, NoisePolicy, decode, decrypt_text, encode, encrypt_text};

fn sample_inputs() -> Vec<Vec<u8>> {
    let mut inputs = vec![Vec::new()];
    for len in [1usize, 2, 3, 4, 5, 6, 9, 10, 19, 20, 21, 50, 257] {
        inputs.push((0..len).map(|i| (i * 31 + 7) as u8).collect());
    }
    inputs
}

#[test]
fn round_trip_law_holds_for_every_non_empty_key() {
    for input in sample_inputs() {
        for key in [b"k".as_slice(), b"longer-key-material", b"\x00\x01\x02"] {
            let ciphertext = mosaic_codec::cipher::encrypt(&input, key, NoisePolicy::None);
            let recovered = mosaic_codec::cipher::decrypt(&ciphertext, key).unwrap();
            assert_eq!(recovered, input);
        }
    }
}

#[test]
fn identity_key_law_holds() {
    for input in sample_inputs() {
        let encoded = encode(&input, NoisePolicy::None);
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded, input);
    }
}

#[test]
fn capacity_is_exact_for_deterministic_encoder() {
    for input in sample_inputs() {
        let encoded = encode(&input, NoisePolicy::None);
        assert_eq!(
            encoded.len(),
            mosaic_codec::required_encode_capacity(input.len(), &NoisePolicy::None)
        );
    }
}

#[test]
fn noise_inserted_anywhere_outside_the_trailer_is_transparent() {
    for input in sample_inputs() {
        let clean = encode(&input, NoisePolicy::None);
        // Insert noise right after every block terminator - a safe
        // inter-token position. The trailer's own 3 bytes are carved out
        // entirely, since noise is only guaranteed transparent outside it.
        let trailer_start = clean.len() - 3;
        let mut noisy = Vec::new();
        for idx in 0..trailer_start {
            noisy.push(clean[idx]);
            if clean[idx] == b'~' {
                noisy.extend_from_slice(b"qzt");
            }
        }
        noisy.extend_from_slice(&clean[trailer_start..]);
        assert_eq!(decode(&noisy).unwrap(), decode(&clean).unwrap());
    }
}

#[test]
fn whitespace_inserted_between_tokens_is_transparent() {
    // The trailer's 3 bytes are one atomic grammar token (`term term
    // base-symbol`), so - exactly like noise - whitespace tolerance is
    // only guaranteed between tokens, not inside it.
    for input in sample_inputs() {
        let clean = encode(&input, NoisePolicy::None);
        let trailer_start = clean.len() - 3;
        let mut spaced = Vec::new();
        for &c in &clean[..trailer_start] {
            spaced.push(b'\n');
            spaced.push(c);
            spaced.push(b' ');
        }
        spaced.extend_from_slice(&clean[trailer_start..]);
        assert_eq!(decode(&spaced).unwrap(), decode(&clean).unwrap());
    }
}

#[test]
fn checksum_detects_corruption_in_checksum_symbol_and_every_payload_byte() {
    let input: Vec<u8> = (0..20u8).collect(); // 4 blocks, one checksum window
    let clean = encode(&input, NoisePolicy::None);

    // The checksum symbol is the 37th byte (index 36): 4 blocks * 9 bytes.
    let checksum_pos = 36;
    for &candidate in mosaic_codec::params::params().alphabet.iter() {
        if candidate == clean[checksum_pos] {
            continue;
        }
        let mut mutated = clean.clone();
        mutated[checksum_pos] = candidate;
        assert_eq!(decode(&mutated), Err(Error::ChecksumMismatch));
    }

    // Every byte position within the first checksummed window (blocks 0-3,
    // bytes 0..36) fails to decode once corrupted to a byte outside the
    // alphabet/noise/terminator set entirely (`\0` is never a legal stream
    // character), so the failure is deterministic rather than merely
    // "high probability". Each block is 9 bytes: 8 symbols then one
    // terminator; corrupting a terminator surfaces as a framing failure
    // instead of an unmapped-character failure.
    for pos in 0..checksum_pos {
        let mut mutated = clean.clone();
        mutated[pos] = 0x00;
        let is_terminator_slot = pos % 9 == 8;
        let expected = if is_terminator_slot {
            Error::MissingTerminator
        } else {
            Error::InvalidCharacter
        };
        assert_eq!(decode(&mutated), Err(expected));
    }
}

#[test]
fn trailer_truncation_is_detected() {
    let clean = encode(b"Hello", NoisePolicy::None);
    for cut in 1..=3 {
        let truncated = &clean[..clean.len() - cut];
        let result = decode(truncated);
        assert!(matches!(
            result,
            Err(Error::MissingTrailer) | Err(Error::BadTrailer)
        ));
    }
}

#[test]
fn boundary_lengths_one_through_four_have_correct_pad_count() {
    for n in 1..=4usize {
        let input: Vec<u8> = (1..=n as u8).collect();
        let encoded = encode(&input, NoisePolicy::None);
        // Exactly one block: 8 symbols + terminator + trailer(3).
        assert_eq!(encoded.len(), 8 + 1 + 3);
        assert_eq!(decode(&encoded).unwrap(), input);
    }
}

#[test]
fn length_multiple_of_five_has_zero_pad_digit() {
    for blocks in 1..=5usize {
        let input = vec![0x42u8; blocks * 5];
        let encoded = encode(&input, NoisePolicy::None);
        assert_eq!(*encoded.last().unwrap(), b'A');
        assert_eq!(decode(&encoded).unwrap(), input);
    }
}

#[test]
fn crossing_a_checksum_boundary_places_the_symbol_correctly() {
    let input = vec![5u8; 20]; // exactly 4 blocks
    let encoded = encode(&input, NoisePolicy::None);
    assert_eq!(encoded.len(), 4 * 9 + 1 + 3);
    // The checksum symbol sits between block 4's terminator and the trailer.
    assert!(
        mosaic_codec::params::params()
            .alphabet
            .contains(&encoded[36])
    );
    assert_eq!(decode(&encoded).unwrap(), input);
}

#[test]
fn text_overlay_round_trips_and_differs_from_plain_codec() {
    let plaintext = "the quick brown fox";
    let key = "k";
    let ciphertext = encrypt_text(plaintext, key);
    assert_eq!(decrypt_text(&ciphertext, key).unwrap(), plaintext);

    let plain_encoded = encode(plaintext.as_bytes(), NoisePolicy::None);
    assert_ne!(ciphertext.into_bytes(), plain_encoded);
}
