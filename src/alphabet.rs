// src/alphabet.rs - Alphabet validation and the deterministic shuffle
use crate::error::{Error, Result};

/// Alphabet used when none is configured
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Smallest alphabet that still leaves a separator plus a two-digit radix
pub const MIN_ALPHABET_LENGTH: usize = 3;

/// Checks that `alphabet` is usable and returns its characters as bytes.
///
/// ### Errors
/// * `Error::AlphabetNotAscii` - a character is not printable ASCII
/// * `Error::DuplicateCharacter` - a character appears twice
/// * `Error::AlphabetTooShort` - fewer than [`MIN_ALPHABET_LENGTH`] characters
pub fn validate(alphabet: &str) -> Result<Vec<u8>> {
    let mut seen = [false; 128];
    let mut chars = Vec::with_capacity(alphabet.len());

    for c in alphabet.chars() {
        if !c.is_ascii_graphic() {
            return Err(Error::AlphabetNotAscii(c));
        }
        let byte = c as u8;
        if seen[byte as usize] {
            return Err(Error::DuplicateCharacter(c));
        }
        seen[byte as usize] = true;
        chars.push(byte);
    }

    if chars.len() < MIN_ALPHABET_LENGTH {
        return Err(Error::AlphabetTooShort {
            min: MIN_ALPHABET_LENGTH,
            len: chars.len(),
        });
    }

    Ok(chars)
}

/// Permutes `alphabet` in place.
///
/// Walks `i` forward and `j` backward, swapping `i` with a pivot derived from
/// both indices and the two characters currently at them. The result depends
/// only on the input order, so applying it to equal alphabets always yields
/// equal alphabets.
pub fn shuffle(alphabet: &mut [u8]) {
    let len = alphabet.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let j = len - 1 - i;
        let pivot = (i * j + alphabet[i] as usize + alphabet[j] as usize) % len;
        alphabet.swap(i, pivot);
    }
}
