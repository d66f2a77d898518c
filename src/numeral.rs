// src/numeral.rs - Positional numeral system over an arbitrary alphabet
use crate::error::{Error, Result};

/// Appends `number` to `out`, written in base `alphabet.len()` with the
/// alphabet's characters as digits, most significant digit first.
///
/// Zero is written as the single digit `alphabet[0]`.
pub fn to_id(number: u64, alphabet: &[u8], out: &mut String) {
    let base = alphabet.len() as u64;
    debug_assert!(base >= 2, "radix must be at least 2");

    // u64::MAX needs 64 digits in base 2, the smallest radix we accept
    let mut digits = [0u8; 64];
    let mut len = 0;
    let mut rest = number;
    loop {
        digits[len] = alphabet[(rest % base) as usize];
        len += 1;
        rest /= base;
        if rest == 0 {
            break;
        }
    }

    out.extend(digits[..len].iter().rev().map(|&b| char::from(b)));
}

/// Reads `digits` back as a number in base `alphabet.len()`.
///
/// ### Errors
/// * `Error::InvalidCharacter` - a digit is not in `alphabet`; the position is
///   relative to `digits`
/// * `Error::Overflow` - the value does not fit in a `u64`
pub fn to_number(digits: &[u8], alphabet: &[u8]) -> Result<u64> {
    let base = alphabet.len() as u64;

    digits.iter().enumerate().try_fold(0u64, |acc, (position, &digit)| {
        let value = alphabet
            .iter()
            .position(|&c| c == digit)
            .ok_or(Error::InvalidCharacter {
                character: char::from(digit),
                position,
            })?;

        acc.checked_mul(base)
            .and_then(|acc| acc.checked_add(value as u64))
            .ok_or(Error::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(number: u64, alphabet: &str) -> String {
        let mut out = String::new();
        to_id(number, alphabet.as_bytes(), &mut out);
        out
    }

    #[test]
    fn test_to_id_matches_plain_positional_notation() {
        assert_eq!(encode(0, "0123456789"), "0");
        assert_eq!(encode(1234, "0123456789"), "1234");
        assert_eq!(encode(255, "0123456789abcdef"), "ff");
        assert_eq!(encode(5, "01"), "101");
    }

    #[test]
    fn test_to_id_appends() {
        let mut out = String::from("x");
        to_id(42, b"0123456789", &mut out);
        assert_eq!(out, "x42");
    }

    #[test]
    fn test_to_id_max_value_binary() {
        let id = encode(u64::MAX, "01");
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c == '1'));
        assert_eq!(to_number(id.as_bytes(), b"01"), Ok(u64::MAX));
    }

    #[test]
    fn test_to_number_inverts_to_id() {
        let alphabet = "kq7Zb2Xw";
        for number in [0, 1, 7, 8, 63, 64, 1_000_000, u64::MAX] {
            let id = encode(number, alphabet);
            assert_eq!(to_number(id.as_bytes(), alphabet.as_bytes()), Ok(number));
        }
    }

    #[test]
    fn test_to_number_overflow() {
        // 2^64 in decimal
        assert_eq!(
            to_number(b"18446744073709551616", b"0123456789"),
            Err(Error::Overflow)
        );
        assert_eq!(
            to_number(b"18446744073709551615", b"0123456789"),
            Ok(u64::MAX)
        );
    }

    #[test]
    fn test_to_number_unknown_digit() {
        assert_eq!(
            to_number(b"12x4", b"0123456789"),
            Err(Error::InvalidCharacter {
                character: 'x',
                position: 2
            })
        );
    }
}
