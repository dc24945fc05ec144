// src/crypto/cipher.rs
//
// Classical letter-shift ciphers. Only ASCII letters are shifted; everything else
// passes through unchanged.

use crate::core::errors::{Result, SundriesError};
use crate::strings::string_utils::remove_diacritics;

pub const DEFAULT_CAESAR_SHIFT: i64 = 13;

fn shift_letter(c: char, shift: u8) -> char {
    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    (((c as u8 - base + shift) % 26) + base) as char
}

/// Vigenère cipher. Diacritics are removed from `message` first.
///
/// Each letter is shifted by the next key letter (case-insensitive); non-letters are copied
/// and do not consume a key position. Set `decode` to reverse the shift.
pub fn vigenere(message: &str, key: &str, decode: bool) -> Result<String> {
    let shifts: Vec<u8> = key
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase() as u8 - b'a')
        .collect();
    if shifts.is_empty() {
        return Err(SundriesError::type_violation(
            "The key argument must contain at least one ASCII letter.",
        ));
    }

    let mut position = 0;
    let encoded = remove_diacritics(message)
        .chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let shift = shifts[position % shifts.len()];
            position += 1;
            shift_letter(c, if decode { 26 - shift } else { shift })
        })
        .collect();
    Ok(encoded)
}

/// Caesar cipher: every ASCII letter moved `shift` places (any integer, taken modulo 26).
/// Decoding is `caesar(message, -shift)`; with the default 13 the cipher is its own inverse.
pub fn caesar(message: &str, shift: i64) -> String {
    let shift = shift.rem_euclid(26) as u8;
    message
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { shift_letter(c, shift) } else { c })
        .collect()
}
