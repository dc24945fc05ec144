// src/strings/string_utils.rs

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::core::errors::Result;
use crate::strings::patterns::{create_regex, split_keeping_separators, split_non_empty};

pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyzàáâãäåæçèéêëìíîïñòóôõöøùúûüýÿœ";
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÑÒÓÔÕÖØÙÚÛÜÝŸŒ";
pub const NUMBERS: &str = "0123456789";
pub const PUNCT: &str = "!'#$%&\"()*+-,./:;<=>?@[\\]^_`{|}~ ";

lazy_static! {
    static ref WORD_SEPARATOR: Regex = Regex::new(r" *[.!?, ] *").unwrap();
    static ref SENTENCE_SEPARATOR: Regex = Regex::new(r" *[.!?] *").unwrap();
}

/******************** STRING UTILS ********************/

/// Strips combining accents (U+0300..U+036F) after canonical decomposition.
pub fn remove_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !('\u{0300}'..='\u{036f}').contains(c)).collect()
}

/// Removes every punctuation character except those listed in `except`.
pub fn remove_punctuation(text: &str, except: &str) -> Result<String> {
    Ok(match create_regex(PUNCT, except)? {
        Some(regex) => regex.replace_all(text, "").into_owned(),
        None => text.to_string(),
    })
}

/******************** STRING CHECKERS ********************/

fn is_lowercase_char(c: char) -> bool {
    c.to_lowercase().eq(std::iter::once(c))
}

fn is_uppercase_char(c: char) -> bool {
    c.to_uppercase().eq(std::iter::once(c))
}

fn all_in(text: &str, alphabet: impl Fn(char) -> bool) -> bool {
    !text.is_empty() && text.chars().all(alphabet)
}

/// Lenient mode: no character changes when lowercased ("hello!" passes).
/// Strict mode: only lowercase letters.
pub fn is_lower(text: &str, strict: bool) -> bool {
    if strict {
        all_in(text, |c| LOWER.contains(c))
    } else {
        text.chars().all(is_lowercase_char)
    }
}

/// Lenient mode: no character changes when uppercased ("HELLO!" passes).
/// Strict mode: only uppercase letters.
pub fn is_upper(text: &str, strict: bool) -> bool {
    if strict {
        all_in(text, |c| UPPER.contains(c))
    } else {
        text.chars().all(is_uppercase_char)
    }
}

pub fn is_alpha(text: &str) -> bool {
    all_in(text, |c| LOWER.contains(c) || UPPER.contains(c))
}

pub fn is_alnum(text: &str) -> bool {
    all_in(text, |c| LOWER.contains(c) || UPPER.contains(c) || NUMBERS.contains(c))
}

pub fn is_punct(text: &str) -> bool {
    all_in(text, |c| PUNCT.contains(c))
}

/// Whether `text` parses as a number (infinities included, NaN excluded).
pub fn is_num(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().map_or(false, |n| !n.is_nan())
}

/******************** STRING CASE ********************/

fn capitalize(piece: &str) -> String {
    let mut chars = piece.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Capitalizes every word.
pub fn to_title_case(text: &str) -> String {
    split_keeping_separators(text, &WORD_SEPARATOR)
        .into_iter()
        .map(capitalize)
        .collect()
}

/// Capitalizes every sentence.
pub fn to_sentence_case(text: &str) -> String {
    split_keeping_separators(text, &SENTENCE_SEPARATOR)
        .into_iter()
        .map(capitalize)
        .collect()
}

pub fn swap_case(text: &str) -> String {
    text.chars()
        .flat_map(|c| -> Box<dyn Iterator<Item = char>> {
            if is_uppercase_char(c) {
                Box::new(c.to_lowercase())
            } else {
                Box::new(c.to_uppercase())
            }
        })
        .collect()
}

/// Words of `text` for the case converters: diacritics removed, split on punctuation
/// (minus `except`), empty pieces dropped.
fn words(text: &str, except: &str) -> Result<Vec<String>> {
    let cleaned = remove_diacritics(text);
    let separator = create_regex(PUNCT, except)?;
    Ok(split_non_empty(&cleaned, separator.as_ref())
        .into_iter()
        .map(str::to_string)
        .collect())
}

pub fn to_camel_case(text: &str, except: &str) -> Result<String> {
    Ok(words(text, except)?
        .iter()
        .enumerate()
        .map(|(i, word)| if i == 0 { word.to_lowercase() } else { to_title_case(word) })
        .collect())
}

pub fn to_snake_case(text: &str, except: &str) -> Result<String> {
    Ok(words(&text.to_lowercase(), except)?.join("_"))
}

pub fn to_kebab_case(text: &str, except: &str) -> Result<String> {
    Ok(words(&text.to_lowercase(), except)?.join("-"))
}

pub fn to_pascal_case(text: &str, except: &str) -> Result<String> {
    Ok(words(&text.to_lowercase(), except)?
        .iter()
        .map(|word| to_title_case(word))
        .collect())
}

/******************** STRING MANIPULATION ********************/

/// Removes the characters in `start..end`; `end` defaults to `start + 1`.
pub fn cut(text: &str, start: usize, end: Option<usize>) -> String {
    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.unwrap_or(start + 1).clamp(start, chars.len());
    chars[..start].iter().chain(chars[end..].iter()).collect()
}

/// Centers `text` in `length` characters, extra fill going to the right.
pub fn pad_center(text: &str, length: usize, fill: &str) -> String {
    let size = text.chars().count();
    if length <= size {
        return text.to_string();
    }
    let left = (length - size) / 2;
    let right = length - size - left;
    format!("{}{}{}", fill.repeat(left), text, fill.repeat(right))
}

/// Trims and collapses every whitespace run into one space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes any of `chars` from both ends.
pub fn trim(text: &str, chars: &str) -> String {
    text.trim_matches(|c: char| chars.contains(c)).to_string()
}

/// Alphabet position of the first character: 1 for A, 26 for Z, accents ignored.
/// Later characters are not read; `None` when the first one is not a letter.
pub fn get_alphabet_position(letter: &str) -> Option<u32> {
    let first = remove_diacritics(&letter.to_uppercase()).chars().next()?;
    if first.is_ascii_uppercase() {
        Some(first as u32 - 'A' as u32 + 1)
    } else {
        None
    }
}
