// src/strings/patterns.rs

use regex::Regex;

use crate::core::errors::Result;
use crate::sets::set_algebra::without_str;

/// Backslash-escapes every regex meta character in `text`.
pub fn escape_regex(text: &str) -> String {
    regex::escape(text)
}

/// `[chars of match_chars without except]+`, or `None` when nothing is left to match.
pub fn create_regex(match_chars: &str, except: &str) -> Result<Option<Regex>> {
    let except: Vec<char> = except.chars().collect();
    let remaining = without_str(match_chars, &except);
    if remaining.is_empty() {
        return Ok(None);
    }
    let pattern = format!("[{}]+", escape_regex(&remaining));
    Ok(Some(Regex::new(&pattern)?))
}

/// Splits `text` on `pattern` and drops the empty pieces. With no pattern the text is one piece.
pub fn split_non_empty<'a>(text: &'a str, pattern: Option<&Regex>) -> Vec<&'a str> {
    match pattern {
        Some(regex) => regex.split(text).filter(|piece| !piece.is_empty()).collect(),
        None if text.is_empty() => Vec::new(),
        None => vec![text],
    }
}

/// Splits `text` on `regex`, keeping the separators as pieces of their own.
pub fn split_keeping_separators<'a>(text: &'a str, regex: &Regex) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for found in regex.find_iter(text) {
        pieces.push(&text[last..found.start()]);
        pieces.push(found.as_str());
        last = found.end();
    }
    pieces.push(&text[last..]);
    pieces.retain(|piece| !piece.is_empty());
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_regex() {
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("plain"), "plain");
    }

    #[test]
    fn test_create_regex() {
        let regex = create_regex("-,. ", "").unwrap().unwrap();
        assert_eq!(regex.replace_all("a - b, c.", "_"), "a_b_c_");

        let keep_comma = create_regex("-,. ", ",").unwrap().unwrap();
        assert_eq!(keep_comma.replace_all("a, b", ""), "a,b");

        assert!(create_regex("ab", "ba").unwrap().is_none());
    }

    #[test]
    fn test_create_regex_handles_class_meta_characters() {
        let regex = create_regex("[]^\\-&~", "").unwrap().unwrap();
        assert!(regex.is_match("^"));
        assert!(regex.is_match("]"));
        assert!(regex.is_match("\\"));
        assert!(!regex.is_match("a"));
    }

    #[test]
    fn test_split_keeping_separators() {
        let regex = Regex::new(" *[,!] *").unwrap();
        assert_eq!(split_keeping_separators("hello, world !", &regex), vec!["hello", ", ", "world", " !"]);
        assert!(split_keeping_separators("", &regex).is_empty());
    }

    #[test]
    fn test_split_non_empty() {
        let regex = Regex::new("[ ,]+").unwrap();
        assert_eq!(split_non_empty(", a ,b ", Some(&regex)), vec!["a", "b"]);
        assert_eq!(split_non_empty("ab", None), vec!["ab"]);
        assert!(split_non_empty("", None).is_empty());
    }
}
