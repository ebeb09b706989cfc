// src/text.rs
//! Text normalization and tokenization used by the similarity scorer.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const AUTHOR_DELIMITERS: &[char] = &[';', ','];
pub const KEYWORD_DELIMITERS: &[char] = &[';', ',', '|'];

static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Strips diacritics, lowercases and reduces every non-alphanumeric run to one space.
///
/// Letters that do not decompose to ASCII (e.g. `ß`, `ø`) act as separators.
#[must_use]
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped: String = text.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = stripped.to_lowercase();
    NON_ALNUM_RE.replace_all(&lowered, " ").trim().to_string()
}

/// Splits already-normalized text into its set of unique tokens.
#[must_use]
pub fn tokenize(normalized: &str) -> HashSet<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}

/// Splits a delimited field (authors, keywords) into trimmed, non-empty parts.
#[must_use]
pub fn split_delimited_list(raw: &str, delimiters: &[char], normalize_each: bool) -> Vec<String> {
    raw.split(delimiters)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            if normalize_each {
                normalize(part)
            } else {
                part.to_string()
            }
        })
        .collect()
}

#[must_use]
pub fn split_authors(raw: &str) -> Vec<String> {
    split_delimited_list(raw, AUTHOR_DELIMITERS, true)
}

#[must_use]
pub fn split_keywords(raw: &str) -> Vec<String> {
    split_delimited_list(raw, KEYWORD_DELIMITERS, true)
}
