// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Deny Filter Plugin - dictionary line normalization

/// Byte order mark some editors leave at the start of a word list.
const BOM: char = '\u{feff}';

/// The only character produced by `chars`, if it produces exactly one.
#[inline]
fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Fold a single character to its canonical case.
///
/// Folding is strictly one character in, one character out so that offsets
/// computed on folded text line up with the original text. The lowercase
/// form is sent through uppercase and back so letters with several
/// lowercase variants converge (`ς` and `σ`, `ſ` and `s`). Any step that
/// would expand to several characters is skipped.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let lower = single(c.to_lowercase()).unwrap_or(c);
    single(lower.to_uppercase())
        .and_then(|upper| single(upper.to_lowercase()))
        .unwrap_or(lower)
}

/// Fold every character of `s` with [`fold_char`].
pub fn fold_str(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Turns raw dictionary lines into comparable words.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    comment_prefix: Option<String>,
}

impl Normalizer {
    pub fn new(comment_prefix: Option<&str>) -> Self {
        Self {
            comment_prefix: comment_prefix.filter(|p| !p.is_empty()).map(str::to_string),
        }
    }

    /// Canonical form of `raw`, or `None` for blank and comment lines.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == BOM);
        if trimmed.is_empty() {
            return None;
        }
        if let Some(prefix) = &self.comment_prefix
            && trimmed.starts_with(prefix.as_str())
        {
            return None;
        }
        Some(fold_str(trimmed))
    }
}

/// Normalize with the default `#` comment marker.
pub fn normalize_line(raw: &str) -> Option<String> {
    Normalizer::new(Some(crate::config::DEFAULT_COMMENT_PREFIX)).normalize(raw)
}
