//! Canonicalization and tokenization of dictated text.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Trims, lowercases and strips diacritical marks (`"Guión"` becomes `"guion"`).
pub fn canonicalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Splits canonical text on runs of whitespace, dropping empty tokens.
pub fn tokenize(canonical: &str) -> Vec<&str> {
    canonical.split_whitespace().collect()
}
