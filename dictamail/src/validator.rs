use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::cleanup::split_at_separator;
use crate::rewriter::is_email_char;

static DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[a-z0-9-]+\.)+[a-z]{2,}$").unwrap());

/// How plausible a normalized candidate is as an email address.
///
/// A discrete level, not a probability. Serializes as its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    /// Nothing to normalize.
    Empty,
    /// No `@` survived normalization.
    NoSeparator,
    /// Has an `@` but the local part or the domain is unusable.
    Malformed,
    /// Valid local part with a non-empty but malformed domain.
    Partial,
    /// Structurally valid email address.
    Valid,
}

impl Confidence {
    pub fn value(self) -> f64 {
        match self {
            Self::Empty => 0.0,
            Self::NoSeparator => 0.4,
            Self::Malformed => 0.6,
            Self::Partial => 0.8,
            Self::Valid => 0.99,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub is_valid: bool,
    pub confidence: Confidence,
    pub local: String,
    pub domain: String,
}

/// Scores a cleaned candidate.
pub fn validate(candidate: &str) -> Validation {
    let Some((local, domain)) = split_at_separator(candidate) else {
        return Validation {
            is_valid: false,
            confidence: Confidence::NoSeparator,
            local: String::new(),
            domain: String::new(),
        };
    };

    let local_ok = !local.is_empty() && local.chars().all(is_email_char);
    let domain_ok = DOMAIN_PATTERN.is_match(domain) && !domain.contains("..");

    let confidence = if local_ok && domain_ok {
        Confidence::Valid
    } else if local_ok && !domain.is_empty() {
        Confidence::Partial
    } else {
        Confidence::Malformed
    };

    Validation {
        is_valid: confidence == Confidence::Valid,
        confidence,
        local: local.to_string(),
        domain: domain.to_string(),
    }
}
