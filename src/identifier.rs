//! Book identifier normalization.
//!
//! Raw input comes from a text box or a barcode scanner, so it may carry
//! hyphens, stray spaces or surrounding whitespace. Everything downstream
//! (provider lookups, the record store) only ever sees a cleaned
//! [`Identifier`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// How strictly raw input is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierMode {
    /// ISBN-10 or ISBN-13 only
    #[default]
    Isbn,
    /// Any non-empty alphanumeric code (EAN/UPC scans, shop codes)
    Barcode,
}

/// A validated, normalized book identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

/// Reasons raw input could not become an [`Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Identifier is empty")]
    EmptyIdentifier,

    #[error("Invalid identifier format: {0}")]
    InvalidFormat(String),
}

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (10 or 13 for ISBNs).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize raw input into an [`Identifier`].
///
/// Leading and trailing whitespace is trimmed, then hyphens and inner
/// whitespace are removed. In [`IdentifierMode::Isbn`] the result must be
/// 10 or 13 digits; an ISBN-10 may end in an `X` check character.
pub fn normalize(raw: &str, mode: IdentifierMode) -> Result<Identifier, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyIdentifier);
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::InvalidFormat(format!(
            "'{}' contains no identifier characters",
            trimmed
        )));
    }

    match mode {
        IdentifierMode::Isbn => normalize_isbn(&cleaned).map(Identifier),
        IdentifierMode::Barcode => {
            if cleaned.chars().all(|c| c.is_ascii_alphanumeric()) {
                Ok(Identifier(cleaned))
            } else {
                Err(ValidationError::InvalidFormat(format!(
                    "'{}' contains unsupported characters",
                    trimmed
                )))
            }
        }
    }
}

fn normalize_isbn(cleaned: &str) -> Result<String, ValidationError> {
    let len = cleaned.chars().count();
    if len != 10 && len != 13 {
        return Err(ValidationError::InvalidFormat(format!(
            "expected 10 or 13 digits, got {} characters",
            len
        )));
    }

    let mut out = String::with_capacity(len);
    for (i, c) in cleaned.chars().enumerate() {
        match c {
            '0'..='9' => out.push(c),
            // ISBN-10 check character
            'X' | 'x' if len == 10 && i == 9 => out.push('X'),
            _ => {
                return Err(ValidationError::InvalidFormat(format!(
                    "unexpected character '{}'",
                    c
                )));
            }
        }
    }
    Ok(out)
}
