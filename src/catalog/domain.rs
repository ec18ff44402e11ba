//! Internal domain models for catalog lookups.
//!
//! These types are OUR types - they don't change when a catalog API changes.
//! Every provider response gets converted into a [`CatalogEntry`] by that
//! provider's adapter.

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Book metadata as reported by a single catalog.
///
/// Fields the provider didn't report are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    /// Comma-joined author names
    pub authors: String,
    pub publisher: String,
    pub published_date: String,
}

impl CatalogEntry {
    /// True when the provider reported nothing useful.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.authors.is_empty()
            && self.publisher.is_empty()
            && self.published_date.is_empty()
    }
}

/// Which catalog an answer came from. Declaration order is lookup priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CatalogSource {
    GoogleBooks,
    Rakuten,
    OpenBd,
}

impl CatalogSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GoogleBooks => "Google Books",
            Self::Rakuten => "Rakuten Books",
            Self::OpenBd => "openBD",
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of asking one catalog about one identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    /// The catalog knows this book
    Hit(CatalogEntry),
    /// The catalog answered but has no match
    Miss,
    /// The catalog couldn't be asked or didn't answer usefully
    Unavailable(CatalogError),
}

impl From<Result<Option<CatalogEntry>, CatalogError>> for ProviderOutcome {
    fn from(result: Result<Option<CatalogEntry>, CatalogError>) -> Self {
        match result {
            Ok(Some(entry)) if !entry.is_empty() => Self::Hit(entry),
            Ok(_) => Self::Miss,
            Err(e) => Self::Unavailable(e),
        }
    }
}

/// A resolved book, ready for the record store and export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookRecord {
    #[serde(alias = "isbn")]
    pub identifier: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub published_date: String,
}

impl BookRecord {
    /// An empty record for `identifier`, used as the merge accumulator.
    pub fn seeded(identifier: &Identifier) -> Self {
        Self {
            identifier: identifier.to_string(),
            ..Default::default()
        }
    }

    /// A record carrying exactly one catalog's answer.
    pub fn from_entry(identifier: &Identifier, entry: CatalogEntry) -> Self {
        Self {
            identifier: identifier.to_string(),
            title: entry.title,
            authors: entry.authors,
            publisher: entry.publisher,
            published_date: entry.published_date,
        }
    }

    /// Fill empty fields from `entry`, never overwriting existing values.
    pub fn fill_from(&mut self, entry: &CatalogEntry) {
        fill(&mut self.title, &entry.title);
        fill(&mut self.authors, &entry.authors);
        fill(&mut self.publisher, &entry.publisher);
        fill(&mut self.published_date, &entry.published_date);
    }

    /// True when nothing besides the identifier is known.
    pub fn has_no_metadata(&self) -> bool {
        self.title.is_empty()
            && self.authors.is_empty()
            && self.publisher.is_empty()
            && self.published_date.is_empty()
    }
}

fn fill(slot: &mut String, value: &str) {
    if slot.is_empty() && !value.is_empty() {
        *slot = value.to_string();
    }
}

/// Errors that make a catalog unavailable for one lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u128),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),
}

impl CatalogError {
    /// Map a reqwest failure, keeping timeouts distinguishable.
    pub fn from_reqwest(e: reqwest::Error, timeout: std::time::Duration) -> Self {
        if e.is_timeout() {
            Self::Timeout(timeout.as_millis())
        } else if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
