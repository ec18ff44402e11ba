//! openBD API Data Transfer Objects
//!
//! `/get` answers with one array slot per requested ISBN; unknown ISBNs are
//! `null`. We always request exactly one.
//! DO NOT use these types outside the openbd module - convert to domain types.
//!
//! Example response:
//! ```json
//! [{
//!   "summary": {
//!     "isbn": "9784798157112",
//!     "title": "Book Title",
//!     "author": "Author",
//!     "publisher": "Publisher",
//!     "pubdate": "20200101"
//!   }
//! }]
//! ```

use serde::{Deserialize, Serialize};

/// Top-level `/get` response
pub type GetResponse = Vec<Option<Record>>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Record {
    #[serde(default)]
    pub summary: Summary,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Summary {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub pubdate: Option<String>,
}
