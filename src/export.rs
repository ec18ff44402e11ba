//! CSV export of the record store.
//!
//! Output is UTF-8 with a fixed header row and one row per record in store
//! order. Quoting follows the usual CSV rules: values containing a comma,
//! quote or line break are wrapped in quotes and inner quotes are doubled.

use crate::catalog::BookRecord;
use crate::error::Result;

/// Suggested download filename
pub const EXPORT_FILENAME: &str = "books.csv";

/// MIME type of [`render`] output
pub const EXPORT_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Column order of the export
pub const HEADER: [&str; 5] = ["identifier", "title", "authors", "publisher", "publishedDate"];

/// Render `records` as CSV bytes.
pub fn render(records: &[BookRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record([
            record.identifier.as_str(),
            record.title.as_str(),
            record.authors.as_str(),
            record.publisher.as_str(),
            record.published_date.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| crate::error::Error::Io(e.into_error()))
}
