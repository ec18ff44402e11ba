//! In-memory record store.
//!
//! Holds every confirmed [`BookRecord`] for the life of the process, in the
//! order they were appended. There is no update or delete, and re-confirming
//! an identifier appends a second row.

use parking_lot::Mutex;

use crate::catalog::BookRecord;

/// Append-only, insertion-ordered collection of book records.
///
/// Share it behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Mutex<Vec<BookRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end of the store.
    ///
    /// Records without an identifier are refused; returns whether the
    /// record was stored.
    pub fn append(&self, record: BookRecord) -> bool {
        if record.identifier.trim().is_empty() {
            tracing::warn!(title = %record.title, "Refusing to store record without identifier");
            return false;
        }
        let mut records = self.records.lock();
        records.push(record);
        tracing::debug!(count = records.len(), "Appended record");
        true
    }

    /// Copy of the current contents, oldest first.
    ///
    /// Later appends don't affect the returned vector.
    pub fn snapshot(&self) -> Vec<BookRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}
