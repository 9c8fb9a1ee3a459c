//! AddressBook: the top-level name-to-record mapping.

use crate::models::ContactRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A collection of contact records keyed by contact name.
///
/// The book privately owns its map and exposes only the operations below;
/// callers never work with the map directly. Names are unique keys: adding
/// a record under an existing name replaces the previous record entirely
/// (no merging of phone lists).
///
/// Iteration order is whatever the underlying map yields; it is not
/// insertion order and callers must not rely on it.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, ContactRecord};
///
/// let mut book = AddressBook::new();
/// let mut john = ContactRecord::new("John");
/// john.add_phone("1234567890").unwrap();
/// book.add_record(john);
///
/// assert!(book.find("John").is_some());
/// book.delete("John");
/// assert!(book.find("John").is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBook {
    records: HashMap<String, ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` keyed by its name.
    ///
    /// If a record with the same name already exists it is silently
    /// replaced, phones and all.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!("Replaced existing record for {}", name);
        }
    }

    /// Find the record for `name`, if any.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Find the record for `name` for in-place phone edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`. No-op if absent.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            tracing::debug!("Deleted record for {}", name);
        }
    }

    /// Iterate over all (name, record) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContactRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
