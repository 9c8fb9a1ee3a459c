//! ContactRecord model: one contact and its phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name plus an ordered list of phone numbers.
///
/// The name is set at construction and never replaced. Phones keep
/// insertion order and may contain duplicates; every mutation goes through
/// phone validation, so the list never holds an invalid number.
///
/// # Example
///
/// ```
/// use address_book::models::ContactRecord;
///
/// let mut record = ContactRecord::new("John");
/// record.add_phone("1234567890").unwrap();
/// record.add_phone("5555555555").unwrap();
/// assert_eq!(
///     record.to_string(),
///     "Contact name: John, phones: 1234567890; 5555555555"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl ContactRecord {
    /// Create a record with the given name and no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
        }
    }

    /// Get the contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get the contact's phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `phone` and append it to the phone list.
    ///
    /// Duplicates are allowed; the same number may appear twice. On
    /// validation failure the list is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not exactly
    /// 10 digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> ValidationResult<()> {
        let phone = PhoneNumber::new(phone)?;
        tracing::debug!("Adding phone {} to contact {}", phone, self.name);
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone whose value exactly equals `phone`.
    ///
    /// All occurrences are removed, not just the first; the relative order
    /// of the remaining entries is preserved. Removing a value that is not
    /// present is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        if self.phones.len() != before {
            tracing::debug!(
                "Removed {} occurrence(s) of {} from contact {}",
                before - self.phones.len(),
                phone,
                self.name
            );
        }
    }

    /// Replace the first phone equal to `old_value` with a validated
    /// `new_value`.
    ///
    /// Returns `Ok(true)` if a match was found and replaced, `Ok(false)` if
    /// no phone equals `old_value` (the list is unchanged). Only the first
    /// match is replaced even when duplicates exist.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new_value` fails
    /// validation; the edit is aborted and the original entry kept.
    pub fn edit_phone(
        &mut self,
        old_value: &str,
        new_value: impl Into<String>,
    ) -> ValidationResult<bool> {
        match self.phones.iter().position(|p| p.as_str() == old_value) {
            Some(index) => {
                // Validate before touching the list so a failed edit
                // leaves the original entry in place.
                let replacement = PhoneNumber::new(new_value)?;
                tracing::debug!(
                    "Editing phone {} -> {} on contact {}",
                    old_value,
                    replacement,
                    self.name
                );
                self.phones[index] = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Find the first phone whose value exactly equals `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
