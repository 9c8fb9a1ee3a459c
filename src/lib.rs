//! Address Book - an in-memory personal address book with validated phone numbers.
//!
//! This library models named contacts, each holding zero or more validated
//! phone numbers, stored in a lookup structure keyed by name. Phone numbers
//! are validated at construction time (exactly 10 decimal digits) so an
//! invalid number is never observable state.
//!
//! # Architecture
//!
//! - **domain**: Value objects (`PhoneNumber`, `ContactName`) with
//!   construction-time validation
//! - **models**: `ContactRecord` aggregating a name and its phone list
//! - **book**: `AddressBook`, the name-to-record mapping
//!
//! The library is synchronous and single-threaded by design; embedders in a
//! concurrent context are responsible for serializing access to a given
//! `AddressBook`.
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, ContactRecord};
//!
//! let mut book = AddressBook::new();
//!
//! let mut john = ContactRecord::new("John");
//! john.add_phone("1234567890").unwrap();
//! john.add_phone("5555555555").unwrap();
//! book.add_record(john);
//!
//! let john = book.find_mut("John").unwrap();
//! assert!(john.edit_phone("1234567890", "1112223333").unwrap());
//! assert_eq!(
//!     john.to_string(),
//!     "Contact name: John, phones: 1112223333; 5555555555"
//! );
//! ```

// Re-export commonly used types
pub mod book;
pub mod domain;
pub mod models;

pub use book::AddressBook;
pub use domain::{ContactName, PhoneNumber, ValidationError, ValidationResult};
pub use models::ContactRecord;
