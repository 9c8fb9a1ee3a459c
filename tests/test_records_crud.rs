//! Integration tests for ContactRecord phone CRUD operations.
//!
//! These tests validate adding, removing, editing, and finding phone
//! numbers on a record, including the validation-failure paths that must
//! leave the record untouched.

use address_book::{ContactRecord, ValidationError};

fn record_with_phones(name: &str, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(name);
    for phone in phones {
        record
            .add_phone(*phone)
            .unwrap_or_else(|e| panic!("fixture phone {} rejected: {}", phone, e));
    }
    record
}

#[test]
fn test_valid_phones_render_unchanged() {
    for value in ["1234567890", "0000000000", "9876543210"] {
        let record = record_with_phones("John", &[value]);
        assert_eq!(record.find_phone(value).unwrap().to_string(), value);
    }
}

#[test]
fn test_invalid_phones_rejected_without_side_effects() {
    let mut record = record_with_phones("John", &["1234567890"]);

    for bad in ["", "abc", "123456789", "12345678901", "123-456-789", "12345678 0"] {
        let err = record.add_phone(bad).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone(bad.to_string()));
    }

    // No failed attempt mutated the list
    assert_eq!(record.phones().len(), 1);
    assert_eq!(record.phones()[0].as_str(), "1234567890");
}

#[test]
fn test_edit_phone_success_renders_new_value() {
    let mut record = record_with_phones("John", &["1234567890", "5555555555"]);

    let edited = record.edit_phone("1234567890", "1112223333").unwrap();
    assert!(edited);
    assert_eq!(
        record.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );
}

#[test]
fn test_edit_phone_nonexistent_old_value() {
    let mut record = record_with_phones("John", &["1234567890", "5555555555"]);

    let edited = record.edit_phone("0000000000", "1112223333").unwrap();
    assert!(!edited);
    assert_eq!(
        record.to_string(),
        "Contact name: John, phones: 1234567890; 5555555555"
    );
}

#[test]
fn test_edit_phone_invalid_new_value_aborts() {
    let mut record = record_with_phones("John", &["1234567890", "5555555555"]);

    let err = record.edit_phone("1234567890", "abc").unwrap_err();
    assert_eq!(err, ValidationError::InvalidPhone("abc".to_string()));

    // The old entry is still there, at its old position
    assert_eq!(
        record.to_string(),
        "Contact name: John, phones: 1234567890; 5555555555"
    );
}

#[test]
fn test_find_phone_exact_match() {
    let record = record_with_phones("John", &["1234567890", "5555555555"]);

    let found = record.find_phone("5555555555").unwrap();
    assert_eq!(found.to_string(), "5555555555");
    assert!(record.find_phone("0000000000").is_none());
    // Exact match only, no prefix or substring matching
    assert!(record.find_phone("55555").is_none());
}

#[test]
fn test_remove_phone_filter_semantics() {
    let mut record = record_with_phones(
        "John",
        &["1234567890", "5555555555", "1234567890", "9876543210"],
    );

    record.remove_phone("1234567890");

    let remaining: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(remaining, vec!["5555555555", "9876543210"]);

    // Removing an absent value changes nothing and does not error
    record.remove_phone("1234567890");
    assert_eq!(record.phones().len(), 2);
}
