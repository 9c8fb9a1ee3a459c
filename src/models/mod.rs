//! Data models for contacts.

pub mod record;

pub use record::ContactRecord;
