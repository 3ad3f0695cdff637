//! Data models for the contact book.
//!
//! A `ContactRecord` holds one person's data; a `ContactDirectory` holds
//! every record, keyed by name.

pub mod directory;
pub mod record;

pub use directory::ContactDirectory;
pub use record::ContactRecord;
