//! Test fixtures and sample data for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_book::models::{ContactDirectory, ContactRecord};
use std::path::{Path, PathBuf};

/// Shorthand for a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Create a sample record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> ContactRecord {
    let mut record = ContactRecord::with_name(name).expect("valid fixture name");
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid fixture birthday");
    }
    record
}

/// A small directory covering phones, duplicates and missing birthdays.
pub fn sample_directory() -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    directory.add_record(sample_record("Ann", &["1111111111"], Some("15.03.1990")));
    directory.add_record(sample_record(
        "Bob",
        &["2222222222", "3333333333", "2222222222"],
        None,
    ));
    directory.add_record(sample_record("Cid", &[], Some("29.02.2000")));
    directory
}

/// RAII guard for a scratch data file that is removed when dropped.
///
/// This guarantees cleanup even if tests fail or panic.
pub struct TempFileGuard {
    dir: PathBuf,
    path: PathBuf,
}

impl TempFileGuard {
    /// Reserve a unique path under the system temp dir, inside a fresh subdirectory.
    pub fn new(test_name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "contact-book-{}-{}",
            test_name,
            std::process::id()
        ));
        let path = dir.join("addressbook.json");
        let _ = std::fs::remove_dir_all(&dir);
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
