//! Contact record: one person's name, phones and optional birthday.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact stored in the directory.
///
/// Every mutating method validates its input before touching the record, so
/// a failed call leaves the phones and birthday exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record from raw name text.
    pub fn with_name(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone list.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone whose text equals `value`.
    ///
    /// Returns the number of phones removed; zero is not an error.
    pub fn remove_phone(&mut self, value: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| phone.as_str() != value);
        before - self.phones.len()
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// `new` is validated first. Returns the number of phones replaced, which
    /// is zero when `old` is not on the record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        let replacement = PhoneNumber::new(new)?;
        let mut edited = 0;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            edited += 1;
        }
        Ok(edited)
    }

    /// First phone whose text equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Set the birthday from `day.month.year` text.
    ///
    /// # Errors
    ///
    /// - `BookError::BirthdayAlreadySet` if a birthday is already stored,
    ///   whatever `text` contains
    /// - `BookError::Validation` if `text` is not a valid date
    pub fn add_birthday(&mut self, text: &str) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayAlreadySet(self.name.to_string()));
        }
        self.birthday = Some(BirthdayDate::parse(text)?);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
