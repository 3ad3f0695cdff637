//! Contact directory: every stored record keyed by contact name.

use super::record::ContactRecord;
use crate::domain::ContactName;
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Deserializer, Serialize};

/// The full set of stored contacts.
///
/// Records are kept in insertion order so listings and reports come out the
/// same way every time. Names are unique: adding a record whose name is
/// already present replaces the old record in its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDirectory {
    contacts: Vec<ContactRecord>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, overwriting any record stored under the same name.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position(record.name().as_str()) {
            Some(index) => self.contacts[index] = record,
            None => self.contacts.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.position(name).map(|index| &self.contacts[index])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.position(name).map(move |index| &mut self.contacts[index])
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> BookResult<ContactRecord> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        Ok(self.contacts.remove(index))
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn all(&self) -> impl Iterator<Item = (&ContactName, &ContactRecord)> + Clone + '_ {
        self.contacts.iter().map(|record| (record.name(), record))
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.contacts
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

impl FromIterator<ContactRecord> for ContactDirectory {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut directory = Self::new();
        for record in iter {
            directory.add_record(record);
        }
        directory
    }
}

/// On-disk shape of the directory.
#[derive(Deserialize)]
struct StoredDirectory {
    #[serde(default)]
    contacts: Vec<ContactRecord>,
}

// Duplicate names in stored data collapse to the last record, matching add_record.
impl<'de> Deserialize<'de> for ContactDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = StoredDirectory::deserialize(deserializer)?;
        Ok(stored.contacts.into_iter().collect())
    }
}
