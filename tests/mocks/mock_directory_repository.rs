use contact_book::error::StorageResult;
use contact_book::models::ContactDirectory;
use contact_book::repositories::DirectoryRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock directory repository for testing.
///
/// Keeps the "saved" directory in memory and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDirectoryRepository {
    stored: Arc<Mutex<Option<ContactDirectory>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a repository with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `directory`.
    pub fn with_directory(directory: ContactDirectory) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(directory);
        repo
    }

    /// The last saved directory, if any.
    pub fn stored(&self) -> Option<ContactDirectory> {
        self.stored.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl DirectoryRepository for MockDirectoryRepository {
    fn load(&self) -> StorageResult<ContactDirectory> {
        self.track_call("load");
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, directory: &ContactDirectory) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into());
        }
        *self.stored.lock().unwrap() = Some(directory.clone());
        Ok(())
    }
}
