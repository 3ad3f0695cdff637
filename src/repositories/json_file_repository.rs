use crate::error::StorageResult;
use crate::models::ContactDirectory;
use crate::repositories::traits::DirectoryRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory repository backed by a pretty-printed JSON file.
///
/// Values are re-validated while loading, so a hand-edited file with a bad
/// phone number or date fails with a serialization error instead of
/// producing an invalid record.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DirectoryRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<ContactDirectory> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "No saved contacts found, starting with an empty book"
                );
                return Ok(ContactDirectory::new());
            }
            Err(e) => return Err(e.into()),
        };

        let directory: ContactDirectory = serde_json::from_str(&contents)?;
        tracing::info!(
            path = %self.path.display(),
            contacts = directory.len(),
            "Loaded contacts"
        );
        Ok(directory)
    }

    fn save(&self, directory: &ContactDirectory) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(directory)?;
        fs::write(&self.path, json)?;
        tracing::info!(
            path = %self.path.display(),
            contacts = directory.len(),
            "Saved contacts"
        );
        Ok(())
    }
}
