use crate::error::StorageResult;
use crate::models::ContactDirectory;

/// Repository for persisting the contact directory.
///
/// The whole directory is read once at startup and written once at exit;
/// there are no partial or incremental saves.
pub trait DirectoryRepository {
    /// Load the stored directory.
    ///
    /// Returns an empty directory when nothing has been saved yet.
    fn load(&self) -> StorageResult<ContactDirectory>;

    /// Replace the stored directory with `directory`.
    fn save(&self, directory: &ContactDirectory) -> StorageResult<()>;
}
