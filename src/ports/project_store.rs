use std::path::Path;

use crate::domain::AppError;

/// Port for writing the generated project.
///
/// Paths are relative to the store root (the working directory in production).
pub trait ProjectStore {
    fn dir_exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents. Existing directories are fine.
    fn create_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Write `contents` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), AppError>;
}
