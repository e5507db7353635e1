use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem-based project store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a project store for the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a project store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn dir_exists(&self, path: &Path) -> bool {
        self.root.join(path).is_dir()
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(self.root.join(path))?;
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), AppError> {
        fs::write(self.root.join(path), contents)?;
        Ok(())
    }
}
