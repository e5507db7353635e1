use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// In-memory project store.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockProjectStore {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    writes: Cell<usize>,
    failing: Option<PathBuf>,
}

#[allow(dead_code)]
impl MockProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes to `path` fail with `PermissionDenied`.
    pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing = Some(path.into());
        self
    }

    pub fn file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl ProjectStore for MockProjectStore {
    fn dir_exists(&self, path: &Path) -> bool {
        self.has_dir(path)
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), AppError> {
        if self.failing.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into());
        }
        self.writes.set(self.writes.get() + 1);
        self.files.borrow_mut().insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
