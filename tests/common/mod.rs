//! Shared testing utilities for mc-init integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI and library exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled `mc-init` binary inside the work directory.
    ///
    /// Environment overrides are cleared so the host shell cannot leak in.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mc-init").expect("Failed to locate mc-init binary");
        cmd.current_dir(self.work_dir())
            .env_remove("MC_INIT_TEMPLATE")
            .env_remove("MC_INIT_DEFAULTS")
            .env_remove("MC_INIT_LOG");
        cmd
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.work_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir().join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.work_dir())
            .expect("Failed to list work directory")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
