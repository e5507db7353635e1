use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::template::{TemplateNode, TemplateTree};
use crate::ports::TemplateSource;

/// Template read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateSource {
    root: PathBuf,
}

impl DirectoryTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for DirectoryTemplateSource {
    fn describe(&self) -> String {
        format!("template directory {}", self.root.display())
    }

    fn load(&self) -> Result<TemplateTree, AppError> {
        if !self.root.is_dir() {
            return Err(AppError::TemplateNotFound(self.root.clone()));
        }
        Ok(TemplateTree::new(read_nodes(&self.root)?))
    }
}

fn read_nodes(dir: &Path) -> Result<Vec<TemplateNode>, AppError> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut nodes = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            nodes.push(TemplateNode::dir(name, read_nodes(&path)?));
        } else {
            nodes.push(TemplateNode::file(name, fs::read(&path)?));
        }
    }
    Ok(nodes)
}
