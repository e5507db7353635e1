use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;
use crate::domain::template::{TemplateNode, TemplateTree};
use crate::ports::TemplateSource;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/template");

/// The Managed Component template compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateSource;

impl EmbeddedTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplateSource {
    fn describe(&self) -> String {
        "embedded template".to_string()
    }

    fn load(&self) -> Result<TemplateTree, AppError> {
        Ok(TemplateTree::new(collect_nodes(&TEMPLATE_DIR)))
    }
}

fn collect_nodes(dir: &Dir<'_>) -> Vec<TemplateNode> {
    let mut nodes: Vec<TemplateNode> = dir
        .entries()
        .iter()
        .map(|entry| match entry {
            DirEntry::Dir(subdir) => {
                TemplateNode::dir(file_name(subdir.path()), collect_nodes(subdir))
            }
            DirEntry::File(file) => TemplateNode::file(file_name(file.path()), file.contents()),
        })
        .collect();
    nodes.sort_by(|a, b| a.name().cmp(b.name()));
    nodes
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}
