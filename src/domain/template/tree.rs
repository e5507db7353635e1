use std::path::{Path, PathBuf};

/// One entry of a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    Dir { name: String, children: Vec<TemplateNode> },
    File { name: String, contents: Vec<u8> },
}

impl TemplateNode {
    pub fn dir(name: impl Into<String>, children: Vec<TemplateNode>) -> Self {
        TemplateNode::Dir { name: name.into(), children }
    }

    pub fn file(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        TemplateNode::File { name: name.into(), contents: contents.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            TemplateNode::Dir { name, .. } | TemplateNode::File { name, .. } => name,
        }
    }
}

/// The root of a template, without a name of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateTree {
    pub entries: Vec<TemplateNode>,
}

/// A visited node together with its path relative to the template root.
#[derive(Debug)]
pub enum Visit<'a> {
    Dir { path: PathBuf },
    File { path: PathBuf, contents: &'a [u8] },
}

impl TemplateTree {
    pub fn new(entries: Vec<TemplateNode>) -> Self {
        Self { entries }
    }

    /// Depth-first, parents before children.
    pub fn walk(&self) -> Vec<Visit<'_>> {
        let mut visits = Vec::new();
        walk_entries(&self.entries, Path::new(""), &mut visits);
        visits
    }
}

fn walk_entries<'a>(entries: &'a [TemplateNode], parent: &Path, visits: &mut Vec<Visit<'a>>) {
    for entry in entries {
        let path = parent.join(entry.name());
        match entry {
            TemplateNode::Dir { children, .. } => {
                visits.push(Visit::Dir { path: path.clone() });
                walk_entries(children, &path, visits);
            }
            TemplateNode::File { contents, .. } => {
                visits.push(Visit::File { path, contents });
            }
        }
    }
}
