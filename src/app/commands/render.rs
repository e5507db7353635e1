//! Template renderer: materializes a project directory from a template tree.

use std::path::PathBuf;

use crate::domain::template::{
    FileRule, Substitutions, TemplateTree, Visit, remove_declined_tools, rule_for,
};
use crate::domain::{AppError, ComponentConfig, MANIFEST_FILE, Tooling};
use crate::ports::ProjectStore;

/// What a render wrote, relative to the project directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Project directory, relative to the store root.
    pub root: PathBuf,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Whether the project directory existed before rendering.
    pub reused_existing_dir: bool,
}

/// Render `tree` into `<namespace>/` of `store`.
///
/// An existing project directory is rendered into and its files overwritten.
/// The first filesystem error aborts the walk; nothing already written is
/// removed.
pub fn render<S: ProjectStore>(
    config: &ComponentConfig,
    tree: &TemplateTree,
    store: &S,
) -> Result<RenderSummary, AppError> {
    let root = config.namespace.dir_path();
    let mut summary = RenderSummary { root: root.clone(), ..Default::default() };

    if store.dir_exists(&root) {
        tracing::warn!(dir = %root.display(), "project directory exists; files will be overwritten");
        summary.reused_existing_dir = true;
    } else {
        store.create_dir(&root)?;
    }

    let manifest = config.manifest().to_json()?;
    store.write_file(&root.join(MANIFEST_FILE), manifest.as_bytes())?;
    summary.written.push(PathBuf::from(MANIFEST_FILE));

    let substitutions = Substitutions::for_config(config);

    for visit in tree.walk() {
        match visit {
            Visit::Dir { path } => {
                let target = root.join(&path);
                if !store.dir_exists(&target) {
                    store.create_dir(&target)?;
                }
            }
            Visit::File { path, contents } => {
                let target = root.join(&path);
                match rule_for(&path, &config.tooling) {
                    FileRule::Skip => {
                        tracing::debug!(file = %path.display(), "skipped: tool not selected");
                        summary.skipped.push(path);
                        continue;
                    }
                    FileRule::Verbatim => {
                        tracing::debug!(file = %path.display(), "copied verbatim");
                        store.write_file(&target, contents)?;
                    }
                    rule @ (FileRule::Substitute | FileRule::PackageJson) => {
                        let Ok(text) = std::str::from_utf8(contents) else {
                            tracing::debug!(file = %path.display(), "not UTF-8; copied verbatim");
                            store.write_file(&target, contents)?;
                            summary.written.push(path);
                            continue;
                        };
                        let mut rendered = substitutions.apply(text);
                        if rule == FileRule::PackageJson {
                            rendered = without_declined_tools(rendered, &config.tooling);
                        }
                        tracing::debug!(file = %path.display(), "rendered");
                        store.write_file(&target, rendered.as_bytes())?;
                    }
                }
                summary.written.push(path);
            }
        }
    }

    tracing::info!(
        dir = %root.display(),
        written = summary.written.len(),
        skipped = summary.skipped.len(),
        "project rendered"
    );
    Ok(summary)
}

/// A package.json that does not parse is written as rendered.
fn without_declined_tools(rendered: String, tooling: &Tooling) -> String {
    match remove_declined_tools(&rendered, tooling) {
        Ok(pruned) => pruned,
        Err(err) => {
            tracing::warn!(error = %err, "package.json is not valid JSON; tool entries kept");
            rendered
        }
    }
}
