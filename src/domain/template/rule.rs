use std::path::{Component, Path};

use super::PACKAGE_JSON;
use crate::domain::Tooling;

/// Top-level template directory whose files are copied without substitution.
///
/// Source files may contain literal `{{` sequences of their own.
pub const VERBATIM_DIR: &str = "src";

/// How a single template file is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRule {
    /// Read as text and apply placeholder substitution.
    Substitute,
    /// Substitute, then drop entries of declined tools from the JSON.
    PackageJson,
    /// Copy byte for byte.
    Verbatim,
    /// Do not write.
    Skip,
}

/// Rule for the file at `relative` (path from the template root).
pub fn rule_for(relative: &Path, tooling: &Tooling) -> FileRule {
    if tooling.excludes(relative) {
        return FileRule::Skip;
    }
    let mut components = relative.components();
    let in_verbatim_dir =
        matches!(components.next(), Some(Component::Normal(first)) if first == VERBATIM_DIR)
            && components.next().is_some();

    if in_verbatim_dir {
        FileRule::Verbatim
    } else if relative == Path::new(PACKAGE_JSON) {
        FileRule::PackageJson
    } else {
        FileRule::Substitute
    }
}
