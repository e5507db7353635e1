//! Template tree model and the pure rules applied while rendering it.

mod package_json;
mod rule;
mod substitution;
mod tree;

pub use package_json::{PACKAGE_JSON, remove_declined_tools};
pub use rule::{FileRule, VERBATIM_DIR, rule_for};
pub use substitution::{CHECKLIST_DONE, CHECKLIST_PENDING, Placeholder, Substitutions};
pub use tree::{TemplateNode, TemplateTree, Visit};
