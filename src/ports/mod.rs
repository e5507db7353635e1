mod project_store;
mod prompter;
mod template_source;

pub use project_store::ProjectStore;
pub use prompter::{Choice, Prompter, TextPrompt, TextValidator};
pub use template_source::TemplateSource;
