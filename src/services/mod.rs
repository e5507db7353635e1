mod dialoguer_prompter;
mod directory_template_source;
mod embedded_template_source;
mod project_filesystem;

pub use dialoguer_prompter::DialoguerPrompter;
pub use directory_template_source::DirectoryTemplateSource;
pub use embedded_template_source::EmbeddedTemplateSource;
pub use project_filesystem::FilesystemProjectStore;
