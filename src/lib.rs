//! mc-init: scaffold new Managed Component projects from a template.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::io::IsTerminal;
use std::path::Path;

use app::AppContext;
use ports::TemplateSource;
use services::{
    DialoguerPrompter, DirectoryTemplateSource, EmbeddedTemplateSource, FilesystemProjectStore,
};

pub use app::commands::configure::ConfigureOptions;
pub use app::commands::render::RenderSummary;
pub use app::commands::scaffold::{ScaffoldOptions, ScaffoldOutcome};
pub use domain::{AppError, ComponentConfig, Manifest, Namespace};

/// Interactively scaffold a project into the current directory.
///
/// Renders from `template_dir` when given, otherwise from the embedded template.
pub fn scaffold(
    options: &ScaffoldOptions,
    template_dir: Option<&Path>,
) -> Result<ScaffoldOutcome, AppError> {
    if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
        return Err(AppError::config_error(
            "Interactive prompts require a TTY. Run mc-init from a terminal.",
        ));
    }

    match template_dir {
        Some(dir) => scaffold_with(DirectoryTemplateSource::new(dir), options),
        None => scaffold_with(EmbeddedTemplateSource::new(), options),
    }
}

fn scaffold_with<T: TemplateSource>(
    templates: T,
    options: &ScaffoldOptions,
) -> Result<ScaffoldOutcome, AppError> {
    let store = FilesystemProjectStore::current()?;
    let ctx = AppContext::new(DialoguerPrompter::new(), templates, store);
    app::commands::scaffold::execute(&ctx, options)
}

/// Render a project for an already collected configuration into `root`.
pub fn render_project<T: TemplateSource>(
    config: &ComponentConfig,
    templates: &T,
    root: &Path,
) -> Result<RenderSummary, AppError> {
    let tree = templates.load()?;
    app::commands::render::render(config, &tree, &FilesystemProjectStore::new(root))
}
