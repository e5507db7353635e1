//! Scaffold command: configure, confirm, render.

use crate::app::AppContext;
use crate::domain::{AppError, ComponentConfig};
use crate::ports::{ProjectStore, Prompter, TemplateSource};

use super::configure::{self, ConfigureOptions};
use super::render::{self, RenderSummary};

#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub configure: ConfigureOptions,
    /// Render without the final confirmation.
    pub skip_confirmation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created { config: ComponentConfig, summary: RenderSummary },
    /// The operator declined the final confirmation. Nothing was written.
    Declined,
}

/// Execute the scaffold command.
pub fn execute<P, T, S>(
    ctx: &AppContext<P, T, S>,
    options: &ScaffoldOptions,
) -> Result<ScaffoldOutcome, AppError>
where
    P: Prompter,
    T: TemplateSource,
    S: ProjectStore,
{
    tracing::debug!(source = %ctx.templates().describe(), "loading template");
    let tree = ctx.templates().load()?;

    let config = configure::collect(ctx.prompter(), &options.configure)?;

    if !options.skip_confirmation && !confirm(ctx.prompter(), &config)? {
        tracing::info!("scaffolding declined");
        return Ok(ScaffoldOutcome::Declined);
    }

    let summary = render::render(&config, &tree, ctx.store())?;
    Ok(ScaffoldOutcome::Created { config, summary })
}

fn confirm<P: Prompter>(prompter: &P, config: &ComponentConfig) -> Result<bool, AppError> {
    let manifest = config.manifest().to_json()?;
    prompter.confirm(&format!("Confirm new managed component?: {}", manifest.trim_end()), false)
}
