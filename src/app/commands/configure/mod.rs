//! Interactive configurator: turns operator answers into a `ComponentConfig`.

mod permission_details;
mod steps;

use crate::domain::{AppError, ComponentConfig, PromptDefaults};
use crate::ports::Prompter;

/// Inputs that shape the question flow.
#[derive(Debug, Clone, Default)]
pub struct ConfigureOptions {
    pub defaults: PromptDefaults,
    /// Ask which implementations the component requires.
    pub ask_implements: bool,
}

/// Run the full question flow.
///
/// Any cancellation aborts the whole flow; no partial configuration escapes.
pub fn collect<P: Prompter>(
    prompter: &P,
    options: &ConfigureOptions,
) -> Result<ComponentConfig, AppError> {
    let defaults = &options.defaults;

    let display_name = steps::display_name(prompter, defaults)?;
    let namespace = steps::namespace(prompter, &display_name)?;
    let description = steps::description(prompter, defaults)?;
    let icon = steps::icon(prompter, defaults)?;
    let implements =
        if options.ask_implements { steps::implements(prompter)? } else { Vec::new() };
    let selected = steps::permissions(prompter)?;
    let permissions =
        permission_details::collect(prompter, &selected, &defaults.permission_description)?;
    let tooling = steps::tooling(prompter, &defaults.tooling)?;

    Ok(ComponentConfig {
        display_name,
        namespace,
        description,
        icon,
        implements,
        permissions,
        tooling,
    })
}
