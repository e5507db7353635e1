//! Individual prompt steps.
//!
//! Each step reads only the answers it depends on and returns one field.

use crate::domain::{
    AppError, Implementation, Namespace, Permission, PromptDefaults, Tool, Tooling,
    is_valid_package_name,
};
use crate::ports::{Choice, Prompter, TextPrompt};

pub(super) fn display_name<P: Prompter>(
    prompter: &P,
    defaults: &PromptDefaults,
) -> Result<String, AppError> {
    let answer = prompter.text(TextPrompt::new("Display name:", &defaults.display_name))?;
    let trimmed = answer.trim();
    Ok(if trimmed.is_empty() { defaults.display_name.clone() } else { trimmed.to_string() })
}

/// Skipped when the display name already is a valid package name.
pub(super) fn namespace<P: Prompter>(
    prompter: &P,
    display_name: &str,
) -> Result<Namespace, AppError> {
    let derived = Namespace::derive(display_name);
    if is_valid_package_name(display_name) {
        tracing::debug!(namespace = %derived, "display name is a valid namespace; skipping prompt");
        return Ok(derived);
    }

    let answer = prompter.text(
        TextPrompt::new("Namespace:", derived.as_str()).with_validator(validate_namespace),
    )?;
    Namespace::new(answer.trim())
}

fn validate_namespace(value: &str) -> Result<(), &'static str> {
    if is_valid_package_name(value.trim()) { Ok(()) } else { Err("Invalid package.json name") }
}

pub(super) fn description<P: Prompter>(
    prompter: &P,
    defaults: &PromptDefaults,
) -> Result<String, AppError> {
    prompter.text(TextPrompt::new("Description:", &defaults.description))
}

pub(super) fn icon<P: Prompter>(
    prompter: &P,
    defaults: &PromptDefaults,
) -> Result<String, AppError> {
    let answer = prompter.text(TextPrompt::new("Path to svg icon:", &defaults.icon))?;
    Ok(answer.trim().to_string())
}

const IMPLEMENTS_MESSAGE: &str = "Required Implementations:";
const IMPLEMENTS_RETRY_MESSAGE: &str = "Required Implementations: (select at least one)";

/// Re-asks until at least one implementation is picked.
pub(super) fn implements<P: Prompter>(prompter: &P) -> Result<Vec<Implementation>, AppError> {
    let choices: Vec<Choice> = Implementation::ALL
        .iter()
        .map(|i| Choice { title: i.title(), description: i.description() })
        .collect();

    let mut message = IMPLEMENTS_MESSAGE;
    loop {
        let picked = prompter.multi_select(message, &choices)?;
        if !picked.is_empty() {
            return Ok(picked.into_iter().map(|index| Implementation::ALL[index]).collect());
        }
        tracing::debug!("no implementation selected; asking again");
        message = IMPLEMENTS_RETRY_MESSAGE;
    }
}

pub(super) fn permissions<P: Prompter>(prompter: &P) -> Result<Vec<Permission>, AppError> {
    let choices: Vec<Choice> = Permission::ALL
        .iter()
        .map(|p| Choice { title: p.title(), description: p.description() })
        .collect();

    let picked = prompter.multi_select("Requested Permissions:", &choices)?;
    Ok(picked.into_iter().map(|index| Permission::ALL[index]).collect())
}

pub(super) fn tooling<P: Prompter>(prompter: &P, defaults: &Tooling) -> Result<Tooling, AppError> {
    let mut tooling = *defaults;
    for tool in Tool::ALL {
        let enabled = prompter.toggle(tool.prompt(), defaults.enabled(tool))?;
        tooling.set(tool, enabled);
    }
    Ok(tooling)
}
