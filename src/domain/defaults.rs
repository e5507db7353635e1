//! Prompt defaults and their optional TOML override file.

use serde::Deserialize;

use super::{
    AppError, DEFAULT_DESCRIPTION, DEFAULT_DISPLAY_NAME, DEFAULT_ICON,
    DEFAULT_PERMISSION_DESCRIPTION, Tooling,
};

/// Initial values offered by each prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDefaults {
    pub display_name: String,
    pub description: String,
    pub icon: String,
    pub permission_description: String,
    pub tooling: Tooling,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            icon: DEFAULT_ICON.to_string(),
            permission_description: DEFAULT_PERMISSION_DESCRIPTION.to_string(),
            tooling: Tooling::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsFile {
    display_name: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    permission_description: Option<String>,
    #[serde(default)]
    tooling: ToolingSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ToolingSection {
    vitest: Option<bool>,
    eslint: Option<bool>,
    prettier: Option<bool>,
}

/// Parse a defaults file. Keys left out keep their built-in value.
pub fn parse_defaults_content(content: &str) -> Result<PromptDefaults, AppError> {
    let file: DefaultsFile = toml::from_str(content)?;
    let builtin = PromptDefaults::default();

    if let Some(name) = &file.display_name
        && name.trim().is_empty()
    {
        return Err(AppError::config_error("Defaults file: display_name must not be empty"));
    }

    Ok(PromptDefaults {
        display_name: file.display_name.unwrap_or(builtin.display_name),
        description: file.description.unwrap_or(builtin.description),
        icon: file.icon.unwrap_or(builtin.icon),
        permission_description: file
            .permission_description
            .unwrap_or(builtin.permission_description),
        tooling: Tooling {
            vitest: file.tooling.vitest.unwrap_or(builtin.tooling.vitest),
            eslint: file.tooling.eslint.unwrap_or(builtin.tooling.eslint),
            prettier: file.tooling.prettier.unwrap_or(builtin.tooling.prettier),
        },
    })
}
