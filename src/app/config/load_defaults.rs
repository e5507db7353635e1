//! Prompt defaults loading from an optional TOML file.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, PromptDefaults, parse_defaults_content};

/// Load prompt defaults, falling back to the built-in ones when no file is given.
pub fn load_defaults(path: Option<&Path>) -> Result<PromptDefaults, AppError> {
    let Some(path) = path else {
        return Ok(PromptDefaults::default());
    };

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => {
            AppError::config_error(format!("Defaults file not found: {}", path.display()))
        }
        _ => AppError::Io(err),
    })?;

    tracing::debug!(file = %path.display(), "loaded prompt defaults");
    parse_defaults_content(&content)
}
