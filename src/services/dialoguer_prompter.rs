use std::io;

use dialoguer::{Confirm, Input, MultiSelect};

use crate::domain::AppError;
use crate::ports::{Choice, Prompter, TextPrompt};

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: TextPrompt<'_>) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(prompt.message).default(prompt.default);
        if let Some(validate) = prompt.validate {
            input = input.validate_with(move |value: &String| validate(value));
        }
        input.interact_text().map_err(prompt_error)
    }

    fn toggle(&self, message: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(AppError::Cancelled)
    }

    fn multi_select(&self, message: &str, choices: &[Choice]) -> Result<Vec<usize>, AppError> {
        let items: Vec<String> =
            choices.iter().map(|c| format!("{} - {}", c.title, c.description)).collect();

        MultiSelect::new()
            .with_prompt(format!("{message} (space to select, enter to confirm)"))
            .items(&items)
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(AppError::Cancelled)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError> {
        self.toggle(message, default)
    }
}

/// Ctrl-C surfaces from the terminal as an interrupted read.
fn prompt_error(err: dialoguer::Error) -> AppError {
    match err {
        dialoguer::Error::IO(err) if err.kind() == io::ErrorKind::Interrupted => {
            AppError::Cancelled
        }
        dialoguer::Error::IO(err) => AppError::Io(err),
    }
}
