use crate::domain::AppError;

/// Validation hook for free-text answers. `Err` carries the message shown
/// to the operator before asking again.
pub type TextValidator = fn(&str) -> Result<(), &'static str>;

/// A free-text question.
#[derive(Debug, Clone)]
pub struct TextPrompt<'a> {
    pub message: &'a str,
    pub default: String,
    pub validate: Option<TextValidator>,
}

impl<'a> TextPrompt<'a> {
    pub fn new(message: &'a str, default: impl Into<String>) -> Self {
        Self { message, default: default.into(), validate: None }
    }

    pub fn with_validator(mut self, validate: TextValidator) -> Self {
        self.validate = Some(validate);
        self
    }
}

/// One option of a multi-select question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub title: &'static str,
    pub description: &'static str,
}

/// Port for asking the operator questions, one at a time.
///
/// Every method returns `AppError::Cancelled` when the operator aborts.
pub trait Prompter {
    /// Ask for text. An empty answer yields the default; invalid answers
    /// are re-asked until they pass validation.
    fn text(&self, prompt: TextPrompt<'_>) -> Result<String, AppError>;

    /// Ask a yes/no question answered by toggling.
    fn toggle(&self, message: &str, default: bool) -> Result<bool, AppError>;

    /// Ask the operator to pick any number of choices. Returns indices in
    /// ascending order.
    fn multi_select(&self, message: &str, choices: &[Choice]) -> Result<Vec<usize>, AppError>;

    /// Final go/no-go confirmation.
    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError>;
}
