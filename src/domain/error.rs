use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mc-init operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The operator aborted an interactive prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// Namespace does not satisfy the package name grammar.
    #[error("Invalid package.json name '{0}'")]
    InvalidNamespace(String),

    /// Permission key outside the known vocabulary.
    #[error("Unknown permission '{0}'")]
    UnknownPermission(String),

    /// Implementation key outside the known vocabulary.
    #[error("Unknown implementation '{0}'")]
    UnknownImplementation(String),

    /// Template directory could not be found.
    #[error("Template directory not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Manifest could not be serialized.
    #[error("Failed to serialize manifest: {0}")]
    ManifestSerialization(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether this error represents an operator cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }
}
