//! CLI-specific error types

use std::fmt;

use crate::config::ConfigError;
use crate::store::DocumentError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    ConfigError,
    DocumentError,
    BootFailed,
}

impl CliErrorCode {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "HELPDESK_CLI_CONFIG_ERROR",
            Self::DocumentError => "HELPDESK_CLI_DOCUMENT_ERROR",
            Self::BootFailed => "HELPDESK_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error with a stable code and a human-readable message.
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, message)
    }

    pub fn document_error(message: impl Into<String>) -> Self {
        Self::new(CliErrorCode::DocumentError, message)
    }

    pub fn boot_failed(message: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, message)
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::config_error(err.to_string())
    }
}

impl From<DocumentError> for CliError {
    fn from(err: DocumentError) -> Self {
        Self::document_error(err.to_string())
    }
}
