//! Error types for moneyvibe-core
//!
//! Error codes, severities and detailed messages with suggestions for the
//! expense book, its store and the structured entry path.

use moneyvibe_config::ConfigError;
use moneyvibe_parser::ParseError;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Entry failed validation
    ValidationError,
    /// Expense id not found
    ExpenseNotFound,
    /// Input could not be parsed
    ParseError,
    /// Store could not be read or written
    StorageError,
    /// Configuration error
    ConfigError,
    /// IO error
    IoError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::ExpenseNotFound => write!(f, "EXPENSE_NOT_FOUND"),
            ErrorCode::ParseError => write!(f, "PARSE_ERROR"),
            ErrorCode::StorageError => write!(f, "STORAGE_ERROR"),
            ErrorCode::ConfigError => write!(f, "CONFIG_ERROR"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
        }
    }
}

/// Detailed error information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - the user can correct the input
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - stored data may be unusable
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Main error type for moneyvibe-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Expense not found: {id}")]
    ExpenseNotFound { id: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Storage error at {path}: {message}")]
    StorageError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::ExpenseNotFound { .. } => ErrorCode::ExpenseNotFound,
            CoreError::ParseError { .. } => ErrorCode::ParseError,
            CoreError::StorageError { .. } => ErrorCode::StorageError,
            CoreError::ConfigError { .. } => ErrorCode::ConfigError,
            CoreError::IoError(_) => ErrorCode::IoError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::ValidationError { .. } => ErrorSeverity::Warning,
            CoreError::ExpenseNotFound { .. } => ErrorSeverity::Info,
            CoreError::ParseError { .. } => ErrorSeverity::Warning,
            CoreError::StorageError { .. } => ErrorSeverity::Critical,
            CoreError::ConfigError { .. } => ErrorSeverity::Critical,
            CoreError::IoError(_) => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::ValidationError { message } => {
                details = details.with_detail(serde_json::json!({ "validation_message": message }));
                details = details.with_suggestion(
                    "Enter a description and an amount greater than zero.".to_string()
                );
            }
            CoreError::ExpenseNotFound { .. } => {
                details = details.with_suggestion(
                    "Use `moneyvibe list` to see expense ids.".to_string()
                );
            }
            CoreError::ParseError { message } => {
                details = details.with_detail(serde_json::json!({ "parse_message": message }));
                details = details.with_suggestion(
                    "Amounts look like 120 or 45.50; months look like 2026-10.".to_string()
                );
            }
            CoreError::StorageError { path, .. } => {
                details = details.with_suggestion(format!(
                    "Check that '{}' is readable and contains a JSON array of expenses.", path
                ));
                details = details.with_suggestion(
                    "Restore the file from a backup before adding new expenses.".to_string()
                );
            }
            _ => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<ParseError> for CoreError {
    fn from(error: ParseError) -> Self {
        CoreError::ParseError {
            message: error.to_string(),
        }
    }
}

impl From<ConfigError> for CoreError {
    fn from(error: ConfigError) -> Self {
        CoreError::ConfigError {
            message: error.to_details().to_string(),
        }
    }
}

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Additional context data
    pub data: serde_json::Value,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            data: serde_json::json!({}),
        }
    }

    /// Add context data
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data[key] = value;
        self
    }
}

/// Error logger trait
pub trait ErrorLogger {
    /// Log an error
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
    /// Log a warning
    fn log_warning(&self, message: &str, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        match error.severity() {
            ErrorSeverity::Info | ErrorSeverity::Warning => log::warn!(
                target: "moneyvibe::error",
                "{} - Operation: {} - Context: {}",
                error.to_details(),
                context.operation,
                context.data
            ),
            ErrorSeverity::Error | ErrorSeverity::Critical => log::error!(
                target: "moneyvibe::error",
                "{} - Operation: {} - Context: {}",
                error.to_details(),
                context.operation,
                context.data
            ),
        }
    }

    fn log_warning(&self, message: &str, context: &ErrorContext) {
        log::warn!(
            target: "moneyvibe::error",
            "WARNING: {} - Operation: {} - Context: {}",
            message,
            context.operation,
            context.data
        );
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ValidationError.to_string(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::ExpenseNotFound.to_string(), "EXPENSE_NOT_FOUND");
        assert_eq!(ErrorCode::StorageError.to_string(), "STORAGE_ERROR");
    }

    #[test]
    fn test_core_error_severity() {
        let error = CoreError::ExpenseNotFound { id: "42".to_string() };
        assert_eq!(error.severity(), ErrorSeverity::Info);

        let error = CoreError::StorageError {
            path: "expenses.json".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert_eq!(error.code(), ErrorCode::StorageError);
    }

    #[test]
    fn test_parse_error_conversion() {
        let error: CoreError = ParseError::InvalidMonth { input: "2026-13".to_string() }.into();
        assert_eq!(error.code(), ErrorCode::ParseError);
        let details = error.to_details();
        assert!(details.details.is_some());
        assert!(details.message.contains("2026-13"));
    }

    #[test]
    fn test_config_error_conversion() {
        let error: CoreError = ConfigError::InvalidYaml.into();
        assert_eq!(error.code(), ErrorCode::ConfigError);
        assert!(error.to_string().contains("INVALID_YAML"));
    }

    #[test]
    fn test_storage_error_details() {
        let error = CoreError::StorageError {
            path: "/tmp/expenses.json".to_string(),
            message: "EOF".to_string(),
        };
        let details = error.to_details();
        assert_eq!(details.suggestions.len(), 2);
        assert!(details.suggestions[0].contains("/tmp/expenses.json"));
    }

    #[test]
    fn test_error_context() {
        let context = ErrorContext::new("quick_add").with_data("input", serde_json::json!("Uber"));
        assert_eq!(context.operation, "quick_add");
        assert_eq!(context.data["input"], "Uber");
    }
}
