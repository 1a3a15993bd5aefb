//! Error types for moneyvibe-parser

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount {
        input: String,
        reason: String,
    },

    #[error("Unknown category: {input}")]
    InvalidCategory { input: String },

    #[error("Invalid month '{input}', expected YYYY-MM")]
    InvalidMonth { input: String },
}
