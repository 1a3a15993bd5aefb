//! Expense quick-entry interpreter
//!
//! Turns free text like `Uber 100 rs` or `₹50 chai` into a description and an
//! amount, and guesses a spending category from keywords.

use std::sync::Arc;

pub mod classify;
pub mod error;
pub mod parser;
pub mod types;

pub use classify::{classify, CATEGORY_KEYWORDS};
pub use error::ParseError;
pub use parser::{parse_amount, parse_entry, strip_currency_markers, QuickEntryParser};

// Re-export commonly used types
pub use types::{Category, CategoryInfo, ParsedEntry, YearMonth};

// ==================== Interpreter Trait ====================

/// Interpreter reference type
pub type InterpreterRef = Arc<dyn EntryInterpreter>;

/// Trait for quick-entry interpreters
pub trait EntryInterpreter: Send + Sync {
    /// Extract a description and amount from free text
    fn parse(&self, input: &str) -> Option<ParsedEntry>;

    /// Infer a category for a description
    fn classify(&self, description: &str) -> Category;
}

/// Default interpreter: regex patterns plus the keyword table
#[derive(Debug, Default)]
pub struct DefaultInterpreter;

impl EntryInterpreter for DefaultInterpreter {
    fn parse(&self, input: &str) -> Option<ParsedEntry> {
        parse_entry(input)
    }

    fn classify(&self, description: &str) -> Category {
        classify::classify(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interpreter_pipeline() {
        let interpreter: InterpreterRef = Arc::new(DefaultInterpreter);
        let entry = interpreter.parse("Uber 100 rs").unwrap();
        assert_eq!(entry.description, "Uber");
        assert_eq!(interpreter.classify(&entry.description), Category::Transport);
        assert!(interpreter.parse("just chilling").is_none());
    }
}
