//! Core expense book and analytics engine

pub mod analytics;
pub mod error;
pub mod models;
pub mod reports;
pub mod store;
pub mod time;
pub mod types;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use moneyvibe_config::Config;
use moneyvibe_parser::{DefaultInterpreter, InterpreterRef};
use moneyvibe_utils::{capitalize_first, generate_id};

pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger, ErrorSeverity};
pub use models::{Expense, NewExpense};
pub use moneyvibe_config::{Period, SortOrder};
pub use moneyvibe_parser::{Category, YearMonth};
pub use reports::{AnalyticsQuery, AnalyticsReport, Dashboard, Page, Summary};
pub use store::{ExpenseStore, JsonFileStore, StoreRef};
pub use time::PeriodSelector;
pub use types::{BucketUnit, InsightKind, PageLink, Trend};

/// Outcome of a quick-add attempt
#[derive(Debug, Clone, PartialEq)]
pub enum QuickAdd {
    /// The text was understood and the expense recorded
    Added(Expense),
    /// No amount could be found; ask for a structured entry instead
    NeedsManualEntry { text: String },
}

/// In-memory expense collection, newest first
pub struct ExpenseBook {
    config: Config,
    interpreter: InterpreterRef,
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    /// Create an empty book with config and interpreter
    pub fn new(config: Config, interpreter: InterpreterRef) -> Self {
        Self {
            config,
            interpreter,
            expenses: Vec::new(),
        }
    }

    /// Create a book over an existing collection using the default interpreter
    pub fn with_expenses(config: Config, expenses: Vec<Expense>) -> Self {
        Self {
            config,
            interpreter: Arc::new(DefaultInterpreter),
            expenses,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Interpret free text and record it when an amount is found
    pub fn quick_add(&mut self, text: &str, now: DateTime<Utc>) -> CoreResult<QuickAdd> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::ValidationError {
                message: "quick entry text is empty".to_string(),
            });
        }

        let Some(entry) = self.interpreter.parse(text) else {
            log::debug!("no amount found in '{}', falling back to manual entry", text);
            return Ok(QuickAdd::NeedsManualEntry {
                text: text.to_string(),
            });
        };

        let category = self.interpreter.classify(&entry.description);
        log::debug!(
            "quick entry '{}' -> {} {} ({})",
            text,
            entry.description,
            entry.amount,
            category
        );
        let expense = self.insert(NewExpense::new(entry.description, entry.amount, category), now)?;
        Ok(QuickAdd::Added(expense))
    }

    /// Record a structured entry
    pub fn add_manual(&mut self, entry: NewExpense, now: DateTime<Utc>) -> CoreResult<Expense> {
        self.insert(entry, now)
    }

    fn insert(&mut self, entry: NewExpense, now: DateTime<Utc>) -> CoreResult<Expense> {
        let entry = entry.validate()?;
        let id = generate_id(now, |id| self.expenses.iter().any(|e| e.id == id));
        let expense = Expense::new(
            id,
            capitalize_first(&entry.description),
            entry.amount,
            entry.category,
            now,
        );
        log::info!("Added expense {}: {}", expense.id, expense.summary());
        self.expenses.insert(0, expense.clone());
        Ok(expense)
    }

    /// Remove an expense by id
    pub fn delete(&mut self, id: &str) -> CoreResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::ExpenseNotFound { id: id.to_string() })?;
        let removed = self.expenses.remove(index);
        log::info!("Deleted expense {}", removed.id);
        Ok(removed)
    }

    /// Remove everything, returning how many expenses were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.expenses.len();
        self.expenses.clear();
        log::info!("Cleared {} expenses", count);
        count
    }

    /// Swap in a collection produced elsewhere (for example a remote merge)
    pub fn replace_all(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The `n` most recently added expenses
    pub fn recent(&self, n: usize) -> &[Expense] {
        &self.expenses[..n.min(self.expenses.len())]
    }

    /// Analytics query seeded from the configured defaults
    pub fn default_query(&self) -> AnalyticsQuery {
        AnalyticsQuery {
            period: self.config.analytics.default_period,
            sort: self.config.analytics.default_sort,
            page_size: self.config.pagination.items_per_page,
            trend_days: self.config.analytics.trend_days,
            monthly_months: self.config.analytics.monthly_months,
            ..AnalyticsQuery::default()
        }
    }

    pub fn analytics<Tz: TimeZone>(&self, query: &AnalyticsQuery, now: &DateTime<Tz>) -> AnalyticsReport {
        analytics::analytics_report(&self.expenses, query, now, &self.config.currency)
    }

    pub fn dashboard<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Dashboard {
        analytics::dashboard(&self.expenses, now)
    }

    /// Summary for a selector, as shown on the analytics cards
    pub fn summary<Tz: TimeZone>(&self, selector: &PeriodSelector, now: &DateTime<Tz>) -> Summary {
        let selected = time::select_by_period(&self.expenses, selector, now);
        analytics::summarize(&selected, selector.period, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn book() -> ExpenseBook {
        ExpenseBook::new(Config::default(), Arc::new(DefaultInterpreter))
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_quick_add_parses_and_classifies() {
        let mut book = book();
        let QuickAdd::Added(expense) = book.quick_add("uber ride 100 rs", now()).unwrap() else {
            panic!("expected an expense");
        };
        assert_eq!(expense.description, "Uber ride");
        assert_eq!(expense.amount, Decimal::from(100));
        assert_eq!(expense.category, Category::Transport);
        assert_eq!(expense.date, now());
        assert_eq!(expense.id, now().timestamp_millis().to_string());
        assert_eq!(book.expenses().len(), 1);
    }

    #[test]
    fn test_quick_add_without_amount_needs_manual_entry() {
        let mut book = book();
        let outcome = book.quick_add("just chilling", now()).unwrap();
        assert_eq!(outcome, QuickAdd::NeedsManualEntry { text: "just chilling".to_string() });
        assert!(book.expenses().is_empty());

        assert!(matches!(book.quick_add("   ", now()), Err(CoreError::ValidationError { .. })));
    }

    #[test]
    fn test_new_expenses_go_first_with_unique_ids() {
        let mut book = book();
        book.quick_add("Chai 20", now()).unwrap();
        book.quick_add("Samosa 15", now()).unwrap();
        let ids: Vec<&str> = book.expenses().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids[0], format!("{}-1", now().timestamp_millis()));
        assert_eq!(book.expenses()[0].description, "Samosa");
        assert_eq!(book.recent(1).len(), 1);
        assert_eq!(book.recent(10).len(), 2);
    }

    #[test]
    fn test_add_manual_validates() {
        let mut book = book();
        let expense = book
            .add_manual(NewExpense::new("movie NIGHT", Decimal::from_str("250.5").unwrap(), Category::Entertainment), now())
            .unwrap();
        assert_eq!(expense.description, "Movie night");

        let err = book.add_manual(NewExpense::new("Refund", Decimal::from(-5), Category::Other), now());
        assert!(matches!(err, Err(CoreError::ValidationError { .. })));
        assert_eq!(book.expenses().len(), 1);
    }

    #[test]
    fn test_delete_and_clear() {
        let mut book = book();
        book.quick_add("Bus 30", now()).unwrap();
        book.quick_add("Lunch 120", now() + Duration::seconds(1)).unwrap();

        let id = book.expenses()[1].id.clone();
        assert_eq!(book.delete(&id).unwrap().description, "Bus");
        assert!(matches!(book.delete(&id), Err(CoreError::ExpenseNotFound { .. })));
        assert_eq!(book.clear(), 1);
        assert!(book.expenses().is_empty());
    }

    #[test]
    fn test_book_analytics_uses_config_defaults() {
        let mut book = book();
        book.quick_add("Pizza 300", now()).unwrap();
        book.quick_add("Metro 40", now()).unwrap();

        let query = book.default_query();
        assert_eq!(query.period, Period::Week);
        assert_eq!(query.page_size, 10);

        let report = book.analytics(&query, &now());
        assert_eq!(report.summary.total, Decimal::from(340));
        assert_eq!(report.history.items.len(), 2);

        let board = book.dashboard(&now());
        assert_eq!(board.today, Decimal::from(340));
        assert_eq!(board.trend, Trend::NoData);

        let summary = book.summary(&PeriodSelector::new(Period::All).with_category(Some(Category::Food)), &now());
        assert_eq!(summary.total, Decimal::from(300));
    }

    #[test]
    fn test_replace_all() {
        let mut book = book();
        book.quick_add("Tea 10", now()).unwrap();
        book.replace_all(Vec::new());
        assert!(book.expenses().is_empty());
    }
}
