//! MoneyVibe main entry point

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::{DateTime, Local, Utc};
use clap::{Parser, Subcommand};
use moneyvibe_config::{Config, Period, SortOrder};
use moneyvibe_core::analytics::sort_and_paginate;
use moneyvibe_core::time::{select_by_period, PeriodSelector};
use moneyvibe_core::{
    AnalyticsReport, CoreError, DefaultErrorLogger, ErrorContext, ErrorLogger, Expense, ExpenseBook,
    ExpenseStore, JsonFileStore, NewExpense, PageLink, QuickAdd,
};
use moneyvibe_parser::{parse_amount, Category, YearMonth};
use moneyvibe_utils::format_currency;
use rust_decimal::Decimal;
use serde_json::json;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "moneyvibe")]
#[command(author = "MoneyVibe Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Quick-entry expense tracker with category analytics", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "moneyvibe.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an expense from free text, e.g. `add Uber 100 rs`
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Add an expense field by field
    AddManual {
        #[arg(short, long)]
        description: String,
        #[arg(short, long, value_parser = parse_amount)]
        amount: Decimal,
        #[arg(short = 't', long, default_value = "other")]
        category: Category,
    },
    /// List expenses, one page at a time
    List {
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        sort: Option<SortOrder>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Delete an expense by id
    Delete { id: String },
    /// Delete every expense
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
    /// Totals for a period
    Summary {
        #[arg(long)]
        period: Option<Period>,
        #[arg(long)]
        category: Option<Category>,
        /// Month for the custom period, as YYYY-MM
        #[arg(long)]
        month: Option<YearMonth>,
    },
    /// Full analytics report
    Analytics {
        #[arg(long)]
        period: Option<Period>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        month: Option<YearMonth>,
        #[arg(long)]
        sort: Option<SortOrder>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Today, this week and this month at a glance
    Dashboard,
    /// Print the default configuration file
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Command::InitConfig = args.command {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = Config::load_or_default(&args.config)
        .map_err(|e| {
            report(
                CoreError::from(e),
                ErrorContext::new("load_config").with_data("path", json!(args.config.display().to_string())),
            )
        })
        .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level))
        .init();
    log::debug!("Config loaded: storage path={}", config.storage.path.display());

    let rt = Runtime::new()?;
    rt.block_on(run(args.command, config))
}

/// Log a core error with its context and hand it back for the exit path
fn report(error: CoreError, context: ErrorContext) -> anyhow::Error {
    DefaultErrorLogger.log_error(&error, &context);
    anyhow::Error::new(error)
}

async fn run(command: Command, config: Config) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&config.storage.path);
    let expenses = store
        .load()
        .await
        .map_err(|e| report(e, storage_context("load_expenses", &store)))?;
    let mut book = ExpenseBook::with_expenses(config, expenses);
    let now = Local::now();
    let now_utc = now.with_timezone(&Utc);

    match command {
        Command::Add { text } => {
            let text = text.join(" ");
            let context = ErrorContext::new("quick_add").with_data("input", json!(text));
            match book.quick_add(&text, now_utc).map_err(|e| report(e, context.clone()))? {
                QuickAdd::Added(expense) => {
                    println!("Added {}", describe(&book, &expense, &now));
                    save(&store, &book).await?;
                }
                QuickAdd::NeedsManualEntry { text } => {
                    DefaultErrorLogger.log_warning("no amount in quick entry", &context);
                    println!("Couldn't find an amount in \"{}\".", text);
                    println!("Try '<description> <amount>' such as 'Uber 100', or use `moneyvibe add-manual`.");
                }
            }
        }
        Command::AddManual {
            description,
            amount,
            category,
        } => {
            let expense = book
                .add_manual(NewExpense::new(description, amount, category), now_utc)
                .map_err(|e| report(e, ErrorContext::new("add_manual")))?;
            println!("Added {}", describe(&book, &expense, &now));
            save(&store, &book).await?;
        }
        Command::List { category, sort, page } => {
            let filtered = select_by_period(
                book.expenses(),
                &PeriodSelector::new(Period::All).with_category(category),
                &now,
            );
            let sort = sort.unwrap_or(book.config().analytics.default_sort);
            let page = sort_and_paginate(&filtered, sort, book.config().pagination.items_per_page, page);
            if page.items.is_empty() {
                println!("No expenses found");
            }
            for expense in &page.items {
                println!("{:>16}  {}", expense.id, describe(&book, expense, &now));
            }
            if page.total_pages > 1 {
                println!("Page {} of {} ({} expenses)", page.page, page.total_pages, page.total_count);
            }
        }
        Command::Delete { id } => {
            let removed = book
                .delete(&id)
                .map_err(|e| report(e, ErrorContext::new("delete").with_data("id", json!(id))))?;
            println!("Deleted {}", describe(&book, &removed, &now));
            save(&store, &book).await?;
        }
        Command::Clear { yes } => {
            if !yes {
                bail!("Refusing to delete all expenses without --yes");
            }
            let count = book.clear();
            save(&store, &book).await?;
            println!("Deleted {} expenses", count);
        }
        Command::Summary {
            period,
            category,
            month,
        } => {
            let selector = PeriodSelector::new(period.unwrap_or(book.config().analytics.default_period))
                .with_category(category)
                .with_month(month);
            let summary = book.summary(&selector, &now);
            println!("{}", selector.description(&now));
            println!("  Total:         {}", money(&book, summary.total));
            println!("  Transactions:  {}", summary.count);
            println!("  Per day:       {}", money(&book, summary.average_per_day));
        }
        Command::Analytics {
            period,
            category,
            month,
            sort,
            page,
            json,
        } => {
            let mut query = book.default_query();
            query.period = period.unwrap_or(query.period);
            query.sort = sort.unwrap_or(query.sort);
            query.category = category;
            query.month = month;
            query.page = page;

            let analytics = book.analytics(&query, &now);
            if json {
                println!("{}", serde_json::to_string_pretty(&analytics)?);
            } else {
                print_report(&book, &analytics, &now);
            }
        }
        Command::Dashboard => {
            let board = book.dashboard(&now);
            println!("Today:      {}  ({})", money(&book, board.today), board.trend);
            println!("This week:  {}", money(&book, board.week));
            println!("This month: {}", money(&book, board.month));
            println!();
            for (category, amount) in board.today_by_category.iter() {
                println!("  {:<10} {}", category.name(), money(&book, amount));
            }
            println!();
            let recent = book.recent(book.config().pagination.recent_count);
            if recent.is_empty() {
                println!("No expenses yet. Start tracking!");
            }
            for expense in recent {
                println!("  {}", describe(&book, expense, &now));
            }
        }
        Command::InitConfig => print!("{}", Config::generate_default()),
    }

    Ok(())
}

async fn save(store: &JsonFileStore, book: &ExpenseBook) -> anyhow::Result<()> {
    store
        .save(book.expenses())
        .await
        .map_err(|e| report(e, storage_context("save_expenses", store)))
}

fn storage_context(operation: &str, store: &JsonFileStore) -> ErrorContext {
    ErrorContext::new(operation).with_data("path", json!(store.path().display().to_string()))
}

fn money(book: &ExpenseBook, amount: Decimal) -> String {
    let currency = &book.config().currency;
    format_currency(amount, &currency.symbol, currency.decimal_places)
}

fn describe(book: &ExpenseBook, expense: &Expense, now: &DateTime<Local>) -> String {
    let local = expense.date.with_timezone(&now.timezone());
    format!(
        "{:<24} {:>10}  {:<9} {}",
        expense.description,
        money(book, expense.amount),
        expense.category.name(),
        local.format("%-d %b %Y, %H:%M")
    )
}

fn print_report(book: &ExpenseBook, report: &AnalyticsReport, now: &DateTime<Local>) {
    println!("== {} ==", report.title);
    println!(
        "Total {}  ·  {} transactions  ·  {} per day",
        money(book, report.summary.total),
        report.summary.count,
        money(book, report.summary.average_per_day)
    );

    println!("\nBy category");
    if report.breakdown.shares.is_empty() {
        println!("  No data");
    }
    for share in &report.breakdown.shares {
        println!(
            "  {:<10} {:>12} {:>4}%  ({})",
            share.category.name(),
            money(book, share.amount),
            share.percent,
            share.count
        );
    }

    println!("\nTrend");
    for point in &report.trend {
        println!("  {:<7} {}", point.label, money(book, point.amount));
    }

    if !report.movement.days.is_empty() {
        let sign = if report.movement.change_percent >= Decimal::ZERO { "+" } else { "" };
        println!(
            "\nLatest day {}  {}{}% vs prev",
            money(book, report.movement.current),
            sign,
            report.movement.change_percent
        );
    }

    println!("\nMonthly");
    for point in &report.monthly {
        println!("  {:<7} {}", point.label, money(book, point.amount));
    }

    println!("\nInsights");
    if report.insights.is_empty() {
        println!("  Add some expenses to see insights!");
    }
    for insight in &report.insights {
        println!("  [{}] {}", insight.kind.tone(), insight.message);
    }

    println!("\nHistory");
    if report.history.items.is_empty() {
        println!("  No expenses found");
    }
    for expense in &report.history.items {
        println!("  {}", describe(book, expense, now));
    }
    if !report.pages.is_empty() {
        let links: Vec<String> = report
            .pages
            .iter()
            .map(|link| match link {
                PageLink::Page { number, current: true } => format!("[{}]", number),
                PageLink::Page { number, .. } => number.to_string(),
                PageLink::Gap => "…".to_string(),
            })
            .collect();
        println!("  Pages: {}", links.join(" "));
    }
}
