//! Configuration management for moneyvibe
//!
//! This module handles loading, validation, and management of
//! moneyvibe configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the JSON file holding the expense collection
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./data/expenses.json")
}

/// Analytics view defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Period selected when none is given
    #[serde(default)]
    pub default_period: Period,
    /// Sort order for the history list
    #[serde(default)]
    pub default_sort: SortOrder,
    /// Number of days shown in the daily movement chart
    #[serde(default = "default_trend_days")]
    pub trend_days: usize,
    /// Number of calendar months in the monthly overview
    #[serde(default = "default_monthly_months")]
    pub monthly_months: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_period: Period::Week,
            default_sort: SortOrder::Newest,
            trend_days: default_trend_days(),
            monthly_months: default_monthly_months(),
        }
    }
}

fn default_trend_days() -> usize {
    14
}

fn default_monthly_months() -> u32 {
    6
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Expenses per history page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Number of expenses in the recent list
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            recent_count: default_recent_count(),
        }
    }
}

fn default_items_per_page() -> usize {
    10
}

fn default_recent_count() -> usize {
    20
}

/// Time period enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Rolling seven days ending today
    Week,
    /// Current calendar month
    Month,
    /// Current calendar year
    Year,
    /// All time
    All,
    /// An explicitly chosen year-month
    Custom,
}

impl Default for Period {
    fn default() -> Self {
        Period::Week
    }
}

impl std::str::FromStr for Period {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            "all" => Ok(Period::All),
            "custom" => Ok(Period::Custom),
            _ => Err(format!("Invalid period: {}", s)),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Week => write!(f, "week"),
            Period::Month => write!(f, "month"),
            Period::Year => write!(f, "year"),
            Period::All => write!(f, "all"),
            Period::Custom => write!(f, "custom"),
        }
    }
}

/// History sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent first
    Newest,
    /// Oldest first
    Oldest,
    /// Largest amount first
    Highest,
    /// Smallest amount first
    Lowest,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Newest
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "highest" => Ok(SortOrder::Highest),
            "lowest" => Ok(SortOrder::Lowest),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Oldest => write!(f, "oldest"),
            SortOrder::Highest => write!(f, "highest"),
            SortOrder::Lowest => write!(f, "lowest"),
        }
    }
}

/// Currency and number formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol prefixed to amounts
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Number of decimal places shown
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimal_places: default_decimal_places(),
        }
    }
}

fn default_symbol() -> String {
    "₹".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Analytics defaults
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError,
        })?;

        Self::from_yaml(&content)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match Self::load(path) {
            Err(ConfigError::FileNotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content).map_err(|_| ConfigError::InvalidYaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.pagination.items_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.items_per_page".to_string(),
                reason: "Items per page must be greater than 0".to_string(),
            });
        }

        if self.currency.decimal_places > 2 {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 2".to_string(),
            });
        }

        if self.analytics.trend_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analytics.trend_days".to_string(),
                reason: "Trend days must be greater than 0".to_string(),
            });
        }

        if self.analytics.monthly_months == 0 || self.analytics.monthly_months > 24 {
            return Err(ConfigError::InvalidValue {
                field: "analytics.monthly_months".to_string(),
                reason: "Monthly overview must cover between 1 and 24 months".to_string(),
            });
        }

        if self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "storage.path".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}
