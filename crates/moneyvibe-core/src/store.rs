//! Expense persistence

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::models::Expense;

/// Store reference type
pub type StoreRef = Arc<dyn ExpenseStore>;

/// Trait for expense collection storage
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Load the whole collection, newest first as saved
    async fn load(&self) -> CoreResult<Vec<Expense>>;

    /// Replace the stored collection
    async fn save(&self, expenses: &[Expense]) -> CoreResult<()>;
}

/// Stores the collection as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, message: impl ToString) -> CoreError {
        CoreError::StorageError {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl ExpenseStore for JsonFileStore {
    async fn load(&self) -> CoreResult<Vec<Expense>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No expense file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let expenses: Vec<Expense> = serde_json::from_str(&content).map_err(|e| {
            log::error!("Corrupt expense file {}: {}", self.path.display(), e);
            self.storage_error(e)
        })?;
        log::info!("Loaded {} expenses from {}", expenses.len(), self.path.display());
        Ok(expenses)
    }

    async fn save(&self, expenses: &[Expense]) -> CoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(expenses).map_err(|e| self.storage_error(e))?;
        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        tokio::fs::write(&temp, json).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        log::info!("Saved {} expenses to {}", expenses.len(), self.path.display());
        Ok(())
    }
}
