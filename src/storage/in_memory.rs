//! In-memory implementation of DataSource for testing and development

use crate::core::datasource::DataSource;
use crate::core::error::StorageError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory data source implementation
///
/// Collections are keyed by name and hold records in insertion order, which
/// is the order `fetch_all` returns them in. Useful for testing and for
/// running the API without a database. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryDataSource {
    collections: Arc<RwLock<HashMap<String, Vec<Value>>>>,
}

impl InMemoryDataSource {
    /// Create an empty in-memory data source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a data source pre-populated with the given collections
    pub fn from_collections<I>(collections: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Value>)>,
    {
        Self {
            collections: Arc::new(RwLock::new(collections.into_iter().collect())),
        }
    }

    /// Load collections from a JSON seed file
    ///
    /// The file must contain one object mapping collection names to arrays
    /// of records:
    ///
    /// ```json
    /// {
    ///   "BudgetStatement": [{"id": "bs1", "month": "2023-01"}],
    ///   "BudgetStatementWallet": [{"id": "w1", "budgetStatementId": "bs1"}]
    /// }
    /// ```
    pub fn from_seed_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {path}"))?;
        let collections: HashMap<String, Vec<Value>> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse seed file {path}"))?;
        Ok(Self::from_collections(collections))
    }

    /// Append a record to a collection, creating the collection if needed
    pub fn insert(&self, collection: &str, record: Value) -> Result<(), StorageError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| StorageError::Backend(format!("failed to acquire write lock: {e}")))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .push(record);

        Ok(())
    }
}

#[async_trait]
impl DataSource for InMemoryDataSource {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| StorageError::Backend(format!("failed to acquire read lock: {e}")))?;

        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn fetch_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StorageError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| StorageError::Backend(format!("failed to acquire read lock: {e}")))?;

        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
