//! PostgreSQL data source backend using sqlx.
//!
//! Each collection maps to a table of the same name; rows are projected to
//! JSON with `to_jsonb` so the adapter boundary stays schema-agnostic. The
//! single-predicate `fetch_one` compares the text form of the requested
//! attribute, matching the in-memory backend's equality semantics for the
//! scalar values the filter inputs can carry.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! ecosystem-api = { version = "0.1", features = ["postgres"] }
//! ```

use crate::core::datasource::DataSource;
use crate::core::error::StorageError;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;

/// Data source backed by a PostgreSQL database.
#[derive(Clone, Debug)]
pub struct PostgresDataSource {
    pool: PgPool,
}

impl PostgresDataSource {
    /// Create a data source from an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database at `url` and create a data source.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let pool = PgPool::connect(url)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(Self::new(pool))
    }
}

/// Collection names become quoted identifiers in SQL, so they must not be
/// able to escape the quotes.
fn table_ident(collection: &str) -> Result<&str, StorageError> {
    let valid = !collection.is_empty()
        && collection
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(collection)
    } else {
        Err(StorageError::Backend(format!(
            "invalid collection name: {collection}"
        )))
    }
}

/// Text form of a filter value, as `->>` produces for the stored attribute.
fn text_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl DataSource for PostgresDataSource {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        let sql = format!(r#"SELECT to_jsonb(t) FROM "{}" t"#, table_ident(collection)?);

        let rows: Vec<Json<Value>> = sqlx::query_scalar(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.0).collect())
    }

    async fn fetch_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StorageError> {
        let sql = format!(
            r#"SELECT to_jsonb(t) FROM "{}" t WHERE to_jsonb(t) ->> $1 = $2"#,
            table_ident(collection)?
        );

        let rows: Vec<Json<Value>> = sqlx::query_scalar(&sql)
            .bind(field)
            .bind(text_form(value))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.0).collect())
    }
}
