//! The storage boundary required by the resolvers
//!
//! The core only ever reads. It needs exactly two capabilities per collection:
//! a bulk fetch of every record, and a bulk fetch narrowed by a single
//! store-side equality predicate. Anything richer (joins, multi-field
//! filters, pagination) is deliberately not part of the contract; relation
//! resolution filters in memory instead (see [`crate::core::relation`]).

use crate::core::error::StorageError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Read-only access to the backing store.
///
/// Records cross this boundary as JSON objects; the GraphQL layer projects
/// typed fields out of them. Collection names are opaque strings owned by the
/// entity modules (they double as table names in the Postgres backend).
///
/// Implementations must be shareable across concurrent resolutions; the
/// gateway injects one instance per process as a [`SharedDataSource`].
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch every record of a collection, in store order.
    ///
    /// An unknown collection is indistinguishable from an empty one and
    /// yields an empty vector, not an error.
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Value>, StorageError>;

    /// Fetch the records of a collection whose `field` attribute equals
    /// `value`, with the equality evaluated by the store itself.
    ///
    /// Used only by root-level filtered queries; relation resolution never
    /// pushes predicates down.
    async fn fetch_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StorageError>;
}

/// The unit of injection into GraphQL request context.
pub type SharedDataSource = Arc<dyn DataSource>;
