//! # Ecosystem API
//!
//! A GraphQL API exposing decentralized-organization budget statement records
//! and their nested sub-records through a single composed schema.
//!
//! ## Architecture
//!
//! - **Entity modules** (`schema::budget_statement`, `schema::core_unit`, ...):
//!   each declares one entity family's queryable shape (object types, enums,
//!   filter inputs) together with its root query fields and relation resolvers,
//!   packaged as a self-contained [`SchemaFragment`](schema::SchemaFragment).
//! - **Schema composer** (`schema::composer`): folds all fragments into one
//!   executable schema, rejecting duplicate type names and duplicate root
//!   fields at startup rather than at query time.
//! - **Filter contract** (`core::filter`): filterable root queries accept at
//!   most one filter field; the single predicate is pushed down to the store,
//!   everything else is a contract violation.
//! - **Relation resolution** (`core::relation`): nested fields are resolved by
//!   fetching the full child collection and scanning it in memory for records
//!   whose foreign key equals the parent's id.
//! - **Data source adapter** (`core::datasource`): the sole storage boundary.
//!   Implementations live under [`storage`] (in-memory always, Postgres behind
//!   the `postgres` feature).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ecosystem::prelude::*;
//!
//! let schema = ecosystem::schema::compose()?;
//! let db: SharedDataSource = Arc::new(InMemoryDataSource::new());
//! ecosystem::server::serve(schema, db, "0.0.0.0:4000").await?;
//! ```

pub mod config;
pub mod core;
pub mod schema;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        DataSource, SharedDataSource,
        error::{ComposeError, FilterError, RelationError, StorageError},
        filter::{FilterMap, Predicate, single_predicate},
        relation::related,
    };

    // === Schema ===
    pub use crate::schema::{SchemaComposer, SchemaFragment, compose};

    // === Storage ===
    pub use crate::storage::InMemoryDataSource;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresDataSource;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde_json::{Value, json};
    pub use std::sync::Arc;
}
