//! Core module containing the filter contract, relation resolution and the
//! storage boundary

pub mod datasource;
pub mod error;
pub mod filter;
pub mod relation;

pub use datasource::{DataSource, SharedDataSource};
pub use error::{ComposeError, FilterError, RelationError, StorageError};
pub use filter::{FilterMap, Predicate, single_predicate};
pub use relation::related;
