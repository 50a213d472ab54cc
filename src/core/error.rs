//! Typed errors for the filter contract, schema composition, relation
//! resolution and the storage boundary
//!
//! The core performs no error translation: storage failures surface on the
//! field that triggered them with their message intact, filter violations
//! surface as request errors, and composition collisions abort startup before
//! the process serves traffic.

use thiserror::Error;

/// Violation of the single-field filter contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// More than one field was supplied in a filter input.
    ///
    /// The message is part of the public API contract; callers match on it.
    #[error("Choose one parameter only")]
    MultipleParameters,
}

/// Failure while resolving a nested relation field.
#[derive(Debug, Error)]
pub enum RelationError {
    /// The parent record carries no usable `id` attribute.
    #[error("parent record has no id attribute")]
    MissingParentId,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failure reported by a [`DataSource`](crate::core::DataSource)
/// implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend rejected or failed the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Configuration error detected while composing schema fragments.
///
/// All variants are fatal at startup: a process must not serve traffic with
/// an ambiguously merged schema.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("type `{name}` is defined by both the `{first}` and `{second}` modules")]
    DuplicateType {
        name: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Query field `{field}` is defined by both the `{first}` and `{second}` modules")]
    DuplicateQueryField {
        field: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Mutation field `{field}` is defined by both the `{first}` and `{second}` modules")]
    DuplicateMutationField {
        field: String,
        first: &'static str,
        second: &'static str,
    },

    /// The underlying schema builder rejected the merged schema.
    #[error("schema failed to build: {0}")]
    Build(String),
}

// `async_graphql::Error` provides a blanket `impl<T: Display + Send + Sync +
// 'static> From<T>` that constructs the error from the value's `Display`
// output — identical to `Error::new(err.to_string())` — so these error types
// convert via `?` and `.into()` without bespoke impls.
