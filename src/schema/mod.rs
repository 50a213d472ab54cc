//! Schema composition and the entity modules
//!
//! Each entity family lives in its own module and exports a `fragment()`
//! describing its full contribution; [`compose`] folds them all into the one
//! executable schema the gateway serves.

pub mod budget_statement;
pub mod composer;
pub mod core_unit;
pub mod cu_mip;
mod fields;
pub mod util_types;

pub use composer::{SchemaComposer, SchemaFragment};

use crate::core::error::ComposeError;
use async_graphql::dynamic::Schema;

/// Compose every entity module into the executable schema.
///
/// Fails with a [`ComposeError`] when two modules collide on a type or root
/// field; callers must treat that as fatal and not serve traffic.
pub fn compose() -> Result<Schema, ComposeError> {
    SchemaComposer::new()
        .register(util_types::fragment())
        .register(core_unit::fragment())
        .register(budget_statement::fragment())
        .register(cu_mip::fragment())
        .compose()
}
