//! The single-field filter contract for filterable root queries
//!
//! Every `get`-shaped root query (`budgetStatement(filter:)`,
//! `budgetStatementWallet(filter:)`, ...) accepts an input object in which
//! every field is optional but at most one may be supplied. Validation turns
//! the raw argument map into a [`Predicate`]: the one store-side equality
//! predicate to apply, or [`Predicate::All`] when no narrowing was requested.

use crate::core::error::FilterError;
use serde_json::Value;

/// The raw `filter` argument as a field-name → value mapping.
pub type FilterMap = serde_json::Map<String, Value>;

/// The validated outcome of a filter input.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// No filter field supplied; the query is an unfiltered fetch.
    All,
    /// Exactly one filter field supplied; push it down to the store as an
    /// equality predicate.
    Eq { field: String, value: Value },
}

/// Validate a filter mapping into a single predicate.
///
/// A field explicitly set to `null` still counts as supplied: the contract is
/// about how many fields the caller named, not about their values. Supplying
/// two or more fields fails with [`FilterError::MultipleParameters`] before
/// any storage access happens.
pub fn single_predicate(filter: Option<&FilterMap>) -> Result<Predicate, FilterError> {
    let Some(filter) = filter else {
        return Ok(Predicate::All);
    };

    if filter.len() > 1 {
        return Err(FilterError::MultipleParameters);
    }

    match filter.iter().next() {
        None => Ok(Predicate::All),
        Some((field, value)) => Ok(Predicate::Eq {
            field: field.clone(),
            value: value.clone(),
        }),
    }
}
