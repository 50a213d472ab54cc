//! Foreign-key relation resolution
//!
//! Nested fields (`BudgetStatement.budgetStatementWallet`,
//! `BudgetStatementWallet.budgetStatementLineItem`, ...) are resolved without
//! a pre-joined store: the full child collection is fetched through the data
//! source adapter and scanned in memory for records whose foreign-key
//! attribute equals the parent's id. The store never sees the predicate.
//!
//! Every resolution re-fetches the child collection; sibling resolutions do
//! not share or memoize fetches. A query touching a relation under N parents
//! therefore performs N full fetches of the same collection. That cost is an
//! accepted property of the filter-in-application-layer design.

use crate::core::datasource::DataSource;
use crate::core::error::RelationError;
use serde_json::Value;

/// Resolve the children of `parent` in `collection`, matching on
/// `foreign_key`.
///
/// Membership is exact: a record appears in the result iff its `foreign_key`
/// attribute is strictly equal (JSON value equality) to the parent's `id`.
/// Result order follows the order the adapter returned. Zero matches is an
/// empty vector, never an error.
pub async fn related(
    db: &dyn DataSource,
    parent: &Value,
    collection: &str,
    foreign_key: &str,
) -> Result<Vec<Value>, RelationError> {
    let parent_id = parent
        .get("id")
        .filter(|id| !id.is_null())
        .ok_or(RelationError::MissingParentId)?;

    let records = db.fetch_all(collection).await?;

    Ok(records
        .into_iter()
        .filter(|record| record.get(foreign_key) == Some(parent_id))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryDataSource;
    use serde_json::json;

    fn store() -> InMemoryDataSource {
        InMemoryDataSource::from_collections([(
            "BudgetStatementWallet".to_string(),
            vec![
                json!({"id": "w1", "budgetStatementId": "bs1", "name": "Permanent Team"}),
                json!({"id": "w2", "budgetStatementId": "bs2", "name": "Incubation"}),
                json!({"id": "w3", "budgetStatementId": "bs1", "name": "Grants"}),
            ],
        )])
    }

    #[tokio::test]
    async fn matches_exactly_the_children_with_equal_foreign_key() {
        let db = store();
        let parent = json!({"id": "bs1", "month": "2023-01"});

        let wallets = related(&db, &parent, "BudgetStatementWallet", "budgetStatementId")
            .await
            .unwrap();

        let ids: Vec<&str> = wallets
            .iter()
            .map(|w| w["id"].as_str().unwrap())
            .collect();
        // Adapter order is preserved.
        assert_eq!(ids, vec!["w1", "w3"]);
    }

    #[tokio::test]
    async fn childless_parent_yields_an_empty_list() {
        let db = store();
        let parent = json!({"id": "bs9"});

        let wallets = related(&db, &parent, "BudgetStatementWallet", "budgetStatementId")
            .await
            .unwrap();
        assert!(wallets.is_empty());
    }

    #[tokio::test]
    async fn parent_without_id_is_an_error() {
        let db = store();
        let parent = json!({"month": "2023-01"});

        let err = related(&db, &parent, "BudgetStatementWallet", "budgetStatementId")
            .await
            .unwrap_err();
        assert!(matches!(err, RelationError::MissingParentId));
    }

    #[tokio::test]
    async fn id_equality_is_by_value_not_by_type_coercion() {
        let db = InMemoryDataSource::from_collections([(
            "BudgetStatementLineItem".to_string(),
            vec![
                json!({"id": "li1", "budgetStatementWalletId": "1"}),
                json!({"id": "li2", "budgetStatementWalletId": 1}),
            ],
        )]);
        let parent = json!({"id": "1"});

        let items = related(&db, &parent, "BudgetStatementLineItem", "budgetStatementWalletId")
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "li1");
    }
}
