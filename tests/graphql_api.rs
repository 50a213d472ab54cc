//! Integration tests for the composed GraphQL schema.
//!
//! Exercises the full stack below the transport: schema composition, the
//! single-field filter contract, store delegation, relation resolution at
//! both nesting levels, and the partial-failure semantics of storage errors.

use async_graphql::Request;
use async_trait::async_trait;
use ecosystem::core::{DataSource, SharedDataSource, StorageError};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ecosystem::storage::InMemoryDataSource;

/// Two budget statements for the same core unit; bs1 has the full child
/// tree, bs2 has no children at all.
fn seeded_store() -> InMemoryDataSource {
    InMemoryDataSource::from_collections([
        (
            "CoreUnit".to_string(),
            vec![json!({"id": "cu1", "code": "SES-001", "name": "Sustainable Ecosystem Scaling"})],
        ),
        (
            "BudgetStatement".to_string(),
            vec![
                json!({
                    "id": "bs1",
                    "cuId": "cu1",
                    "month": "2023-01",
                    "budgetStatus": "Final",
                    "publicationUrl": "https://forum.example/bs1",
                    "cuCode": "SES-001"
                }),
                json!({
                    "id": "bs2",
                    "cuId": "cu1",
                    "month": "2023-02",
                    "budgetStatus": "Draft",
                    "publicationUrl": "https://forum.example/bs2",
                    "cuCode": "SES-001"
                }),
            ],
        ),
        (
            "BudgetStatementFTEs".to_string(),
            vec![json!({"id": "fte1", "budgetStatementId": "bs1", "month": "2023-01", "ftes": 7.5})],
        ),
        (
            "BudgetStatementMKRVest".to_string(),
            vec![json!({
                "id": "vest1",
                "budgetStatementId": "bs1",
                "vestingDate": "2023-01-15",
                "mkrAmount": 24.0
            })],
        ),
        (
            "BudgetStatementWallet".to_string(),
            vec![json!({
                "id": "w1",
                "budgetStatementId": "bs1",
                "name": "Permanent Team",
                "address": "0xb5eb779ce300024edb3df9b6c007e312584f6f4f"
            })],
        ),
        (
            "BudgetStatementLineItem".to_string(),
            vec![json!({
                "id": "li1",
                "budgetStatementWalletId": "w1",
                "month": "2023-01",
                "position": 1,
                "budgetCategory": "Compensation"
            })],
        ),
        (
            "BudgetStatementPayment".to_string(),
            vec![json!({
                "id": "p1",
                "budgetStatementWalletId": "w1",
                "transactionDate": "2023-01-31"
            })],
        ),
    ])
}

async fn execute(db: SharedDataSource, query: &str) -> async_graphql::Response {
    let schema = ecosystem::schema::compose().expect("schema must compose");
    schema.execute(Request::new(query).data(db)).await
}

async fn execute_ok(db: SharedDataSource, query: &str) -> Value {
    let response = execute(db, query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().expect("data must be json")
}

#[tokio::test]
async fn two_level_nesting_resolves_through_the_wallet() {
    let db: SharedDataSource = Arc::new(seeded_store());
    let data = execute_ok(
        db,
        r#"{
            budgetStatement(filter: {id: "bs1"}) {
                id
                budgetStatementWallet {
                    id
                    budgetStatementLineItem { id budgetCategory }
                    budgetStatementPayment { id }
                }
            }
        }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "budgetStatement": [{
                "id": "bs1",
                "budgetStatementWallet": [{
                    "id": "w1",
                    "budgetStatementLineItem": [{"id": "li1", "budgetCategory": "Compensation"}],
                    "budgetStatementPayment": [{"id": "p1"}]
                }]
            }]
        })
    );
}

#[tokio::test]
async fn childless_parent_resolves_to_empty_lists_not_errors() {
    let db: SharedDataSource = Arc::new(seeded_store());
    let data = execute_ok(
        db,
        r#"{
            budgetStatement(filter: {id: "bs2"}) {
                id
                budgetStatementFTEs { id }
                budgetStatementWallet { id }
            }
        }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "budgetStatement": [{
                "id": "bs2",
                "budgetStatementFTEs": [],
                "budgetStatementWallet": []
            }]
        })
    );
}

#[tokio::test]
async fn sibling_relations_resolve_independently() {
    let db: SharedDataSource = Arc::new(seeded_store());
    let data = execute_ok(
        db,
        r#"{
            budgetStatements {
                id
                budgetStatementFTEs { ftes }
                budgetStatementMKRVest { mkrAmount }
            }
        }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "budgetStatements": [
                {
                    "id": "bs1",
                    "budgetStatementFTEs": [{"ftes": 7.5}],
                    "budgetStatementMKRVest": [{"mkrAmount": 24.0}]
                },
                {
                    "id": "bs2",
                    "budgetStatementFTEs": [],
                    "budgetStatementMKRVest": []
                }
            ]
        })
    );
}

#[tokio::test]
async fn core_unit_relation_finds_its_budget_statements() {
    let db: SharedDataSource = Arc::new(seeded_store());
    let data = execute_ok(
        db,
        r#"{ coreUnits { code budgetStatements { id } } }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "coreUnits": [{
                "code": "SES-001",
                "budgetStatements": [{"id": "bs1"}, {"id": "bs2"}]
            }]
        })
    );
}

#[tokio::test]
async fn enum_fields_round_trip_as_variant_names() {
    let db: SharedDataSource = Arc::new(seeded_store());
    let data = execute_ok(
        db,
        r#"{ budgetStatement(filter: {budgetStatus: Draft}) { id budgetStatus } }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({"budgetStatement": [{"id": "bs2", "budgetStatus": "Draft"}]})
    );
}

#[tokio::test]
async fn list_query_on_empty_collection_returns_empty_sequence() {
    let db: SharedDataSource = Arc::new(InMemoryDataSource::new());
    let data = execute_ok(db, "{ budgetStatements { id } }").await;
    assert_eq!(data, json!({"budgetStatements": []}));
}

#[tokio::test]
async fn mutations_are_declared_noops() {
    let db: SharedDataSource = Arc::new(seeded_store());

    let data = execute_ok(db.clone(), "mutation { budgetStatementDelete }").await;
    assert_eq!(data, json!({"budgetStatementDelete": null}));

    let data = execute_ok(
        db,
        r#"mutation {
            budgetStatementAdd(input: {
                cuId: "cu1",
                month: "2023-03",
                publicationUrl: "https://forum.example/bs3",
                cuCode: "SES-001"
            }) {
                budgetStatement { id }
            }
        }"#,
    )
    .await;
    assert_eq!(data, json!({"budgetStatementAdd": null}));
}

#[tokio::test]
async fn mip_family_queries_resolve_to_null() {
    let db: SharedDataSource = Arc::new(seeded_store());

    let data = execute_ok(db.clone(), "{ cuMips { id } }").await;
    assert_eq!(data, json!({"cuMips": null}));

    let data = execute_ok(db, r#"{ cuMip(mipCode: "MIP39c2SP10") { id } }"#).await;
    assert_eq!(data, json!({"cuMip": null}));
}

/// Data source wrapper that records every call, for asserting which
/// operations a query did (and did not) trigger.
#[derive(Clone)]
struct RecordingDataSource {
    inner: InMemoryDataSource,
    fetch_all_calls: Arc<AtomicUsize>,
    fetch_one_calls: Arc<Mutex<Vec<(String, String, Value)>>>,
}

impl RecordingDataSource {
    fn new(inner: InMemoryDataSource) -> Self {
        Self {
            inner,
            fetch_all_calls: Arc::new(AtomicUsize::new(0)),
            fetch_one_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn total_calls(&self) -> usize {
        self.fetch_all_calls.load(Ordering::SeqCst) + self.fetch_one_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DataSource for RecordingDataSource {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_all(collection).await
    }

    async fn fetch_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StorageError> {
        self.fetch_one_calls.lock().unwrap().push((
            collection.to_string(),
            field.to_string(),
            value.clone(),
        ));
        self.inner.fetch_one(collection, field, value).await
    }
}

#[tokio::test]
async fn single_key_filter_delegates_to_fetch_one_unmodified() {
    let recording = RecordingDataSource::new(seeded_store());
    let db: SharedDataSource = Arc::new(recording.clone());

    let data = execute_ok(db, r#"{ budgetStatement(filter: {month: "2023-01"}) { id } }"#).await;
    assert_eq!(data, json!({"budgetStatement": [{"id": "bs1"}]}));

    let calls = recording.fetch_one_calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![(
            "BudgetStatement".to_string(),
            "month".to_string(),
            json!("2023-01")
        )]
    );
}

#[tokio::test]
async fn multi_key_filter_fails_before_reaching_the_store() {
    let recording = RecordingDataSource::new(seeded_store());
    let db: SharedDataSource = Arc::new(recording.clone());

    let response = execute(
        db,
        r#"{ budgetStatement(filter: {id: "bs1", month: "2023-01"}) { id } }"#,
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Choose one parameter only");
    assert_eq!(recording.total_calls(), 0);
}

#[tokio::test]
async fn empty_filter_object_is_an_unfiltered_fetch() {
    let recording = RecordingDataSource::new(seeded_store());
    let db: SharedDataSource = Arc::new(recording.clone());

    let data = execute_ok(db, "{ budgetStatement(filter: {}) { id } }").await;
    assert_eq!(
        data,
        json!({"budgetStatement": [{"id": "bs1"}, {"id": "bs2"}]})
    );

    assert_eq!(recording.fetch_all_calls.load(Ordering::SeqCst), 1);
    assert!(recording.fetch_one_calls.lock().unwrap().is_empty());
}

/// Data source that fails every fetch of one collection, for asserting the
/// field-scoped propagation of storage errors.
struct FailingCollection {
    inner: InMemoryDataSource,
    collection: &'static str,
}

#[async_trait]
impl DataSource for FailingCollection {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        if collection == self.collection {
            return Err(StorageError::Backend("connection reset".to_string()));
        }
        self.inner.fetch_all(collection).await
    }

    async fn fetch_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StorageError> {
        if collection == self.collection {
            return Err(StorageError::Backend("connection reset".to_string()));
        }
        self.inner.fetch_one(collection, field, value).await
    }
}

#[tokio::test]
async fn storage_failure_nulls_the_failing_field_and_keeps_siblings() {
    let db: SharedDataSource = Arc::new(FailingCollection {
        inner: seeded_store(),
        collection: "BudgetStatementWallet",
    });

    let response = execute(
        db,
        r#"{
            budgetStatement(filter: {id: "bs1"}) {
                id
                budgetStatementFTEs { id }
                budgetStatementWallet { id }
            }
        }"#,
    )
    .await;

    assert!(!response.errors.is_empty());
    assert!(
        response.errors[0].message.contains("connection reset"),
        "{:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    assert_eq!(data["budgetStatement"][0]["id"], "bs1");
    assert_eq!(data["budgetStatement"][0]["budgetStatementFTEs"], json!([{"id": "fte1"}]));
    assert_eq!(data["budgetStatement"][0]["budgetStatementWallet"], Value::Null);
}
