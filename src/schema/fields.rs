//! Field constructors shared by every entity module
//!
//! Records cross the adapter boundary as JSON objects, so all resolvers here
//! are projections over a `serde_json::Value` parent: scalar attributes read
//! one property, relation fields run the foreign-key scan, root queries go
//! through the data source injected into the request context.
//!
//! Root-field helpers return `(name, field)` pairs; the composer keys its
//! collision registry on the name half.

use crate::core::datasource::SharedDataSource;
use crate::core::filter::{FilterMap, Predicate, single_predicate};
use crate::core::relation::related;
use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, ResolverContext, TypeRef};
use async_graphql::{Name, Value as GqlValue};
use serde_json::Value;

fn json_to_gql(value: &Value) -> async_graphql::Result<GqlValue> {
    GqlValue::from_json(value.clone()).map_err(|e| async_graphql::Error::new(e.to_string()))
}

/// A scalar attribute projected straight out of the parent record.
/// Absent and null attributes both resolve to null.
pub(crate) fn attr(name: &'static str, ty: TypeRef) -> Field {
    Field::new(name, ty, move |ctx| {
        FieldFuture::new(async move {
            let record = ctx.parent_value.try_downcast_ref::<Value>()?;
            match record.get(name) {
                None | Some(Value::Null) => Ok(None),
                Some(value) => Ok(Some(FieldValue::value(json_to_gql(value)?))),
            }
        })
    })
}

/// An enum-typed attribute. The store holds the variant name as a string.
pub(crate) fn enum_attr(name: &'static str, enum_type: &'static str) -> Field {
    Field::new(name, TypeRef::named(enum_type), move |ctx| {
        FieldFuture::new(async move {
            let record = ctx.parent_value.try_downcast_ref::<Value>()?;
            match record.get(name) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(variant)) => Ok(Some(FieldValue::value(GqlValue::Enum(
                    Name::new(variant),
                )))),
                Some(other) => Err(async_graphql::Error::new(format!(
                    "expected string for enum field `{name}`, found {other}"
                ))),
            }
        })
    })
}

/// A nested relation field: fetch the full child collection through the data
/// source and keep the records whose `foreign_key` equals the parent's id.
pub(crate) fn relation(
    name: &'static str,
    child_type: &'static str,
    collection: &'static str,
    foreign_key: &'static str,
) -> Field {
    Field::new(name, TypeRef::named_list(child_type), move |ctx| {
        FieldFuture::new(async move {
            let db = ctx.data::<SharedDataSource>()?;
            let parent = ctx.parent_value.try_downcast_ref::<Value>()?;
            let children = related(db.as_ref(), parent, collection, foreign_key).await?;
            Ok(Some(FieldValue::list(
                children.into_iter().map(|record| FieldValue::owned_any(record)),
            )))
        })
    })
}

/// An object-typed attribute embedded in the parent record itself.
pub(crate) fn embedded(name: &'static str, ty: TypeRef) -> Field {
    Field::new(name, ty, move |ctx| {
        FieldFuture::new(async move {
            let record = ctx.parent_value.try_downcast_ref::<Value>()?;
            match record.get(name) {
                None | Some(Value::Null) => Ok(None),
                Some(value) => Ok(Some(FieldValue::owned_any(value.clone()))),
            }
        })
    })
}

/// A list-of-objects attribute embedded in the parent record itself.
pub(crate) fn embedded_list(name: &'static str, ty: TypeRef) -> Field {
    Field::new(name, ty, move |ctx| {
        FieldFuture::new(async move {
            let record = ctx.parent_value.try_downcast_ref::<Value>()?;
            match record.get(name) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::Array(items)) => Ok(Some(FieldValue::list(
                    items.iter().cloned().map(|record| FieldValue::owned_any(record)),
                ))),
                Some(other) => Err(async_graphql::Error::new(format!(
                    "expected array for field `{name}`, found {other}"
                ))),
            }
        })
    })
}

/// The `list<Entity>` root query shape: the full collection, unfiltered.
pub(crate) fn list_query(
    name: &'static str,
    ty: TypeRef,
    collection: &'static str,
) -> (&'static str, Field) {
    let field = Field::new(name, ty, move |ctx| {
        FieldFuture::new(async move {
            let db = ctx.data::<SharedDataSource>()?;
            let records = db.fetch_all(collection).await?;
            Ok(Some(FieldValue::list(
                records.into_iter().map(|record| FieldValue::owned_any(record)),
            )))
        })
    });
    (name, field)
}

/// The `get<Entity>(filter:)` root query shape: validate the single-field
/// filter contract, then delegate the one predicate to the store. The store
/// is never consulted when validation fails.
pub(crate) fn filtered_query(
    name: &'static str,
    item_type: &'static str,
    filter_type: &'static str,
    collection: &'static str,
) -> (&'static str, Field) {
    let field = Field::new(name, TypeRef::named_list(item_type), move |ctx| {
        FieldFuture::new(async move {
            let filter = filter_argument(&ctx)?;
            let predicate = single_predicate(filter.as_ref())?;

            let db = ctx.data::<SharedDataSource>()?;
            let records = match predicate {
                Predicate::All => db.fetch_all(collection).await?,
                Predicate::Eq { field, value } => {
                    db.fetch_one(collection, &field, &value).await?
                }
            };
            Ok(Some(FieldValue::list(
                records.into_iter().map(|record| FieldValue::owned_any(record)),
            )))
        })
    })
    .argument(InputValue::new("filter", TypeRef::named(filter_type)));
    (name, field)
}

/// A declared-but-unimplemented root field; resolves to null.
pub(crate) fn stub(name: &'static str, ty: TypeRef) -> (&'static str, Field) {
    let field = Field::new(name, ty, |_ctx| {
        FieldFuture::new(async move { Ok(None::<FieldValue>) })
    });
    (name, field)
}

/// Read the `filter` argument into a plain field-name → value mapping.
fn filter_argument(ctx: &ResolverContext<'_>) -> async_graphql::Result<Option<FilterMap>> {
    match ctx.args.as_index_map().get("filter") {
        None | Some(GqlValue::Null) => Ok(None),
        Some(GqlValue::Object(fields)) => {
            let mut map = FilterMap::new();
            for (key, value) in fields {
                let json = value
                    .clone()
                    .into_json()
                    .map_err(|e| async_graphql::Error::new(e.to_string()))?;
                map.insert(key.to_string(), json);
            }
            Ok(Some(map))
        }
        Some(other) => Err(async_graphql::Error::new(format!(
            "expected an input object for `filter`, found {other}"
        ))),
    }
}
