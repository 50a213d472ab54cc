//! Core unit entity family
//!
//! Same wired pattern as the budget statement family: `list` / `get(filter:)`
//! root queries over the `CoreUnit` collection, plus the inverse relation to
//! the budget statements published by the unit (foreign key `cuId`).

use super::budget_statement::BUDGET_STATEMENTS;
use super::composer::SchemaFragment;
use super::fields::{attr, filtered_query, list_query, relation};
use async_graphql::dynamic::{InputObject, InputValue, Object, TypeRef};

pub const CORE_UNITS: &str = "CoreUnit";

pub fn fragment() -> SchemaFragment {
    SchemaFragment::new("core-unit")
        .object(core_unit())
        .input(core_unit_filter())
        .query(list_query(
            "coreUnits",
            TypeRef::named_nn_list("CoreUnit"),
            CORE_UNITS,
        ))
        .query(filtered_query(
            "coreUnit",
            "CoreUnit",
            "CoreUnitFilter",
            CORE_UNITS,
        ))
}

fn core_unit() -> Object {
    Object::new("CoreUnit")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(
            attr("code", TypeRef::named_nn(TypeRef::STRING))
                .description("Core Unit code as defined in MIP39"),
        )
        .field(attr("name", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("category", TypeRef::named(TypeRef::STRING)))
        .field(attr("sentenceDescription", TypeRef::named(TypeRef::STRING)))
        .field(attr("paragraphDescription", TypeRef::named(TypeRef::STRING)))
        .field(attr("paragraphImage", TypeRef::named(TypeRef::STRING)))
        .field(
            relation(
                "budgetStatements",
                "BudgetStatement",
                BUDGET_STATEMENTS,
                "cuId",
            )
            .description("Budget statements published by this core unit"),
        )
}

fn core_unit_filter() -> InputObject {
    InputObject::new("CoreUnitFilter")
        .field(InputValue::new("id", TypeRef::named(TypeRef::ID)))
        .field(InputValue::new("code", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new("name", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new("category", TypeRef::named(TypeRef::STRING)))
}
