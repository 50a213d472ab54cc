//! Budget statement entity family
//!
//! The fully wired family: monthly budget statements with three nested
//! collections (FTEs, MKR vesting details, wallets) and two further
//! collections nested under wallets (line items, payments). Every root query
//! follows the uniform `list` / `get(filter:)` shape; nested fields resolve
//! through the foreign-key scan.

use super::composer::SchemaFragment;
use super::fields::{
    attr, embedded, embedded_list, enum_attr, filtered_query, list_query, relation, stub,
};
use async_graphql::dynamic::{Enum, Field, InputObject, InputValue, Object, TypeRef};

pub const BUDGET_STATEMENTS: &str = "BudgetStatement";
pub const FTES: &str = "BudgetStatementFTEs";
pub const MKR_VESTS: &str = "BudgetStatementMKRVest";
pub const WALLETS: &str = "BudgetStatementWallet";
pub const LINE_ITEMS: &str = "BudgetStatementLineItem";
pub const PAYMENTS: &str = "BudgetStatementPayment";

pub fn fragment() -> SchemaFragment {
    SchemaFragment::new("budget-statement")
        .object(budget_statement())
        .object(ftes())
        .object(mkr_vest())
        .object(wallet())
        .object(line_item())
        .object(payment())
        .object(payload())
        .enumeration(status())
        .input(budget_statement_input())
        .input(budget_statement_filter())
        .input(ftes_filter())
        .input(mkr_vest_filter())
        .input(wallet_filter())
        .input(line_item_filter())
        .input(payment_filter())
        .query(list_query(
            "budgetStatements",
            TypeRef::named_nn_list("BudgetStatement"),
            BUDGET_STATEMENTS,
        ))
        .query(filtered_query(
            "budgetStatement",
            "BudgetStatement",
            "BudgetStatementFilter",
            BUDGET_STATEMENTS,
        ))
        .query(list_query(
            "budgetStatementFTEs",
            TypeRef::named_list("BudgetStatementFTEs"),
            FTES,
        ))
        .query(filtered_query(
            "budgetStatementFTE",
            "BudgetStatementFTEs",
            "BudgetStatementFTEsFilter",
            FTES,
        ))
        .query(list_query(
            "budgetStatementMKRVests",
            TypeRef::named_list("BudgetStatementMKRVest"),
            MKR_VESTS,
        ))
        .query(filtered_query(
            "budgetStatementMKRVest",
            "BudgetStatementMKRVest",
            "BudgetStatementMKRVestFilter",
            MKR_VESTS,
        ))
        .query(list_query(
            "budgetStatementWallets",
            TypeRef::named_list("BudgetStatementWallet"),
            WALLETS,
        ))
        .query(filtered_query(
            "budgetStatementWallet",
            "BudgetStatementWallet",
            "BudgetStatementWalletFilter",
            WALLETS,
        ))
        .query(list_query(
            "budgetStatementLineItems",
            TypeRef::named_list("BudgetStatementLineItem"),
            LINE_ITEMS,
        ))
        .query(filtered_query(
            "budgetStatementLineItem",
            "BudgetStatementLineItem",
            "BudgetStatementLineItemFilter",
            LINE_ITEMS,
        ))
        .query(list_query(
            "budgetStatementPayments",
            TypeRef::named_list("BudgetStatementPayment"),
            PAYMENTS,
        ))
        .query(filtered_query(
            "budgetStatementPayment",
            "BudgetStatementPayment",
            "BudgetStatementPaymentFilter",
            PAYMENTS,
        ))
        .mutation(add_mutation())
        .mutation(delete_mutation())
}

fn budget_statement() -> Object {
    Object::new("BudgetStatement")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(
            attr("cuId", TypeRef::named_nn(TypeRef::ID))
                .description("Id of the core unit this budget statement belongs to"),
        )
        .field(
            attr("month", TypeRef::named_nn(TypeRef::STRING))
                .description("Month of corresponding budget statement"),
        )
        .field(attr("comments", TypeRef::named(TypeRef::STRING)).description("Optional comments"))
        .field(
            enum_attr("budgetStatus", "BudgetStatementStatus")
                .description("Status of the budget statement (Draft/Final)"),
        )
        .field(
            attr("publicationUrl", TypeRef::named_nn(TypeRef::STRING))
                .description("Link to the complete publication of the budget statement"),
        )
        .field(attr("cuCode", TypeRef::named_nn(TypeRef::STRING)))
        .field(
            relation(
                "budgetStatementFTEs",
                "BudgetStatementFTEs",
                FTES,
                "budgetStatementId",
            )
            .description("Number of full-time employees in the corresponding budget statement"),
        )
        .field(
            relation(
                "budgetStatementMKRVest",
                "BudgetStatementMKRVest",
                MKR_VESTS,
                "budgetStatementId",
            )
            .description("Details on the amount of MKR vested in the corresponding budget statement"),
        )
        .field(
            relation(
                "budgetStatementWallet",
                "BudgetStatementWallet",
                WALLETS,
                "budgetStatementId",
            )
            .description("Details on the wallets used for this budget statement"),
        )
}

fn status() -> Enum {
    Enum::new("BudgetStatementStatus").item("Final").item("Draft")
}

fn ftes() -> Object {
    Object::new("BudgetStatementFTEs")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("budgetStatementId", TypeRef::named(TypeRef::ID)))
        .field(attr("month", TypeRef::named(TypeRef::STRING)))
        .field(attr("ftes", TypeRef::named(TypeRef::FLOAT)).description("Full-time employees"))
}

fn mkr_vest() -> Object {
    Object::new("BudgetStatementMKRVest")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("budgetStatementId", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("vestingDate", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("mkrAmount", TypeRef::named(TypeRef::FLOAT)).description("Current MKR amount"))
        .field(
            attr("mkrAmountOld", TypeRef::named(TypeRef::FLOAT)).description("Previous MKR amount"),
        )
        .field(attr("comments", TypeRef::named(TypeRef::STRING)))
}

fn wallet() -> Object {
    Object::new("BudgetStatementWallet")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("budgetStatementId", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("name", TypeRef::named(TypeRef::STRING)).description("Wallet name"))
        .field(attr("address", TypeRef::named(TypeRef::STRING)).description("Wallet address"))
        .field(
            attr("currentBalance", TypeRef::named(TypeRef::FLOAT))
                .description("Current wallet balance (as defined within the budget statement)"),
        )
        .field(attr("topupTransfer", TypeRef::named(TypeRef::FLOAT)))
        .field(attr("comments", TypeRef::named(TypeRef::STRING)))
        .field(
            relation(
                "budgetStatementLineItem",
                "BudgetStatementLineItem",
                LINE_ITEMS,
                "budgetStatementWalletId",
            )
            .description("Breakdown of the line items that make up this wallet's budget"),
        )
        .field(
            relation(
                "budgetStatementPayment",
                "BudgetStatementPayment",
                PAYMENTS,
                "budgetStatementWalletId",
            )
            .description("Payment information for this wallet"),
        )
}

fn line_item() -> Object {
    Object::new("BudgetStatementLineItem")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("budgetStatementWalletId", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("month", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("position", TypeRef::named_nn(TypeRef::INT)))
        .field(attr("group", TypeRef::named(TypeRef::STRING)))
        .field(attr("budgetCategory", TypeRef::named(TypeRef::STRING)))
        .field(attr("forecast", TypeRef::named(TypeRef::FLOAT)))
        .field(attr("actual", TypeRef::named(TypeRef::FLOAT)))
        .field(attr("comments", TypeRef::named(TypeRef::STRING)))
}

fn payment() -> Object {
    Object::new("BudgetStatementPayment")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("budgetStatementWalletId", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("transactionDate", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("transactionId", TypeRef::named(TypeRef::STRING)))
        .field(attr("budgetStatementLineItemId", TypeRef::named(TypeRef::INT)))
        .field(attr("comments", TypeRef::named(TypeRef::STRING)))
}

fn payload() -> Object {
    Object::new("BudgetStatementPayload")
        .field(embedded_list("errors", TypeRef::named_nn_list_nn("Error")))
        .field(embedded("budgetStatement", TypeRef::named("BudgetStatement")))
}

fn budget_statement_input() -> InputObject {
    InputObject::new("BudgetStatementInput")
        .field(InputValue::new("cuId", TypeRef::named_nn(TypeRef::ID)))
        .field(InputValue::new("month", TypeRef::named_nn(TypeRef::STRING)))
        .field(InputValue::new("comments", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new(
            "budgetStatus",
            TypeRef::named("BudgetStatementStatus"),
        ))
        .field(InputValue::new(
            "publicationUrl",
            TypeRef::named_nn(TypeRef::STRING),
        ))
        .field(InputValue::new("cuCode", TypeRef::named_nn(TypeRef::STRING)))
}

fn budget_statement_filter() -> InputObject {
    InputObject::new("BudgetStatementFilter")
        .field(InputValue::new("id", TypeRef::named(TypeRef::ID)))
        .field(InputValue::new("cuId", TypeRef::named(TypeRef::ID)))
        .field(InputValue::new("month", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new("comments", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new(
            "budgetStatus",
            TypeRef::named("BudgetStatementStatus"),
        ))
        .field(InputValue::new(
            "publicationUrl",
            TypeRef::named(TypeRef::STRING),
        ))
        .field(InputValue::new("cuCode", TypeRef::named(TypeRef::STRING)))
}

fn ftes_filter() -> InputObject {
    InputObject::new("BudgetStatementFTEsFilter")
        .field(InputValue::new("id", TypeRef::named(TypeRef::ID)))
        .field(InputValue::new(
            "budgetStatementId",
            TypeRef::named(TypeRef::ID),
        ))
        .field(InputValue::new("month", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new("ftes", TypeRef::named(TypeRef::FLOAT)))
}

fn mkr_vest_filter() -> InputObject {
    InputObject::new("BudgetStatementMKRVestFilter")
        .field(InputValue::new("id", TypeRef::named(TypeRef::ID)))
        .field(InputValue::new(
            "budgetStatementId",
            TypeRef::named(TypeRef::ID),
        ))
        .field(InputValue::new(
            "vestingDate",
            TypeRef::named(TypeRef::STRING),
        ))
        .field(InputValue::new("mkrAmount", TypeRef::named(TypeRef::FLOAT)))
        .field(InputValue::new(
            "mkrAmountOld",
            TypeRef::named(TypeRef::FLOAT),
        ))
        .field(InputValue::new("comments", TypeRef::named(TypeRef::STRING)))
}

fn wallet_filter() -> InputObject {
    InputObject::new("BudgetStatementWalletFilter")
        .field(InputValue::new("id", TypeRef::named(TypeRef::ID)))
        .field(InputValue::new(
            "budgetStatementId",
            TypeRef::named(TypeRef::ID),
        ))
        .field(InputValue::new("name", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new("address", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new(
            "currentBalance",
            TypeRef::named(TypeRef::FLOAT),
        ))
        .field(InputValue::new(
            "topupTransfer",
            TypeRef::named(TypeRef::FLOAT),
        ))
        .field(InputValue::new("comments", TypeRef::named(TypeRef::STRING)))
}

fn line_item_filter() -> InputObject {
    InputObject::new("BudgetStatementLineItemFilter")
        .field(InputValue::new("id", TypeRef::named(TypeRef::ID)))
        .field(InputValue::new(
            "budgetStatementWalletId",
            TypeRef::named(TypeRef::ID),
        ))
        .field(InputValue::new("month", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new("position", TypeRef::named(TypeRef::INT)))
        .field(InputValue::new("group", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new(
            "budgetCategory",
            TypeRef::named(TypeRef::STRING),
        ))
        .field(InputValue::new("forecast", TypeRef::named(TypeRef::FLOAT)))
        .field(InputValue::new("actual", TypeRef::named(TypeRef::FLOAT)))
        .field(InputValue::new("comments", TypeRef::named(TypeRef::STRING)))
}

fn payment_filter() -> InputObject {
    InputObject::new("BudgetStatementPaymentFilter")
        .field(InputValue::new("id", TypeRef::named(TypeRef::ID)))
        .field(InputValue::new(
            "budgetStatementWalletId",
            TypeRef::named(TypeRef::ID),
        ))
        .field(InputValue::new(
            "transactionDate",
            TypeRef::named(TypeRef::STRING),
        ))
        .field(InputValue::new(
            "transactionId",
            TypeRef::named(TypeRef::STRING),
        ))
        .field(InputValue::new(
            "budgetStatementLineItemId",
            TypeRef::named(TypeRef::INT),
        ))
        .field(InputValue::new("comments", TypeRef::named(TypeRef::STRING)))
}

// The write path is declared but not implemented; both mutations resolve to
// null until a creation/deletion backend exists.

fn add_mutation() -> (&'static str, Field) {
    let (name, field) = stub("budgetStatementAdd", TypeRef::named("BudgetStatementPayload"));
    (
        name,
        field.argument(InputValue::new(
            "input",
            TypeRef::named("BudgetStatementInput"),
        )),
    )
}

fn delete_mutation() -> (&'static str, Field) {
    stub("budgetStatementDelete", TypeRef::named(TypeRef::ID))
}
