//! MIP record entity family (schema stubs)
//!
//! The MIP catalog is declared so clients can introspect the shape, but no
//! data source is wired for it yet: both root queries resolve to null. Only
//! the declared contract is stable; resolution logic lands when the MIP
//! tables reach the backing store.

use super::composer::SchemaFragment;
use super::fields::{attr, enum_attr, stub};
use async_graphql::dynamic::{Enum, Field, InputValue, Object, TypeRef};

pub fn fragment() -> SchemaFragment {
    SchemaFragment::new("cu-mip")
        .object(cu_mip())
        .object(mip39())
        .object(mip40())
        .object(mip40_budget_period())
        .object(mip40_budget_line_item())
        .object(mip40_wallet())
        .object(mip41())
        .enumeration(status())
        .query(stub("cuMips", TypeRef::named_list("CuMip")))
        .query(mip_code_query())
}

fn cu_mip() -> Object {
    Object::new("CuMip")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("mipCode", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("coreUnitId", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("coreUnitCode", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("rfc", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("formalSubmission", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("accepted", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("rejected", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("obsolete", TypeRef::named_nn(TypeRef::STRING)))
        .field(enum_attr("mipStatus", "CuMipStatus"))
}

fn status() -> Enum {
    Enum::new("CuMipStatus")
        .item("RFC")
        .item("FORMAL_SUBMISSION")
        .item("ACCEPTED")
        .item("REJECTED")
        .item("OBSOLETE")
}

fn mip39() -> Object {
    Object::new("Mip39")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("mip39Spn", TypeRef::named_nn(TypeRef::INT)))
        .field(attr("mipCode", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("cuName", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("sentenceSummary", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("paragraphSummary", TypeRef::named_nn(TypeRef::STRING)))
}

fn mip40() -> Object {
    Object::new("Mip40")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("mip40Spn", TypeRef::named_nn(TypeRef::INT)))
        .field(attr("mipCode", TypeRef::named_nn(TypeRef::STRING)))
}

fn mip40_budget_period() -> Object {
    Object::new("Mip40BudgetPeriod")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("mip40Spn", TypeRef::named_nn(TypeRef::INT)))
        .field(attr("budgetPeriodStart", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("budgetPeriodEnd", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("ftes", TypeRef::named_nn(TypeRef::INT)))
}

fn mip40_budget_line_item() -> Object {
    Object::new("Mip40BudgetLineItem")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("budgetPeriodId", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("position", TypeRef::named_nn(TypeRef::INT)))
        .field(attr("budgetCategory", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("budgetCap", TypeRef::named_nn(TypeRef::FLOAT)))
}

fn mip40_wallet() -> Object {
    Object::new("Mip40Wallet")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("mip40Spn", TypeRef::named_nn(TypeRef::INT)))
        .field(attr("address", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("name", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("signersTotal", TypeRef::named_nn(TypeRef::INT)))
        .field(attr("signersRequired", TypeRef::named_nn(TypeRef::INT)))
        .field(attr("clawBackLimit", TypeRef::named_nn(TypeRef::FLOAT)))
}

fn mip41() -> Object {
    Object::new("Mip41")
        .field(attr("id", TypeRef::named_nn(TypeRef::ID)))
        .field(attr("mip41Spn", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("mipCode", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("facilitatorName", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("discordHandle", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("twitterHandle", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("forumHandle", TypeRef::named_nn(TypeRef::STRING)))
        .field(attr("github", TypeRef::named_nn(TypeRef::STRING)))
}

fn mip_code_query() -> (&'static str, Field) {
    let (name, field) = stub("cuMip", TypeRef::named_list("CuMip"));
    (
        name,
        field.argument(InputValue::new("mipCode", TypeRef::named(TypeRef::STRING))),
    )
}
