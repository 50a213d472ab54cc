//! Shared utility types
//!
//! Types consumed by several entity families (currently the `Error` object
//! embedded in mutation payloads). Contributes no root fields, so this
//! fragment also exercises the composer's types-only path.

use super::composer::SchemaFragment;
use super::fields::attr;
use async_graphql::dynamic::{Object, TypeRef};

pub fn fragment() -> SchemaFragment {
    SchemaFragment::new("util-types").object(error_type())
}

fn error_type() -> Object {
    Object::new("Error").field(attr("message", TypeRef::named_nn(TypeRef::STRING)))
}
