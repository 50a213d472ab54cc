//! Registry-based schema composition with collision detection
//!
//! Each entity module contributes a [`SchemaFragment`]: its type definitions
//! plus the root `Query`/`Mutation` fields it wants to expose. The
//! [`SchemaComposer`] folds fragments in registration order and rejects any
//! overlap — two modules defining the same type, or the same field on a root
//! type — with a [`ComposeError`] before the schema is built. Collisions are
//! configuration errors and must never survive to query time.

use crate::core::error::ComposeError;
use async_graphql::dynamic::{Enum, Field, InputObject, Object, Schema, Type};
use indexmap::IndexMap;

/// One module's self-describing contribution to the composed schema.
///
/// A fragment carries everything its module needs: object types, enums,
/// input types, root query fields and root mutation fields. The composer
/// performs no cross-fragment validation beyond the structural merge and
/// collision detection, so a fragment must not rely on types it does not
/// either define or know another registered fragment defines.
pub struct SchemaFragment {
    module: &'static str,
    types: Vec<(String, Type)>,
    query_fields: Vec<(&'static str, Field)>,
    mutation_fields: Vec<(&'static str, Field)>,
}

impl SchemaFragment {
    pub fn new(module: &'static str) -> Self {
        Self {
            module,
            types: Vec::new(),
            query_fields: Vec::new(),
            mutation_fields: Vec::new(),
        }
    }

    /// The module that authored this fragment.
    pub fn module(&self) -> &'static str {
        self.module
    }

    pub fn object(mut self, object: Object) -> Self {
        self.types
            .push((object.type_name().to_string(), Type::Object(object)));
        self
    }

    pub fn enumeration(mut self, enumeration: Enum) -> Self {
        self.types
            .push((enumeration.type_name().to_string(), Type::Enum(enumeration)));
        self
    }

    pub fn input(mut self, input: InputObject) -> Self {
        self.types
            .push((input.type_name().to_string(), Type::InputObject(input)));
        self
    }

    /// Contribute a root `Query` field. Field helpers return `(name, field)`
    /// pairs so the composer can key collisions without re-deriving names.
    pub fn query(mut self, field: (&'static str, Field)) -> Self {
        self.query_fields.push(field);
        self
    }

    /// Contribute a root `Mutation` field.
    pub fn mutation(mut self, field: (&'static str, Field)) -> Self {
        self.mutation_fields.push(field);
        self
    }
}

/// Folds [`SchemaFragment`]s into one executable schema.
#[derive(Default)]
pub struct SchemaComposer {
    fragments: Vec<SchemaFragment>,
}

impl SchemaComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, fragment: SchemaFragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Merge every registered fragment into an executable schema.
    ///
    /// Fails fast on the first duplicate type name or duplicate root field;
    /// the error names both offending modules. Registration order determines
    /// field and type order in the final schema.
    pub fn compose(self) -> Result<Schema, ComposeError> {
        let mut types: IndexMap<String, (&'static str, Type)> = IndexMap::new();
        let mut query_fields: IndexMap<String, (&'static str, Field)> = IndexMap::new();
        let mut mutation_fields: IndexMap<String, (&'static str, Field)> = IndexMap::new();

        for fragment in self.fragments {
            let module = fragment.module;

            for (name, ty) in fragment.types {
                if let Some(first) = types.get(&name).map(|(owner, _)| *owner) {
                    return Err(ComposeError::DuplicateType {
                        name,
                        first,
                        second: module,
                    });
                }
                types.insert(name, (module, ty));
            }

            for (name, field) in fragment.query_fields {
                if let Some(first) = query_fields.get(name).map(|(owner, _)| *owner) {
                    return Err(ComposeError::DuplicateQueryField {
                        field: name.to_string(),
                        first,
                        second: module,
                    });
                }
                query_fields.insert(name.to_string(), (module, field));
            }

            for (name, field) in fragment.mutation_fields {
                if let Some(first) = mutation_fields.get(name).map(|(owner, _)| *owner) {
                    return Err(ComposeError::DuplicateMutationField {
                        field: name.to_string(),
                        first,
                        second: module,
                    });
                }
                mutation_fields.insert(name.to_string(), (module, field));
            }
        }

        let mut query = Object::new("Query");
        for (_, (_, field)) in query_fields {
            query = query.field(field);
        }

        let has_mutations = !mutation_fields.is_empty();
        let mutation_name = has_mutations.then_some("Mutation");
        let mut builder = Schema::build("Query", mutation_name, None::<&str>);

        for (_, (_, ty)) in types {
            builder = builder.register(ty);
        }
        builder = builder.register(query);

        if has_mutations {
            let mut mutation = Object::new("Mutation");
            for (_, (_, field)) in mutation_fields {
                mutation = mutation.field(field);
            }
            builder = builder.register(mutation);
        }

        builder
            .finish()
            .map_err(|e| ComposeError::Build(e.to_string()))
    }
}
