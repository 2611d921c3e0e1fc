//! Entity definitions.

use super::field::FieldDef;
use serde::{Deserialize, Serialize};

/// An entity definition: a simple type name plus its declared fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDef {
    /// Entity simple type name (e.g. `Person`).
    pub name: String,
    /// Field definitions, in declaration order.
    pub fields: Vec<FieldDef>,
}

impl EntityDef {
    /// Create a new entity definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the entity.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Read-only view of an entity's fields, supplied by the caller.
///
/// This replaces reflective introspection of live objects: whatever host
/// embeds the compiler derives the catalog from its own metadata (parsed
/// source, schema files, annotations) and hands it in through this trait.
pub trait FieldCatalog {
    /// The entity's simple type name, used verbatim in generated queries.
    fn simple_name(&self) -> &str;

    /// The entity's declared fields, in a stable order.
    fn fields(&self) -> &[FieldDef];

    /// Fields backed by a public single-parameter mutator.
    fn settable_fields(&self) -> Vec<&FieldDef> {
        self.fields().iter().filter(|f| f.settable).collect()
    }
}

impl FieldCatalog for EntityDef {
    fn simple_name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}
