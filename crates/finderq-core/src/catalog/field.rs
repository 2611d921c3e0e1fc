//! Field definitions for entities.

use super::types::{FieldType, TypeClass};
use serde::{Deserialize, Serialize};

/// A field definition within an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name (lowerCamelCase, as declared on the entity).
    pub name: String,
    /// Field data type.
    pub field_type: FieldType,
    /// Whether the entity exposes a public single-parameter mutator for this
    /// field. Only settable fields participate in finder tokenization.
    pub settable: bool,
}

impl FieldDef {
    /// Create a new settable field.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            settable: true,
        }
    }

    /// Mark the field as having no public mutator.
    pub fn read_only(mut self) -> Self {
        self.settable = false;
        self
    }

    /// Classify this field for keyword applicability.
    pub fn type_class(&self) -> TypeClass {
        self.field_type.type_class()
    }

    /// Check if this field is collection-typed.
    pub fn is_collection(&self) -> bool {
        self.field_type.is_collection()
    }

    /// The field name with its first letter upper-cased, as it appears
    /// inside finder names.
    pub fn capitalized_name(&self) -> String {
        capitalize(&self.name)
    }
}

/// Upper-case the first character of an identifier.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
