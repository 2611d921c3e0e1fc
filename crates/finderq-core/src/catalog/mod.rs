//! Entity field catalog.
//!
//! The catalog stores metadata about an entity's fields: names, type
//! classification, and mutator visibility. It is read-only input to the
//! finder enumerator and tokenizer.

mod entity;
mod field;
mod types;

pub use entity::{EntityDef, FieldCatalog};
pub use field::FieldDef;
pub use types::{FieldType, ScalarType, TypeClass};
