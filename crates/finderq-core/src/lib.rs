//! finderq-core - Field catalog and entity metadata for dynamic finders.
//!
//! This crate describes *what an entity looks like* to the finder compiler:
//! its simple type name, its fields, their type classification, and which
//! fields are settable through a public mutator. The catalog is supplied by
//! the caller; the compiler never inspects live objects.

pub mod catalog;

pub use catalog::{EntityDef, FieldCatalog, FieldDef, FieldType, ScalarType, TypeClass};
