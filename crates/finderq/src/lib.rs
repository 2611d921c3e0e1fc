//! finderq - dynamic finder compilation for entity catalogs.
//!
//! Given an entity's field catalog, finderq enumerates the legal
//! `find{Plural}By...` method names up to a chosen combination depth, and
//! compiles any such name back into a parametrized query string plus ordered
//! parameter lists for a code-generation collaborator to embed.
//!
//! ```rust
//! use finderq::{EntityDef, FieldDef, FieldType, FinderServices, ScalarType};
//! use std::collections::HashSet;
//!
//! let person = EntityDef::new("Person")
//!     .with_field(FieldDef::new("name", FieldType::scalar(ScalarType::String)))
//!     .with_field(FieldDef::new("age", FieldType::scalar(ScalarType::Int32)));
//!
//! let finders = FinderServices::finders(&person, "People", 2, &HashSet::new());
//! assert!(finders.contains(&"findPeopleByAgeBetween".to_string()));
//!
//! let holder =
//!     FinderServices::query_holder(&person, "findPeopleByAgeBetweenAndNameLike", "People")
//!         .unwrap();
//! assert_eq!(holder.parameter_names, vec!["minAge", "maxAge", "name"]);
//! ```
//!
//! All core operations are pure functions over immutable inputs and safe to
//! call concurrently. An optional [`QueryCache`] layers at-most-once
//! memoization on top, keyed by entity and finder name.

pub mod cache;
pub mod services;

pub use cache::{CacheStats, CachedQuery, FinderKey, QueryCache};
pub use services::FinderServices;

// Re-export the catalog and language crates as one surface.
pub use finderq_core::{EntityDef, FieldCatalog, FieldDef, FieldType, ScalarType, TypeClass};
pub use finderq_lang::{
    FinderError, QueryHolder, ReservedToken, Token, TokenCategory, RESERVED_TOKENS,
};
