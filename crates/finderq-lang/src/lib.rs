//! finderq Finder Language
//!
//! This crate provides the enumerator, tokenizer, and compiler for dynamic
//! finder names: camel-cased method names that encode a query as a sequence
//! of entity field names and reserved operator keywords.
//!
//! # Finder Name Grammar
//!
//! ```text
//! findPeopleByName                          name = :name
//! findPeopleByNameLike                      LOWER(name) LIKE LOWER(:name)
//! findPeopleByAgeBetween                    age BETWEEN :minAge AND :maxAge
//! findPeopleByNameIsNull                    name IS NULL        (no parameter)
//! findPeopleByAgeGreaterThanAndNameLike     two clauses joined with AND
//! ```
//!
//! A finder name starts with the literal `find{Plural}By` header, then
//! alternates field names and reserved keywords. Each field opens a predicate;
//! the keywords that follow modify or close it until the next field name.
//!
//! # Usage
//!
//! ```rust
//! use finderq_core::{FieldDef, FieldType, ScalarType};
//! use finderq_lang::{generate, resolve};
//! use std::collections::HashSet;
//!
//! let fields = vec![
//!     FieldDef::new("name", FieldType::scalar(ScalarType::String)),
//!     FieldDef::new("age", FieldType::scalar(ScalarType::Int32)),
//! ];
//!
//! // Enumerate every legal finder up to two combined fields.
//! let finders = generate(&fields, "People", 2, &HashSet::new());
//! assert!(finders.contains(&"findPeopleByNameAndAge".to_string()));
//!
//! // Parse and compile one finder back into a query.
//! let holder = resolve(&fields, "findPeopleByNameLike", "People", "Person").unwrap();
//! assert_eq!(holder.parameter_names, vec!["name"]);
//! ```

pub mod compiler;
pub mod enumerate;
pub mod error;
pub mod token;
pub mod tokenizer;

// Re-export main types
pub use compiler::{Compiler, QueryHolder};
pub use error::FinderError;
pub use token::{applicable_tokens, reserved, ReservedToken, Token, TokenCategory, RESERVED_TOKENS};

use finderq_core::FieldDef;
use std::collections::HashSet;

/// Enumerate all legal finder names for a field set.
///
/// See [`enumerate::generate`].
pub fn generate(
    fields: &[FieldDef],
    plural: &str,
    depth: usize,
    exclusions: &HashSet<String>,
) -> Vec<String> {
    enumerate::generate(fields, plural, depth, exclusions)
}

/// Tokenize a finder name against a field catalog.
///
/// See [`tokenizer::tokenize`].
pub fn tokenize<'a>(
    fields: &'a [FieldDef],
    finder_name: &str,
    plural: &str,
) -> Result<Vec<Token<'a>>, FinderError> {
    tokenizer::tokenize(fields, finder_name, plural)
}

/// Compile a token sequence into a [`QueryHolder`].
///
/// See [`compiler::compile`].
pub fn compile<'a>(
    tokens: Vec<Token<'a>>,
    entity_name: &str,
) -> Result<QueryHolder<'a>, FinderError> {
    compiler::compile(tokens, entity_name)
}

/// Tokenize and compile a finder name in one step.
pub fn resolve<'a>(
    fields: &'a [FieldDef],
    finder_name: &str,
    plural: &str,
    entity_name: &str,
) -> Result<QueryHolder<'a>, FinderError> {
    let tokens = tokenize(fields, finder_name, plural)?;
    compile(tokens, entity_name)
}
