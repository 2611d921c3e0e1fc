//! High-level finder services over a field catalog.

use std::collections::HashSet;

use finderq_core::FieldCatalog;
use finderq_lang::{compile, generate, tokenize, FinderError, QueryHolder};
use tracing::debug;

/// The two-operation service surface for dynamic finders: enumerate the
/// legal names for an entity, and compile a name back into a query.
pub struct FinderServices;

impl FinderServices {
    /// Enumerate all legal finder names for `catalog`, up to `depth`
    /// combined fields, omitting excluded field names.
    pub fn finders<C: FieldCatalog>(
        catalog: &C,
        plural: &str,
        depth: usize,
        exclusions: &HashSet<String>,
    ) -> Vec<String> {
        let finders = generate(catalog.fields(), plural, depth, exclusions);
        debug!(
            entity = catalog.simple_name(),
            depth,
            count = finders.len(),
            "enumerated finders"
        );
        finders
    }

    /// Tokenize and compile `finder_name` against `catalog`.
    ///
    /// Returns [`FinderError::TokenNotRecognized`] when the name does not
    /// belong to this entity's vocabulary, and
    /// [`FinderError::MalformedFinder`] when it violates the finder grammar.
    pub fn query_holder<'a, C: FieldCatalog>(
        catalog: &'a C,
        finder_name: &str,
        plural: &str,
    ) -> Result<QueryHolder<'a>, FinderError> {
        let tokens = tokenize(catalog.fields(), finder_name, plural)?;
        let holder = compile(tokens, catalog.simple_name())?;
        debug!(
            entity = catalog.simple_name(),
            finder = finder_name,
            parameters = holder.parameter_names.len(),
            "compiled finder"
        );
        Ok(holder)
    }
}
