//! Error types for finder tokenization and compilation.

use thiserror::Error;

/// Failure while resolving a finder name.
///
/// Callers that probe many entities for ownership of a finder name should
/// treat [`FinderError::TokenNotRecognized`] as "not my finder" and
/// [`FinderError::MalformedFinder`] as a configuration error worth surfacing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    /// A non-empty remainder of the finder name matched neither a field name
    /// nor a reserved keyword. Typical cause: stale generated code after a
    /// schema change.
    #[error("unable to match token '{remainder}' of finder '{finder}'")]
    TokenNotRecognized {
        /// The unconsumed suffix that failed to match.
        remainder: String,
        /// The full finder name being tokenized.
        finder: String,
    },

    /// The finder tokenized, but the token sequence violates the grammar.
    #[error("malformed finder: {0}")]
    MalformedFinder(String),
}

impl FinderError {
    /// Create a token-not-recognized error.
    pub fn unrecognized(remainder: impl Into<String>, finder: impl Into<String>) -> Self {
        FinderError::TokenNotRecognized {
            remainder: remainder.into(),
            finder: finder.into(),
        }
    }

    /// Create a malformed-finder error.
    pub fn malformed(detail: impl Into<String>) -> Self {
        FinderError::MalformedFinder(detail.into())
    }

    /// True when the finder simply does not belong to this entity's
    /// vocabulary, as opposed to violating the finder grammar.
    pub fn is_no_match(&self) -> bool {
        matches!(self, FinderError::TokenNotRecognized { .. })
    }
}
