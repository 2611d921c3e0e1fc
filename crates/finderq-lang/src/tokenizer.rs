//! Greedy tokenizer for finder names.

use finderq_core::FieldDef;

use crate::error::FinderError;
use crate::token::{Token, RESERVED_TOKENS};

/// Tokenize a finder name against a field catalog.
///
/// The `find{Plural}By` prefix is stripped if present (absence is tolerated).
/// The remainder is scanned greedily: settable field names are tried first,
/// longest first, then the reserved keyword table in its fixed order. No
/// backtracking is performed; the only tokenizer state is the unconsumed
/// suffix.
///
/// Fails with [`FinderError::TokenNotRecognized`] when a non-empty remainder
/// matches nothing, and with [`FinderError::MalformedFinder`] when the
/// resulting sequence is empty or does not begin with a field token.
pub fn tokenize<'a>(
    fields: &'a [FieldDef],
    finder_name: &str,
    plural: &str,
) -> Result<Vec<Token<'a>>, FinderError> {
    let prefix = format!("find{plural}By");
    let mut remainder = finder_name.strip_prefix(prefix.as_str()).unwrap_or(finder_name);

    // Longest capitalized name first, so a field that prefixes another
    // ("age" / "ageLimit") cannot shadow the longer match.
    let mut pool: Vec<(String, &FieldDef)> = fields
        .iter()
        .filter(|f| f.settable)
        .map(|f| (f.capitalized_name(), f))
        .collect();
    pool.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

    let mut tokens = Vec::new();

    'scan: while !remainder.is_empty() {
        for (capitalized, field) in &pool {
            if remainder.starts_with(capitalized.as_str()) {
                tokens.push(Token::Field(*field));
                remainder = &remainder[capitalized.len()..];
                continue 'scan;
            }
        }
        for reserved in RESERVED_TOKENS {
            if remainder.starts_with(reserved.keyword) {
                tokens.push(Token::Reserved(reserved));
                remainder = &remainder[reserved.keyword.len()..];
                continue 'scan;
            }
        }
        return Err(FinderError::unrecognized(remainder, finder_name));
    }

    match tokens.first() {
        Some(Token::Field(_)) => Ok(tokens),
        Some(Token::Reserved(reserved)) => Err(FinderError::malformed(format!(
            "finder '{finder_name}' begins with reserved keyword '{}'",
            reserved.keyword
        ))),
        None => Err(FinderError::malformed(format!(
            "finder '{finder_name}' contains no tokens"
        ))),
    }
}
