//! The reserved keyword table and the token type for finder names.

use finderq_core::{FieldDef, TypeClass};

/// Category of a reserved finder keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// Binary comparison against a single placeholder.
    Comparator,
    /// Joins two predicate clauses (`And`, `Or`).
    Combinator,
    /// Consumes two placeholders (`Between`).
    Range,
    /// Consumes no placeholder (`IsNull`, `IsNotNull`).
    NullCheck,
    /// String-specific predicate forms (`Like`, `Not`).
    StringModifier,
}

/// A reserved keyword in the finder vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedToken {
    /// The keyword as it appears inside finder names.
    pub keyword: &'static str,
    /// Arity/role category.
    pub category: TokenCategory,
    /// Type classes the keyword is enumerated for.
    pub applies_to: &'static [TypeClass],
}

const NUMERIC: &[TypeClass] = &[TypeClass::NumericOrDate];
const NULLABLE: &[TypeClass] = &[TypeClass::NumericOrDate, TypeClass::Text];
const TEXT: &[TypeClass] = &[TypeClass::Text];
const BOOLEAN: &[TypeClass] = &[TypeClass::Boolean];
const ANY: &[TypeClass] = &[
    TypeClass::NumericOrDate,
    TypeClass::Text,
    TypeClass::Boolean,
    TypeClass::Collection,
    TypeClass::Other,
];

/// The full reserved vocabulary, in matching order.
///
/// The tokenizer scans this table with a greedy first-match rule, so a
/// keyword must appear before every keyword that is a prefix of it
/// (`GreaterThanEquals` before `GreaterThan`, `NotEquals` before `Not`).
pub const RESERVED_TOKENS: &[ReservedToken] = &[
    ReservedToken {
        keyword: "GreaterThanEquals",
        category: TokenCategory::Comparator,
        applies_to: NUMERIC,
    },
    ReservedToken {
        keyword: "LessThanEquals",
        category: TokenCategory::Comparator,
        applies_to: NUMERIC,
    },
    ReservedToken {
        keyword: "GreaterThan",
        category: TokenCategory::Comparator,
        applies_to: NUMERIC,
    },
    ReservedToken {
        keyword: "LessThan",
        category: TokenCategory::Comparator,
        applies_to: NUMERIC,
    },
    ReservedToken {
        keyword: "IsNotNull",
        category: TokenCategory::NullCheck,
        applies_to: NULLABLE,
    },
    ReservedToken {
        keyword: "NotEquals",
        category: TokenCategory::Comparator,
        applies_to: NUMERIC,
    },
    ReservedToken {
        keyword: "IsNull",
        category: TokenCategory::NullCheck,
        applies_to: NULLABLE,
    },
    ReservedToken {
        keyword: "Between",
        category: TokenCategory::Range,
        applies_to: NUMERIC,
    },
    ReservedToken {
        keyword: "Equals",
        category: TokenCategory::Comparator,
        applies_to: BOOLEAN,
    },
    ReservedToken {
        keyword: "And",
        category: TokenCategory::Combinator,
        applies_to: ANY,
    },
    ReservedToken {
        keyword: "Like",
        category: TokenCategory::StringModifier,
        applies_to: TEXT,
    },
    ReservedToken {
        keyword: "Not",
        category: TokenCategory::StringModifier,
        applies_to: TEXT,
    },
    ReservedToken {
        keyword: "Or",
        category: TokenCategory::Combinator,
        applies_to: ANY,
    },
];

/// Look up a reserved token by its keyword.
pub fn reserved(keyword: &str) -> Option<&'static ReservedToken> {
    RESERVED_TOKENS.iter().find(|t| t.keyword == keyword)
}

/// Non-combinator keywords enumerable for a given type class.
pub fn applicable_tokens(class: TypeClass) -> impl Iterator<Item = &'static ReservedToken> {
    RESERVED_TOKENS.iter().filter(move |t| {
        t.category != TokenCategory::Combinator && t.applies_to.contains(&class)
    })
}

/// One token of a finder name.
///
/// A valid sequence starts with a field token; each field token opens a
/// predicate and the reserved tokens that follow modify or close it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// An occurrence of an entity field name.
    Field(&'a FieldDef),
    /// An occurrence of a reserved keyword.
    Reserved(&'static ReservedToken),
}

impl Token<'_> {
    /// Check if this is a field token.
    pub fn is_field(&self) -> bool {
        matches!(self, Token::Field(_))
    }
}
