//! Core type definitions for the catalog.

use serde::{Deserialize, Serialize};

/// Scalar data types recognized by the finder compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// Boolean value.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Fixed-precision decimal.
    Decimal,
    /// Calendar date.
    Date,
    /// Timestamp (microseconds since Unix epoch).
    Timestamp,
    /// UTF-8 string.
    String,
    /// UUID (128-bit identifier).
    Uuid,
    /// Binary data.
    Bytes,
}

/// Field types - flat representation without recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// A scalar value.
    Scalar(ScalarType),
    /// A collection of scalar values (list, set, or map-like).
    Collection(ScalarType),
    /// Anything the compiler has no operator vocabulary for.
    Other,
}

/// Applicability class of a field type.
///
/// Reserved finder keywords apply per class: numeric/date fields take
/// comparators and ranges, text fields take string modifiers, boolean fields
/// take equality only. Collection and other fields never take predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeClass {
    /// Numbers, dates, and timestamps.
    NumericOrDate,
    /// Strings.
    Text,
    /// Booleans.
    Boolean,
    /// Collection-typed fields (never queried).
    Collection,
    /// Everything else (equality via the bare finder form only).
    Other,
}

impl ScalarType {
    /// Check if this type is numeric or date-like.
    pub fn is_numeric_or_date(&self) -> bool {
        matches!(
            self,
            ScalarType::Int32
                | ScalarType::Int64
                | ScalarType::Float32
                | ScalarType::Float64
                | ScalarType::Decimal
                | ScalarType::Date
                | ScalarType::Timestamp
        )
    }
}

impl FieldType {
    /// Create a scalar field type.
    pub fn scalar(scalar: ScalarType) -> Self {
        FieldType::Scalar(scalar)
    }

    /// Create a collection field type.
    pub fn collection(scalar: ScalarType) -> Self {
        FieldType::Collection(scalar)
    }

    /// Classify this type for keyword applicability.
    pub fn type_class(&self) -> TypeClass {
        match self {
            FieldType::Scalar(s) if s.is_numeric_or_date() => TypeClass::NumericOrDate,
            FieldType::Scalar(ScalarType::String) => TypeClass::Text,
            FieldType::Scalar(ScalarType::Bool) => TypeClass::Boolean,
            FieldType::Scalar(_) => TypeClass::Other,
            FieldType::Collection(_) => TypeClass::Collection,
            FieldType::Other => TypeClass::Other,
        }
    }

    /// Check if this is a collection type.
    pub fn is_collection(&self) -> bool {
        matches!(self, FieldType::Collection(_))
    }
}
