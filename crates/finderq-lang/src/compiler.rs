//! Compiler from token sequences to parametrized queries.

use finderq_core::{FieldDef, FieldType};

use crate::error::FinderError;
use crate::token::Token;

/// A compiled finder: the query string plus its ordered parameter lists.
///
/// `parameter_types` and `parameter_names` are always the same length and
/// in lock-step order. The token sequence is retained so a code-generation
/// collaborator can inspect the finder's structure.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryHolder<'a> {
    /// The parametrized query string.
    pub query: String,
    /// Declared type of each parameter, in order.
    pub parameter_types: Vec<FieldType>,
    /// Placeholder name of each parameter, in order.
    pub parameter_names: Vec<String>,
    /// The token sequence the query was compiled from.
    pub tokens: Vec<Token<'a>>,
}

/// Compiler for finder token sequences.
pub struct Compiler;

impl Compiler {
    /// Compile a token sequence into a [`QueryHolder`].
    pub fn compile<'a>(
        tokens: Vec<Token<'a>>,
        entity_name: &str,
    ) -> Result<QueryHolder<'a>, FinderError> {
        match tokens.first() {
            Some(Token::Field(_)) => {}
            Some(Token::Reserved(reserved)) => {
                return Err(FinderError::malformed(format!(
                    "'{}' requires a preceding field token",
                    reserved.keyword
                )));
            }
            None => return Err(FinderError::malformed("token sequence is empty")),
        }

        let query = Self::build_query(&tokens, entity_name);
        let (parameter_types, parameter_names) = Self::build_parameters(&tokens);

        Ok(QueryHolder {
            query,
            parameter_types,
            parameter_names,
            tokens,
        })
    }

    /// Emit the `SELECT ... WHERE ...` clause text for the token walk.
    fn build_query(tokens: &[Token<'_>], entity_name: &str) -> String {
        let alias = entity_name.to_lowercase();
        let mut query = format!("SELECT {entity_name} FROM {entity_name} AS {alias} WHERE ");

        let mut last_field: Option<&FieldDef> = None;
        let mut new_field = true;
        let mut field_applied = false;

        for token in tokens {
            match token {
                Token::Field(field) => {
                    last_field = Some(*field);
                    new_field = true;
                }
                Token::Reserved(reserved) => {
                    let Some(field) = last_field else { continue };
                    // Collection-typed fields contribute no clause text.
                    if field.is_collection() {
                        continue;
                    }
                    let name = field.name.as_str();

                    if new_field {
                        if reserved.keyword == "Like" {
                            query.push_str(&format!("LOWER({alias}.{name})"));
                        } else {
                            query.push_str(&format!("{alias}.{name}"));
                        }
                        new_field = false;
                        field_applied = false;
                    }

                    let mut placeholder = true;
                    match reserved.keyword {
                        "And" | "Or" => {
                            if !field_applied {
                                query.push_str(&format!(" = :{name}"));
                                field_applied = true;
                            }
                            query.push_str(if reserved.keyword == "And" {
                                " AND "
                            } else {
                                " OR "
                            });
                            placeholder = false;
                        }
                        "Between" => {
                            let capitalized = field.capitalized_name();
                            query.push_str(&format!(
                                " BETWEEN :min{capitalized} AND :max{capitalized}"
                            ));
                            placeholder = false;
                            field_applied = true;
                        }
                        "Like" => query.push_str(" LIKE "),
                        "IsNotNull" => {
                            query.push_str(" IS NOT NULL");
                            placeholder = false;
                            field_applied = true;
                        }
                        "IsNull" => {
                            query.push_str(" IS NULL");
                            placeholder = false;
                            field_applied = true;
                        }
                        "Not" => query.push_str(" IS NOT "),
                        "NotEquals" => query.push_str(" != "),
                        "LessThan" => query.push_str(" < "),
                        "LessThanEquals" => query.push_str(" <= "),
                        "GreaterThan" => query.push_str(" > "),
                        "GreaterThanEquals" => query.push_str(" >= "),
                        "Equals" => query.push_str(" = "),
                        _ => placeholder = false,
                    }

                    if placeholder {
                        if query.ends_with("LIKE ") {
                            query.push_str(&format!("LOWER(:{name})"));
                        } else {
                            query.push_str(&format!(":{name}"));
                        }
                        field_applied = true;
                    }
                }
            }
        }

        // Close a trailing field segment with implicit equality.
        if let Some(field) = last_field {
            if !field.is_collection() {
                if new_field {
                    query.push_str(&format!("{alias}.{}", field.name));
                    field_applied = false;
                }
                if !field_applied {
                    query.push_str(&format!(" = :{}", field.name));
                }
            }
        }

        query.trim_end().to_string()
    }

    /// Build the parameter type and name lists in lock-step.
    fn build_parameters(tokens: &[Token<'_>]) -> (Vec<FieldType>, Vec<String>) {
        let mut types: Vec<FieldType> = Vec::new();
        let mut names: Vec<String> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match token {
                Token::Field(field) => {
                    // Collection-typed fields contribute no parameter.
                    if field.is_collection() {
                        continue;
                    }
                    types.push(field.field_type);
                    names.push(field.name.clone());
                }
                Token::Reserved(reserved) => {
                    // Arity adjustments only apply directly after a queried field.
                    let preceding = match i.checked_sub(1).map(|j| &tokens[j]) {
                        Some(Token::Field(f)) if !f.is_collection() => Some(*f),
                        _ => None,
                    };
                    let Some(field) = preceding else { continue };

                    match reserved.keyword {
                        "Between" => {
                            let capitalized = field.capitalized_name();
                            if let (Some(ty), Some(_)) = (types.pop(), names.pop()) {
                                types.push(ty);
                                types.push(ty);
                                names.push(format!("min{capitalized}"));
                                names.push(format!("max{capitalized}"));
                            }
                        }
                        "IsNull" | "IsNotNull" => {
                            types.pop();
                            names.pop();
                        }
                        _ => {}
                    }
                }
            }
        }

        (types, names)
    }
}

/// Compile a token sequence into a [`QueryHolder`].
pub fn compile<'a>(
    tokens: Vec<Token<'a>>,
    entity_name: &str,
) -> Result<QueryHolder<'a>, FinderError> {
    Compiler::compile(tokens, entity_name)
}
