//! Finder-name enumeration.

use std::collections::{BTreeSet, HashSet};

use finderq_core::{FieldDef, TypeClass};

use crate::token::applicable_tokens;

/// Enumerate all legal finder names for a field set.
///
/// Round 0 produces one base finder per non-excluded, non-collection field
/// (`find{Plural}By{Field}`, implicit equality) plus one variant per keyword
/// applicable to the field's type class. Each further round extends every
/// name accumulated so far with `And`/`Or` plus another field, skipping
/// fields already present in the name. The result is duplicate-free and
/// lexicographically sorted, so identical inputs always produce identical
/// output.
///
/// # Panics
///
/// Panics if `plural` is empty or `depth` is zero; both are contract
/// violations on the caller's side, not runtime conditions.
pub fn generate(
    fields: &[FieldDef],
    plural: &str,
    depth: usize,
    exclusions: &HashSet<String>,
) -> Vec<String> {
    assert!(!plural.is_empty(), "plural name required");
    assert!(depth > 0, "combination depth must be positive");

    let mut finders: BTreeSet<String> = BTreeSet::new();

    for round in 0..depth {
        let mut staged: BTreeSet<String> = BTreeSet::new();

        for field in fields {
            if field.is_collection() || exclusions.contains(&field.name) {
                continue;
            }
            let capitalized = field.capitalized_name();
            let suffixes = keyword_suffixes(field.type_class());

            if round == 0 {
                let base = format!("find{plural}By{capitalized}");
                for suffix in &suffixes {
                    staged.insert(format!("{base}{suffix}"));
                }
            } else {
                for existing in &finders {
                    // One field may appear at most once per combination.
                    if existing.contains(capitalized.as_str()) {
                        continue;
                    }
                    for joiner in ["And", "Or"] {
                        for suffix in &suffixes {
                            staged.insert(format!("{existing}{joiner}{capitalized}{suffix}"));
                        }
                    }
                }
            }
        }

        finders.extend(staged);
    }

    finders.into_iter().collect()
}

/// The keyword suffixes enumerable for a type class, led by the empty
/// suffix for the implicit-equality bare form.
fn keyword_suffixes(class: TypeClass) -> Vec<&'static str> {
    std::iter::once("")
        .chain(applicable_tokens(class).map(|t| t.keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use finderq_core::{FieldType, ScalarType};
    use pretty_assertions::assert_eq;

    fn people_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("name", FieldType::scalar(ScalarType::String)),
            FieldDef::new("age", FieldType::scalar(ScalarType::Int32)),
        ]
    }

    #[test]
    fn test_base_round_variants() {
        let finders = generate(&people_fields(), "People", 1, &HashSet::new());

        for expected in [
            "findPeopleByName",
            "findPeopleByNameLike",
            "findPeopleByNameNot",
            "findPeopleByNameIsNull",
            "findPeopleByNameIsNotNull",
            "findPeopleByAge",
            "findPeopleByAgeBetween",
            "findPeopleByAgeLessThan",
            "findPeopleByAgeGreaterThanEquals",
            "findPeopleByAgeNotEquals",
        ] {
            assert!(finders.iter().any(|f| f == expected), "missing {expected}");
        }
        // Depth 1 never combines fields.
        assert!(!finders.iter().any(|f| f.contains("And") || f.contains("Or")));
    }

    #[test]
    fn test_depth_two_combinations() {
        let finders = generate(&people_fields(), "People", 2, &HashSet::new());

        for expected in [
            "findPeopleByNameAndAge",
            "findPeopleByNameOrAge",
            "findPeopleByAgeBetweenAndNameLike",
            "findPeopleByNameLikeOrAgeGreaterThan",
        ] {
            assert!(finders.iter().any(|f| f == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_field_never_repeats_within_a_combination() {
        let finders = generate(&people_fields(), "People", 3, &HashSet::new());
        assert!(!finders.iter().any(|f| f.match_indices("Name").count() > 1));
        assert!(!finders.iter().any(|f| f.match_indices("Age").count() > 1));
    }

    #[test]
    fn test_exclusions_and_collections_skipped() {
        let fields = vec![
            FieldDef::new("name", FieldType::scalar(ScalarType::String)),
            FieldDef::new("version", FieldType::scalar(ScalarType::Int64)),
            FieldDef::new("tags", FieldType::collection(ScalarType::String)),
        ];
        let exclusions: HashSet<String> = ["version".to_string()].into();
        let finders = generate(&fields, "People", 2, &exclusions);

        assert!(!finders.iter().any(|f| f.contains("Version")));
        assert!(!finders.iter().any(|f| f.contains("Tags")));
        assert!(finders.iter().any(|f| f == "findPeopleByName"));
    }

    #[test]
    fn test_boolean_fields_get_bare_and_equals_only() {
        let fields = vec![FieldDef::new("active", FieldType::scalar(ScalarType::Bool))];
        let finders = generate(&fields, "People", 1, &HashSet::new());
        assert_eq!(
            finders,
            vec!["findPeopleByActive", "findPeopleByActiveEquals"]
        );
    }

    #[test]
    fn test_other_typed_fields_get_bare_form_only() {
        let fields = vec![FieldDef::new("id", FieldType::scalar(ScalarType::Uuid))];
        let finders = generate(&fields, "People", 1, &HashSet::new());
        assert_eq!(finders, vec!["findPeopleById"]);
    }

    #[test]
    fn test_deterministic_and_sorted() {
        let fields = people_fields();
        let first = generate(&fields, "People", 2, &HashSet::new());
        let second = generate(&fields, "People", 2, &HashSet::new());
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(first, sorted);
    }

    #[test]
    #[should_panic(expected = "plural name required")]
    fn test_empty_plural_is_a_contract_violation() {
        generate(&people_fields(), "", 1, &HashSet::new());
    }

    #[test]
    #[should_panic(expected = "combination depth must be positive")]
    fn test_zero_depth_is_a_contract_violation() {
        generate(&people_fields(), "People", 0, &HashSet::new());
    }
}
