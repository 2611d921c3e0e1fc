//! End-to-end tests: enumerate, tokenize, and compile against one catalog.

use std::collections::HashSet;

use finderq::{
    CachedQuery, EntityDef, FieldDef, FieldType, FinderKey, FinderServices, QueryCache, ScalarType,
};

fn person() -> EntityDef {
    EntityDef::new("Person")
        .with_field(FieldDef::new("name", FieldType::scalar(ScalarType::String)))
        .with_field(FieldDef::new("age", FieldType::scalar(ScalarType::Int32)))
        .with_field(FieldDef::new("active", FieldType::scalar(ScalarType::Bool)))
        .with_field(FieldDef::new("nicknames", FieldType::collection(ScalarType::String)))
        .with_field(FieldDef::new("version", FieldType::scalar(ScalarType::Int64)))
}

#[test]
fn enumerates_the_documented_finder_set() {
    let person = person();
    let finders = FinderServices::finders(&person, "People", 2, &HashSet::new());

    for expected in [
        "findPeopleByName",
        "findPeopleByNameLike",
        "findPeopleByAge",
        "findPeopleByAgeBetween",
        "findPeopleByNameAndAge",
    ] {
        assert!(
            finders.iter().any(|f| f == expected),
            "enumeration is missing {expected}"
        );
    }
    assert!(!finders.iter().any(|f| f.contains("Nicknames")));
}

#[test]
fn compiles_the_documented_scenario_exactly() {
    let person = person();
    let holder =
        FinderServices::query_holder(&person, "findPeopleByAgeBetweenAndNameLike", "People")
            .unwrap();

    assert_eq!(
        holder.query,
        "SELECT Person FROM Person AS person WHERE person.age BETWEEN :minAge AND :maxAge \
         AND LOWER(person.name) LIKE LOWER(:name)"
    );
    assert_eq!(holder.parameter_names, vec!["minAge", "maxAge", "name"]);
    assert_eq!(
        holder.parameter_types,
        vec![
            FieldType::scalar(ScalarType::Int32),
            FieldType::scalar(ScalarType::Int32),
            FieldType::scalar(ScalarType::String),
        ]
    );
}

#[test]
fn every_enumerated_finder_tokenizes_and_compiles() {
    let person = person();
    let exclusions: HashSet<String> = ["version".to_string()].into();
    let finders = FinderServices::finders(&person, "People", 2, &exclusions);
    assert!(finders.len() > 50, "unexpectedly small finder set");

    for finder in &finders {
        let holder = FinderServices::query_holder(&person, finder, "People")
            .unwrap_or_else(|e| panic!("{finder} did not round-trip: {e}"));
        assert_eq!(
            holder.parameter_types.len(),
            holder.parameter_names.len(),
            "parameter parity violated for {finder}"
        );
        assert!(
            holder.query.starts_with("SELECT Person FROM Person AS person WHERE"),
            "unexpected query header for {finder}"
        );
    }
}

#[test]
fn enumeration_is_deterministic_across_calls() {
    let person = person();
    let exclusions = HashSet::new();
    let first = FinderServices::finders(&person, "People", 2, &exclusions);
    let second = FinderServices::finders(&person, "People", 2, &exclusions);
    assert_eq!(first, second);
}

#[test]
fn stale_finder_names_report_no_match() {
    // A finder generated before a schema change references a dropped field.
    let person = person();
    let err =
        FinderServices::query_holder(&person, "findPeopleByEmailLike", "People").unwrap_err();
    assert!(err.is_no_match());
}

#[test]
fn cache_serves_compiled_finders_and_invalidates_on_schema_change() {
    let person = person();
    let cache = QueryCache::new(64);
    let key = FinderKey::new("Person", "findPeopleByNameAndAge");

    let resolve = |catalog: &EntityDef| -> CachedQuery {
        let holder =
            FinderServices::query_holder(catalog, "findPeopleByNameAndAge", "People").unwrap();
        CachedQuery::from(&holder)
    };

    let first = cache
        .get_or_compute(key.clone(), || Ok(resolve(&person)))
        .unwrap();
    assert_eq!(
        first.query,
        "SELECT Person FROM Person AS person WHERE person.name = :name AND person.age = :age"
    );

    let second = cache
        .get_or_compute(key.clone(), || panic!("finder was recomputed"))
        .unwrap();
    assert_eq!(second, first);
    assert_eq!(cache.stats().hits(), 1);

    // Schema change: rename the age field and invalidate.
    let renamed = EntityDef::new("Person")
        .with_field(FieldDef::new("name", FieldType::scalar(ScalarType::String)))
        .with_field(FieldDef::new("years", FieldType::scalar(ScalarType::Int32)));
    cache.invalidate(1);

    let err = cache
        .get_or_compute(key, || {
            FinderServices::query_holder(&renamed, "findPeopleByNameAndAge", "People")
                .map(|h| CachedQuery::from(&h))
        })
        .unwrap_err();
    assert!(err.is_no_match());
}
