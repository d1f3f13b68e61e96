//! End-to-end tests of the declare / construct / validate flow.

use pretty_assertions::assert_eq;
use serde_json::json;
use strukt::fields::{DictField, IntegralField, ListField, ModelField, StringField, UnicodeField};
use strukt::model;
use strukt::prelude::*;

model! {
    pub City {
        name: StringField::new(),
        officials: DictField::new(StringField::new(), StringField::new()),
        population: IntegralField::new().bounds(Some(0), None).default_value(0),
    }
}

model! {
    pub Person {
        name: StringField::new(),
        age: IntegralField::new().bounds(Some(0), None),
        siblings: ListField::new(StringField::new()).nullable(true),
    }
}

model! {
    pub Employee extends Person {
        salary: IntegralField::new().bounds(Some(0), None),
    }
}

model! {
    pub Address {
        street: UnicodeField::new(),
        number: IntegralField::new().bounds(Some(1), None),
    }
}

model! {
    pub Resident {
        name: StringField::new(),
        home: ModelField::of::<Address>(),
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn defaults_fill_unsupplied_fields() {
    let city = City::from_value(json!({
        "name": "Gotham",
        "officials": {},
    }))
    .unwrap();

    assert_eq!(city.get("population").unwrap(), Some(&json!(0)));
    assert!(city.validate().is_ok());
}

#[test]
fn unknown_key_fails_the_whole_construction() {
    let err = City::from_value(json!({
        "name": "Gotham",
        "officials": {},
        "motto": "darkness",
    }))
    .unwrap_err();

    assert_eq!(
        err,
        ModelError::UnknownAttribute {
            name: "motto".to_owned()
        }
    );
}

#[test]
fn construction_is_structural_only() {
    // Wildly wrong values construct fine; validate() is where they surface.
    let city = City::from_value(json!({
        "name": 12,
        "officials": {"mayor": 99},
        "population": "alot",
    }))
    .unwrap();

    let report = city.validate().unwrap_err();
    assert!(report.len() >= 3);

    let paths: Vec<String> = report
        .failures()
        .iter()
        .map(|failure| failure.path.to_string())
        .collect();
    assert_eq!(paths, ["name", r#"officials["mayor"]"#, "population"]);
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn conforming_instance_validates() {
    let person = Person::from_value(json!({
        "name": "Joe Shmoe",
        "age": 21,
        "siblings": ["Dick Shmoe", "Jane Shmoe"],
    }))
    .unwrap();

    assert!(person.validate().is_ok());
}

#[test]
fn nullable_field_accepts_null_and_unset() {
    let person = Person::from_value(json!({
        "name": "Joe Shmoe",
        "age": 21,
        "siblings": null,
    }))
    .unwrap();
    assert!(person.validate().is_ok());

    let person = Person::from_value(json!({"name": "Joe Shmoe", "age": 21})).unwrap();
    assert!(person.validate().is_ok());
}

#[test]
fn unset_required_field_is_reported_missing() {
    let person = Person::from_value(json!({"name": "Joe Shmoe"})).unwrap();
    let report = person.validate().unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].code, "missing");
    assert_eq!(report.failures()[0].path.to_string(), "age");
}

#[test]
fn failures_follow_declaration_order() {
    let person = Person::from_value(json!({
        "name": 1,
        "age": "old",
        "siblings": [2],
    }))
    .unwrap();

    let report = person.validate().unwrap_err();
    let paths: Vec<String> = report
        .failures()
        .iter()
        .map(|failure| failure.path.to_string())
        .collect();
    assert_eq!(paths, ["name", "age", "siblings[0]"]);
}

#[test]
fn validation_is_idempotent() {
    let person = Person::from_value(json!({"name": 1, "age": -3})).unwrap();
    let first = person.validate().unwrap_err();
    let second = person.validate().unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn progressive_fixes_converge_to_valid() {
    let mut person = Person::from_value(json!({"name": 1})).unwrap();

    let report = person.validate().unwrap_err();
    assert_eq!(report.len(), 2); // bad name, missing age

    person.set("name", json!("Joe Shmoe")).unwrap();
    let report = person.validate().unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].path.to_string(), "age");

    person.set("age", json!(21)).unwrap();
    assert!(person.validate().is_ok());
}

// ============================================================================
// INHERITANCE
// ============================================================================

#[test]
fn extended_model_validates_inherited_and_own_fields() {
    let employee = Employee::from_value(json!({
        "name": "Joe Shmoe",
        "age": 21,
        "salary": 50000,
    }))
    .unwrap();
    assert!(employee.validate().is_ok());

    let employee = Employee::from_value(json!({
        "name": "Joe Shmoe",
        "age": -1,
        "salary": -5,
    }))
    .unwrap();
    let report = employee.validate().unwrap_err();
    let paths: Vec<String> = report
        .failures()
        .iter()
        .map(|failure| failure.path.to_string())
        .collect();
    assert_eq!(paths, ["age", "salary"]);
}

#[test]
fn parent_schema_is_untouched_by_extension() {
    assert_eq!(Person::schema().len(), 3);
    assert!(!Person::schema().contains("salary"));
}

// ============================================================================
// NESTED MODELS
// ============================================================================

#[test]
fn nested_model_failures_are_path_prefixed() {
    let resident = Resident::from_value(json!({
        "name": "Joe Shmoe",
        "home": {"street": "Main St", "number": 0},
    }))
    .unwrap();

    let report = resident.validate().unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].code, "below_min");
    assert_eq!(report.failures()[0].path.to_string(), "home.number");
}

#[test]
fn nested_model_rejects_undeclared_keys() {
    let resident = Resident::from_value(json!({
        "name": "Joe Shmoe",
        "home": {"street": "Main St", "number": 4, "planet": "Earth"},
    }))
    .unwrap();

    let report = resident.validate().unwrap_err();
    assert_eq!(report.failures()[0].code, "unknown_field");
    assert_eq!(report.failures()[0].path.to_string(), "home.planet");
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn to_value_round_trips_through_from_value() {
    let original = json!({
        "name": "Gotham",
        "officials": {"mayor": "Bill"},
        "population": 8000000,
    });
    let city = City::from_value(original.clone()).unwrap();
    assert_eq!(city.to_value(), original);
}

#[test]
fn display_names_the_model_and_marks_unset() {
    let mut person = Person::instance();
    person.set("name", json!("Joe")).unwrap();

    assert_eq!(
        person.to_string(),
        r#"Person(name = "Joe", age = <unset>, siblings = <unset>)"#
    );
}
