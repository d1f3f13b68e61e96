//! Model instances: per-instance value stores routed through a schema.
//!
//! An [`Instance`] owns a mapping from field name to current value. Every
//! access goes through the schema: a name outside it is an
//! [`UnknownAttribute`](crate::ModelError::UnknownAttribute) error, never a
//! silent dynamic attribute. Assignment never validates — semantic checks
//! run only at an explicit [`validate`](Instance::validate) call, so an
//! instance may pass through inconsistent intermediate states while being
//! built up.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ModelError, ValidationReport, json_type_name};
use crate::schema::Schema;

/// One record conforming (or not yet conforming) to a schema.
///
/// # Examples
///
/// ```
/// use strukt::instance::Instance;
/// use strukt::schema::Schema;
/// use strukt::fields::{IntegralField, StringField};
/// use serde_json::json;
///
/// let schema = Schema::builder("Person")
///     .field("name", StringField::new())
///     .field("age", IntegralField::new().bounds(Some(0), None).default_value(0))
///     .build()?;
///
/// let mut person = Instance::new(schema);
/// person.set("name", json!("Joe Shmoe"))?;
/// assert!(person.validate().is_ok());
/// # Ok::<(), strukt::ModelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    schema: Arc<Schema>,
    values: IndexMap<String, Value>,
}

impl Instance {
    /// A fresh instance: fields with a default get the produced value,
    /// the rest are unset.
    #[must_use]
    pub fn new(schema: Arc<Schema>) -> Self {
        let mut values = IndexMap::new();
        for (name, field) in schema.fields() {
            if let Some(default) = field.default_value() {
                values.insert(name.to_owned(), default);
            }
        }
        Self { schema, values }
    }

    /// Constructs an instance from raw key/value pairs.
    ///
    /// Purely structural: supplied values are stored verbatim, with type
    /// and constraint checking deferred to [`validate`](Instance::validate).
    /// Any key outside the schema fails the whole construction with
    /// [`ModelError::UnknownAttribute`] — no partial instance is returned.
    pub fn from_dict(
        schema: Arc<Schema>,
        entries: impl IntoIterator<Item = (String, Value)>,
    ) -> Result<Self, ModelError> {
        let entries: Vec<(String, Value)> = entries.into_iter().collect();
        for (name, _) in &entries {
            if !schema.contains(name) {
                return Err(ModelError::UnknownAttribute { name: name.clone() });
            }
        }

        let mut instance = Self::new(schema);
        for (name, value) in entries {
            instance.values.insert(name, value);
        }
        Ok(instance)
    }

    /// Constructs an instance from a raw JSON value, which must be an object.
    pub fn from_value(schema: Arc<Schema>, value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Self::from_dict(schema, map),
            other => Err(ModelError::ExpectedObject {
                actual: json_type_name(&other),
            }),
        }
    }

    /// The schema this instance is bound to.
    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Reads a field's current value; `Ok(None)` for a declared but unset
    /// field.
    pub fn get(&self, name: &str) -> Result<Option<&Value>, ModelError> {
        if !self.schema.contains(name) {
            return Err(ModelError::UnknownAttribute {
                name: name.to_owned(),
            });
        }
        Ok(self.values.get(name))
    }

    /// Writes a field's value. Never validates.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Result<(), ModelError> {
        let name = name.into();
        if !self.schema.contains(&name) {
            return Err(ModelError::UnknownAttribute { name });
        }
        self.values.insert(name, value.into());
        Ok(())
    }

    /// Removes a field's value, returning it; the field becomes unset.
    pub fn unset(&mut self, name: &str) -> Result<Option<Value>, ModelError> {
        if !self.schema.contains(name) {
            return Err(ModelError::UnknownAttribute {
                name: name.to_owned(),
            });
        }
        Ok(self.values.shift_remove(name))
    }

    /// Validates every stored value against the schema, in declaration
    /// order, aggregating every failure found rather than stopping at the
    /// first. `Ok(())` iff the instance fully conforms. Idempotent:
    /// re-invocable after further mutation.
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::new();
        self.schema.validate_values(&self.values, &mut report);
        report.into_result(())
    }

    /// Renders the instance as a JSON object with every schema field, in
    /// declaration order; unset fields render as null.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (name, _) in self.schema.fields() {
            let value = self.values.get(name).cloned().unwrap_or(Value::Null);
            map.insert(name.to_owned(), value);
        }
        Value::Object(map)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.schema.name())?;
        for (i, (name, _)) in self.schema.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.values.get(name) {
                Some(value) => write!(f, "{name} = {value}")?,
                None => write!(f, "{name} = <unset>")?,
            }
        }
        write!(f, ")")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{DictField, IntegralField, ListField, StringField};
    use serde_json::json;

    fn person() -> Arc<Schema> {
        Schema::builder("Person")
            .field("name", StringField::new())
            .field("age", IntegralField::new().bounds(Some(0), None))
            .field("siblings", ListField::new(StringField::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn from_dict_stores_supplied_values() {
        let person = Instance::from_value(
            person(),
            json!({
                "name": "Joe Shmoe",
                "age": 21,
                "siblings": ["Dick Shmoe", "Jane Shmoe"],
            }),
        )
        .unwrap();

        assert_eq!(person.get("name").unwrap(), Some(&json!("Joe Shmoe")));
        assert_eq!(person.get("age").unwrap(), Some(&json!(21)));
        assert_eq!(
            person.get("siblings").unwrap(),
            Some(&json!(["Dick Shmoe", "Jane Shmoe"]))
        );
    }

    #[test]
    fn from_dict_rejects_unknown_key() {
        let err = Instance::from_value(person(), json!({"name": "Joe", "chocolate": "chips"}))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownAttribute {
                name: "chocolate".to_owned()
            }
        );
    }

    #[test]
    fn from_dict_does_not_validate_types() {
        // Structural only: bogus values are stored and surface at validate().
        let person =
            Instance::from_value(person(), json!({"name": 12, "age": "lots"})).unwrap();
        assert_eq!(person.get("age").unwrap(), Some(&json!("lots")));
        assert!(person.validate().is_err());
    }

    #[test]
    fn from_value_rejects_non_object() {
        let err = Instance::from_value(person(), json!([1, 2])).unwrap_err();
        assert_eq!(err, ModelError::ExpectedObject { actual: "array" });
    }

    #[test]
    fn defaults_apply_when_unsupplied() {
        let schema = Schema::builder("Counter")
            .field("count", IntegralField::new().default_value(0))
            .field("tags", ListField::any().default_with(|| json!([])))
            .build()
            .unwrap();

        let counter = Instance::new(schema);
        assert_eq!(counter.get("count").unwrap(), Some(&json!(0)));
        assert_eq!(counter.get("tags").unwrap(), Some(&json!([])));
        assert!(counter.validate().is_ok());
    }

    #[test]
    fn factory_defaults_are_not_shared_between_instances() {
        let schema = Schema::builder("Bag")
            .field("items", ListField::any().default_with(|| json!([])))
            .build()
            .unwrap();

        let mut first = Instance::new(schema.clone());
        let second = Instance::new(schema);

        let mut items = first.get("items").unwrap().unwrap().clone();
        items.as_array_mut().unwrap().push(json!("x"));
        first.set("items", items).unwrap();

        assert_eq!(first.get("items").unwrap(), Some(&json!(["x"])));
        assert_eq!(second.get("items").unwrap(), Some(&json!([])));
    }

    #[test]
    fn supplied_value_overrides_default() {
        let schema = Schema::builder("Counter")
            .field("count", IntegralField::new().default_value(0))
            .build()
            .unwrap();

        let counter = Instance::from_value(schema, json!({"count": 7})).unwrap();
        assert_eq!(counter.get("count").unwrap(), Some(&json!(7)));
    }

    #[test]
    fn get_and_set_reject_unknown_names() {
        let mut person = Instance::new(person());
        assert!(matches!(
            person.get("nope"),
            Err(ModelError::UnknownAttribute { .. })
        ));
        assert!(matches!(
            person.set("nope", json!(1)),
            Err(ModelError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn unset_field_reads_as_none() {
        let person = Instance::new(person());
        assert_eq!(person.get("name").unwrap(), None);
    }

    #[test]
    fn unset_removes_a_value() {
        let mut person =
            Instance::from_value(person(), json!({"name": "Joe"})).unwrap();
        assert_eq!(person.unset("name").unwrap(), Some(json!("Joe")));
        assert_eq!(person.get("name").unwrap(), None);
    }

    #[test]
    fn to_value_includes_unset_fields_as_null() {
        let person = Instance::from_value(person(), json!({"age": 21})).unwrap();
        assert_eq!(
            person.to_value(),
            json!({"name": null, "age": 21, "siblings": null})
        );
    }

    #[test]
    fn display_renders_schema_order() {
        let mut person = Instance::new(person());
        person.set("name", json!("Joe")).unwrap();
        assert_eq!(
            person.to_string(),
            r#"Person(name = "Joe", age = <unset>, siblings = <unset>)"#
        );
    }

    #[test]
    fn incremental_build_then_validate() {
        // Invalid intermediate states are fine until validate() is called.
        let schema = Schema::builder("Release")
            .field("version", StringField::new())
            .field(
                "compatible_with",
                DictField::any().of_value(ListField::new(StringField::new())),
            )
            .build()
            .unwrap();

        let mut release = Instance::new(schema);
        assert!(release.validate().is_err());

        release.set("version", json!("1.0")).unwrap();
        release
            .set("compatible_with", json!({"key": "value"}))
            .unwrap();
        let report = release.validate().unwrap_err();
        assert_eq!(report.failures()[0].path.to_string(), r#"compatible_with["key"]"#);

        release
            .set("compatible_with", json!({"key": ["value1", "value2"]}))
            .unwrap();
        assert!(release.validate().is_ok());
    }
}
