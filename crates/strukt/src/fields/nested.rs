//! Nested model fields.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{ValidationFailure, ValidationReport};
use crate::fields::{Field, FieldOptions};
use crate::model::Model;
use crate::path::FieldPath;
use crate::schema::Schema;

/// A field whose value is a record conforming to another model's schema.
///
/// Failures are exactly those the nested schema produces, prefixed with
/// this field's path. Keys outside the nested schema are reported as
/// `unknown_field` failures — the closed-schema contract, applied to a raw
/// nested value.
///
/// # Examples
///
/// ```
/// use strukt::fields::{Field, ModelField, StringField};
/// use strukt::model;
/// use serde_json::json;
///
/// model! {
///     Address {
///         street: StringField::new(),
///     }
/// }
///
/// let field = ModelField::of::<Address>();
/// assert!(field.validate(&json!({"street": "Main St"})).is_empty());
///
/// let report = field.validate(&json!({"street": 12}));
/// assert_eq!(report.failures()[0].path.to_string(), "street");
/// ```
#[derive(Debug)]
pub struct ModelField {
    options: FieldOptions,
    of: Arc<Schema>,
}

impl ModelField {
    /// A nested field for a declared model type.
    #[must_use]
    pub fn of<M: Model>() -> Self {
        Self::with_schema(M::schema().clone())
    }

    /// A nested field for an explicitly built schema.
    #[must_use]
    pub fn with_schema(schema: Arc<Schema>) -> Self {
        Self {
            options: FieldOptions::default(),
            of: schema,
        }
    }

    /// The nested schema.
    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.of
    }
}

impl_field_options!(ModelField);

impl Field for ModelField {
    fn type_name(&self) -> &'static str {
        "model"
    }

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn check(&self, path: &FieldPath, value: &Value, report: &mut ValidationReport) {
        match value {
            Value::Object(map) => self.of.validate_map(map, path, report),
            other => report.add(
                ValidationFailure::type_mismatch(format!("{} object", self.of.name()), other)
                    .at(path.clone()),
            ),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{IntegralField, StringField};
    use serde_json::json;

    fn address() -> Arc<Schema> {
        Schema::builder("Address")
            .field("street", StringField::new())
            .field("number", IntegralField::new().bounds(Some(1), None))
            .build()
            .unwrap()
    }

    #[test]
    fn conforming_object_is_valid() {
        let field = ModelField::with_schema(address());
        let report = field.validate(&json!({"street": "Main St", "number": 4}));
        assert!(report.is_empty());
    }

    #[test]
    fn rejects_non_object() {
        let field = ModelField::with_schema(address());
        let report = field.validate(&json!("Main St 4"));
        assert_eq!(report.failures()[0].code, "type_mismatch");
        assert_eq!(
            report.failures()[0].message,
            "expecting Address object, got string"
        );
    }

    #[test]
    fn nested_failures_are_path_prefixed() {
        let field = ModelField::with_schema(address());
        let mut report = ValidationReport::new();
        field.validate_at(
            &FieldPath::name("home"),
            Some(&json!({"street": 9, "number": 0})),
            &mut report,
        );

        assert_eq!(report.len(), 2);
        assert_eq!(report.failures()[0].path.to_string(), "home.street");
        assert_eq!(report.failures()[1].path.to_string(), "home.number");
    }

    #[test]
    fn unknown_nested_keys_are_reported() {
        let field = ModelField::with_schema(address());
        let report = field.validate(&json!({
            "street": "Main St",
            "number": 4,
            "planet": "Earth",
        }));
        assert_eq!(report.len(), 1);
        assert_eq!(report.failures()[0].code, "unknown_field");
        assert_eq!(report.failures()[0].path.to_string(), "planet");
    }

    #[test]
    fn missing_nested_fields_are_reported() {
        let field = ModelField::with_schema(address());
        let report = field.validate(&json!({"street": "Main St"}));
        assert_eq!(report.failures()[0].code, "missing");
        assert_eq!(report.failures()[0].path.to_string(), "number");
    }

    #[test]
    fn nullable_nested_field_accepts_null() {
        let field = ModelField::with_schema(address()).nullable(true);
        assert!(field.validate(&json!(null)).is_empty());
    }
}
