//! Mapping and sequence fields.
//!
//! Container fields recurse into their sub-fields and concatenate every
//! failure found, annotating each with the container index or key so the
//! caller can locate the faulty sub-value. An empty container is always
//! valid regardless of its element fields.

use serde_json::Value;

use crate::error::{ValidationFailure, ValidationReport};
use crate::fields::{Field, FieldOptions};
use crate::path::FieldPath;

// ============================================================================
// DICT FIELD
// ============================================================================

/// A mapping field: validates every key against `of_key` and every value
/// against `of_value`.
///
/// Keys are JSON object keys and therefore strings; each is validated as a
/// string value against `of_key`, so a non-string key field (say, a
/// [`NumericField`](crate::fields::NumericField)) rejects every key. Key
/// failures carry the code `invalid_key`; value failures are annotated
/// with `path["key"]`.
///
/// # Examples
///
/// ```
/// use strukt::fields::{DictField, Field, StringField, IntegralField};
/// use serde_json::json;
///
/// let field = DictField::new(StringField::new(), IntegralField::new());
/// assert!(field.validate(&json!({"a": 1, "b": 2})).is_empty());
///
/// let report = field.validate(&json!({"a": "one"}));
/// assert_eq!(report.failures()[0].path.to_string(), r#"["a"]"#);
/// ```
#[derive(Debug, Default)]
pub struct DictField {
    options: FieldOptions,
    of_key: Option<Box<dyn Field>>,
    of_value: Option<Box<dyn Field>>,
}

impl DictField {
    /// A mapping constrained on both keys and values.
    #[must_use]
    pub fn new(of_key: impl Field + 'static, of_value: impl Field + 'static) -> Self {
        Self {
            options: FieldOptions::default(),
            of_key: Some(Box::new(of_key)),
            of_value: Some(Box::new(of_value)),
        }
    }

    /// A mapping with unconstrained keys and values.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Sets the key constraint.
    #[must_use]
    pub fn of_key(mut self, field: impl Field + 'static) -> Self {
        self.of_key = Some(Box::new(field));
        self
    }

    /// Sets the value constraint.
    #[must_use]
    pub fn of_value(mut self, field: impl Field + 'static) -> Self {
        self.of_value = Some(Box::new(field));
        self
    }
}

impl_field_options!(DictField);

impl Field for DictField {
    fn type_name(&self) -> &'static str {
        "object"
    }

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn check(&self, path: &FieldPath, value: &Value, report: &mut ValidationReport) {
        let Value::Object(entries) = value else {
            report.add(ValidationFailure::type_mismatch("object", value).at(path.clone()));
            return;
        };

        for (key, entry) in entries {
            if let Some(of_key) = &self.of_key {
                let key_value = Value::String(key.clone());
                for inner in of_key.validate(&key_value) {
                    report.add(ValidationFailure::invalid_key(key, &inner).at(path.clone()));
                }
            }
            if let Some(of_value) = &self.of_value {
                of_value.validate_at(&path.key(key), Some(entry), report);
            }
        }
    }
}

// ============================================================================
// LIST FIELD
// ============================================================================

/// A sequence field: validates every element against `of`.
///
/// # Examples
///
/// ```
/// use strukt::fields::{Field, ListField, StringField};
/// use serde_json::json;
///
/// let field = ListField::new(StringField::new());
/// assert!(field.validate(&json!(["Dick", "Jane"])).is_empty());
///
/// let report = field.validate(&json!(["Dick", 2]));
/// assert_eq!(report.failures()[0].path.to_string(), "[1]");
/// ```
#[derive(Debug, Default)]
pub struct ListField {
    options: FieldOptions,
    of: Option<Box<dyn Field>>,
}

impl ListField {
    /// A sequence whose elements must satisfy `of`.
    #[must_use]
    pub fn new(of: impl Field + 'static) -> Self {
        Self {
            options: FieldOptions::default(),
            of: Some(Box::new(of)),
        }
    }

    /// A sequence with unconstrained elements.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }
}

impl_field_options!(ListField);

impl Field for ListField {
    fn type_name(&self) -> &'static str {
        "array"
    }

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn check(&self, path: &FieldPath, value: &Value, report: &mut ValidationReport) {
        let Value::Array(items) = value else {
            report.add(ValidationFailure::type_mismatch("array", value).at(path.clone()));
            return;
        };

        if let Some(of) = &self.of {
            for (i, item) in items.iter().enumerate() {
                of.validate_at(&path.index(i), Some(item), report);
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
