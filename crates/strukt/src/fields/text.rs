//! Text fields.
//!
//! Two text representations exist: [`StringField`] accepts ASCII-only
//! strings, [`UnicodeField`] accepts any string. Both reject every
//! non-string value with a `type_mismatch`.

use serde_json::Value;

use crate::error::{ValidationFailure, ValidationReport};
use crate::fields::{Field, FieldOptions};
use crate::path::FieldPath;

// ============================================================================
// STRING FIELD
// ============================================================================

/// An ASCII text field.
///
/// # Examples
///
/// ```
/// use strukt::fields::{Field, StringField};
/// use serde_json::json;
///
/// let field = StringField::new();
/// assert!(field.validate(&json!("Gotham")).is_empty());
/// assert_eq!(field.validate(&json!(12)).failures()[0].code, "type_mismatch");
/// assert_eq!(field.validate(&json!("Göteborg")).failures()[0].code, "non_ascii");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringField {
    options: FieldOptions,
}

impl StringField {
    /// Creates a non-nullable ASCII text field with no default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl_field_options!(StringField);

impl Field for StringField {
    fn type_name(&self) -> &'static str {
        "string"
    }

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn check(&self, path: &FieldPath, value: &Value, report: &mut ValidationReport) {
        match value {
            Value::String(s) if s.is_ascii() => {}
            Value::String(_) => report.add(
                ValidationFailure::new("non_ascii", "expecting ascii text, got non-ascii text")
                    .at(path.clone())
                    .with_value(value.clone()),
            ),
            other => report.add(ValidationFailure::type_mismatch("string", other).at(path.clone())),
        }
    }
}

// ============================================================================
// UNICODE FIELD
// ============================================================================

/// A text field accepting any string.
#[derive(Debug, Clone, Default)]
pub struct UnicodeField {
    options: FieldOptions,
}

impl UnicodeField {
    /// Creates a non-nullable text field with no default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl_field_options!(UnicodeField);

impl Field for UnicodeField {
    fn type_name(&self) -> &'static str {
        "text"
    }

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn check(&self, path: &FieldPath, value: &Value, report: &mut ValidationReport) {
        if !value.is_string() {
            report.add(ValidationFailure::type_mismatch("text", value).at(path.clone()));
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_accepts_ascii() {
        let field = StringField::new();
        assert!(field.validate(&json!("hello")).is_empty());
        assert!(field.validate(&json!("")).is_empty());
    }

    #[test]
    fn string_rejects_non_string() {
        let field = StringField::new();
        let report = field.validate(&json!(2));
        assert_eq!(report.failures()[0].code, "type_mismatch");
        assert_eq!(report.failures()[0].message, "expecting string, got integer");
    }

    #[test]
    fn string_rejects_non_ascii() {
        let field = StringField::new();
        let report = field.validate(&json!("héllo"));
        assert_eq!(report.failures()[0].code, "non_ascii");
    }

    #[test]
    fn unicode_accepts_any_text() {
        let field = UnicodeField::new();
        assert!(field.validate(&json!("héllo")).is_empty());
        assert!(field.validate(&json!("")).is_empty());
        assert!(field.validate(&json!("hello")).is_empty());
    }

    #[test]
    fn unicode_rejects_non_string() {
        let field = UnicodeField::new();
        let report = field.validate(&json!(4.0));
        assert_eq!(report.failures()[0].code, "type_mismatch");
        assert_eq!(report.failures()[0].message, "expecting text, got number");
    }

    #[test]
    fn nullable_string_accepts_null() {
        let field = StringField::new().nullable(true);
        assert!(field.validate(&json!(null)).is_empty());
    }
}
