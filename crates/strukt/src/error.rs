//! Failure and error types.
//!
//! The crate distinguishes two failure families (they never mix):
//!
//! - **Semantic diagnostics** — [`ValidationFailure`], aggregated into a
//!   [`ValidationReport`]. A stored value disagrees with its field's type or
//!   constraint. These are only ever produced by an explicit `validate()`
//!   call and are returned, not raised mid-walk: field validation is a pure
//!   function from value to diagnostics.
//! - **Structural errors** — [`ModelError`]. A caller referenced a name
//!   outside the declared schema, or a declaration itself is malformed.
//!   These are hard errors surfaced immediately as `Err`.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::path::FieldPath;

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// One validation diagnostic: where, what, and the offending value.
///
/// Uses `Cow<'static, str>` so the common static codes and messages do not
/// allocate.
///
/// # Examples
///
/// ```
/// use strukt::{ValidationFailure, path::FieldPath};
/// use serde_json::json;
///
/// let failure = ValidationFailure::type_mismatch("string", &json!(12))
///     .at(FieldPath::name("name"));
/// assert_eq!(failure.code, "type_mismatch");
/// assert_eq!(failure.to_string(), "name: expecting string, got integer");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationFailure {
    /// Location of the offending value, from the root of the instance.
    pub path: FieldPath,

    /// Stable code for programmatic handling: `type_mismatch`, `not_null`,
    /// `missing`, `below_min`, `above_max`, `fractional`, `invalid_key`,
    /// `unknown_field`, `non_ascii`.
    pub code: Cow<'static, str>,

    /// Human-readable explanation of expected vs. actual.
    pub message: Cow<'static, str>,

    /// The offending value, when one exists (absent for missing values).
    pub value: Option<Value>,
}

impl ValidationFailure {
    /// Creates a failure with a code and message, at the root path.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            path: FieldPath::root(),
            code: code.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Sets the path of this failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, path: FieldPath) -> Self {
        self.path = path;
        self
    }

    /// Attaches the offending value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationFailure {
    /// The value's runtime representation does not match the field's.
    pub fn type_mismatch(expected: impl Into<Cow<'static, str>>, value: &Value) -> Self {
        let expected = expected.into();
        Self::new(
            "type_mismatch",
            format!("expecting {expected}, got {}", json_type_name(value)),
        )
        .with_value(value.clone())
    }

    /// Null supplied to a non-nullable field.
    pub fn not_null() -> Self {
        Self::new("not_null", "value cannot be null")
    }

    /// Field was never assigned and has no default.
    pub fn missing() -> Self {
        Self::new("missing", "missing required value")
    }

    /// Numeric value below the field's lower bound.
    pub fn below_min(min: impl fmt::Display, value: &Value) -> Self {
        Self::new("below_min", format!("value must be at least {min}")).with_value(value.clone())
    }

    /// Numeric value above the field's upper bound.
    pub fn above_max(max: impl fmt::Display, value: &Value) -> Self {
        Self::new("above_max", format!("value must be at most {max}")).with_value(value.clone())
    }

    /// Numeric value with a non-zero fractional part given to an integral field.
    pub fn fractional(value: &Value) -> Self {
        Self::new("fractional", "expecting integer, got fractional number")
            .with_value(value.clone())
    }

    /// A mapping key that failed its key field's validation.
    pub fn invalid_key(key: &str, inner: &ValidationFailure) -> Self {
        Self::new(
            "invalid_key",
            format!("invalid key {key:?}: {}", inner.message),
        )
        .with_value(Value::String(key.to_owned()))
    }

    /// A key in a raw nested object that the schema does not declare.
    pub fn unknown_field(name: &str) -> Self {
        Self::new(
            "unknown_field",
            format!("`{name}` is not a declared field"),
        )
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ValidationFailure {}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// An ordered aggregate of validation failures.
///
/// `validate()` never stops at the first problem: the report carries every
/// failure found across all fields, in schema declaration order. An empty
/// report means the value fully conforms.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one failure.
    pub fn add(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Appends every failure from an iterator.
    pub fn extend(&mut self, failures: impl IntoIterator<Item = ValidationFailure>) {
        self.failures.extend(failures);
    }

    /// Appends every failure from another report.
    pub fn merge(&mut self, other: ValidationReport) {
        self.failures.extend(other.failures);
    }

    /// True if no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of failures recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// All failures, in the order they were found.
    #[must_use]
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Consumes the report, yielding its failures.
    #[must_use]
    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }

    /// `Ok(ok)` if empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok: T) -> Result<T, ValidationReport> {
        if self.is_empty() { Ok(ok) } else { Err(self) }
    }
}

impl FromIterator<ValidationFailure> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} failure(s):", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

// ============================================================================
// MODEL ERROR
// ============================================================================

/// Structural errors: schema closedness and declaration validity.
///
/// Unlike [`ValidationFailure`], these are fatal to the operation that
/// raised them — construction with an unknown key returns no partial
/// instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A construction key or accessed attribute outside the schema.
    #[error("`{name}` is not a declared field of this model")]
    UnknownAttribute {
        /// The offending name.
        name: String,
    },

    /// A declared field name the instance runtime claims for itself.
    #[error("field name `{name}` is reserved by the model runtime")]
    ReservedFieldName {
        /// The rejected name.
        name: String,
    },

    /// The same field name declared twice in one model body.
    #[error("field `{name}` is declared more than once")]
    DuplicateField {
        /// The duplicated name.
        name: String,
    },

    /// `from_value` given something other than a JSON object.
    #[error("expecting object, got {actual}")]
    ExpectedObject {
        /// Type name of the value actually supplied.
        actual: &'static str,
    },
}

// ============================================================================
// JSON TYPE NAMES
// ============================================================================

/// Human-readable name for a JSON value's runtime representation.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// TESTS
// ============================================================================
