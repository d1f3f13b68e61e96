//! The field hierarchy: typed, constrained descriptors for model attributes.
//!
//! Every concrete field implements [`Field`], whose contract is a pure
//! function from candidate value to diagnostics: `validate` returns a
//! [`ValidationReport`] (empty = valid) and never panics on malformed
//! input. Container fields recurse into their sub-fields, annotating each
//! failure with the index or key of the offending element.
//!
//! All fields share two options via [`FieldOptions`]:
//!
//! - `nullable` — if true, a null value short-circuits to zero failures
//!   regardless of the variant-specific check;
//! - `default` — a plain value or a zero-argument factory invoked fresh per
//!   instance, applied when construction leaves the field unsupplied.
//!
//! # Examples
//!
//! ```
//! use strukt::fields::{Field, IntegralField};
//! use serde_json::json;
//!
//! let population = IntegralField::new().bounds(Some(0), None);
//! assert!(population.validate(&json!(42)).is_empty());
//! assert_eq!(population.validate(&json!(-1)).failures()[0].code, "below_min");
//! assert_eq!(population.validate(&json!("alot")).failures()[0].code, "type_mismatch");
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{ValidationFailure, ValidationReport};
use crate::path::FieldPath;

// ============================================================================
// SHARED OPTION BUILDERS
// ============================================================================

/// Generates the shared option builders (`nullable`, `default_value`,
/// `default_with`) for a concrete field struct with an `options` member.
macro_rules! impl_field_options {
    ($name:ident) => {
        impl $name {
            /// Accepts null as a valid value for this field.
            #[must_use]
            pub fn nullable(mut self, nullable: bool) -> Self {
                self.options.nullable = nullable;
                self
            }

            /// Plain default used when construction leaves this field unsupplied.
            #[must_use]
            pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
                self.options.default = Some($crate::fields::FieldDefault::Value(value.into()));
                self
            }

            /// Default factory invoked fresh for every instance, so mutable
            /// defaults are never shared between instances.
            #[must_use]
            pub fn default_with<F>(mut self, factory: F) -> Self
            where
                F: Fn() -> serde_json::Value + Send + Sync + 'static,
            {
                self.options.default = Some($crate::fields::FieldDefault::Factory(
                    ::std::sync::Arc::new(factory),
                ));
                self
            }
        }
    };
}

pub mod containers;
pub mod nested;
pub mod numeric;
pub mod text;

pub use containers::{DictField, ListField};
pub use nested::ModelField;
pub use numeric::{Bounds, IntegralField, NumericField};
pub use text::{StringField, UnicodeField};

// ============================================================================
// DEFAULTS
// ============================================================================

/// A default for an unsupplied field: a plain value, or a factory invoked
/// fresh per instance.
#[derive(Clone)]
pub enum FieldDefault {
    /// A value cloned into every instance.
    Value(Value),
    /// A zero-argument constructor invoked once per instance.
    Factory(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl FieldDefault {
    /// Produces the default value for one instance.
    #[must_use]
    pub fn produce(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Factory(factory) => factory(),
        }
    }
}

impl fmt::Debug for FieldDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Factory(_) => f.debug_tuple("Factory").field(&"<fn>").finish(),
        }
    }
}

impl From<Value> for FieldDefault {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

// ============================================================================
// SHARED OPTIONS
// ============================================================================

/// Options every field variant carries.
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    /// If true, null is a valid value regardless of the variant check.
    pub nullable: bool,
    /// Default applied when construction leaves the field unsupplied.
    pub default: Option<FieldDefault>,
}

// ============================================================================
// FIELD TRAIT
// ============================================================================

/// A typed, constrained descriptor for one model attribute.
///
/// Implementors provide the variant-specific [`check`](Field::check); the
/// null/missing contract shared by every variant lives in the provided
/// [`validate_at`](Field::validate_at):
///
/// - null and `nullable` → zero failures, the variant check is skipped;
/// - null and non-nullable → one `not_null` failure;
/// - unset (no value at all) and non-nullable → one `missing` failure;
/// - otherwise the variant check runs.
pub trait Field: fmt::Debug + Send + Sync {
    /// Short name of the expected representation, used in messages.
    fn type_name(&self) -> &'static str;

    /// The shared options of this field.
    fn options(&self) -> &FieldOptions;

    /// Variant-specific check. Only called with non-null values.
    fn check(&self, path: &FieldPath, value: &Value, report: &mut ValidationReport);

    /// Validates a possibly-unset value at a given path, appending every
    /// failure to `report`.
    fn validate_at(&self, path: &FieldPath, value: Option<&Value>, report: &mut ValidationReport) {
        match value {
            None => {
                if !self.options().nullable {
                    report.add(ValidationFailure::missing().at(path.clone()));
                }
            }
            Some(Value::Null) => {
                if !self.options().nullable {
                    report.add(ValidationFailure::not_null().at(path.clone()));
                }
            }
            Some(value) => self.check(path, value, report),
        }
    }

    /// Validates a candidate value, returning the diagnostics found.
    ///
    /// An empty report means the value conforms.
    fn validate(&self, value: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        self.validate_at(&FieldPath::root(), Some(value), &mut report);
        report
    }

    /// True if null is a valid value for this field.
    fn is_nullable(&self) -> bool {
        self.options().nullable
    }

    /// Produces this field's default value, if one is declared.
    fn default_value(&self) -> Option<Value> {
        self.options().default.as_ref().map(FieldDefault::produce)
    }
}

// ============================================================================
// TESTS
// ============================================================================
