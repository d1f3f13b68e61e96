//! Numeric fields with optional inclusive bounds.

use std::fmt::Display;

use serde_json::Value;

use crate::error::{ValidationFailure, ValidationReport};
use crate::fields::{Field, FieldOptions};
use crate::path::FieldPath;

// ============================================================================
// BOUNDS
// ============================================================================

/// Inclusive bounds, either side optionally unset (unbounded).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds<T> {
    /// Inclusive lower bound, or unbounded below.
    pub min: Option<T>,
    /// Inclusive upper bound, or unbounded above.
    pub max: Option<T>,
}

impl<T: PartialOrd + Display + Copy> Bounds<T> {
    /// Creates bounds from optional sides.
    #[must_use]
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    fn check(&self, path: &FieldPath, actual: T, value: &Value, report: &mut ValidationReport) {
        if let Some(min) = self.min {
            if actual < min {
                report.add(ValidationFailure::below_min(min, value).at(path.clone()));
            }
        }
        if let Some(max) = self.max {
            if actual > max {
                report.add(ValidationFailure::above_max(max, value).at(path.clone()));
            }
        }
    }
}

// ============================================================================
// NUMERIC FIELD
// ============================================================================

/// A field holding any JSON number.
///
/// # Examples
///
/// ```
/// use strukt::fields::{Field, NumericField};
/// use serde_json::json;
///
/// let field = NumericField::new().bounds(Some(0.0), Some(100.0));
/// assert!(field.validate(&json!(99.5)).is_empty());
/// assert_eq!(field.validate(&json!(101)).failures()[0].code, "above_max");
/// assert_eq!(field.validate(&json!("4")).failures()[0].code, "type_mismatch");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumericField {
    options: FieldOptions,
    bounds: Bounds<f64>,
}

impl NumericField {
    /// Creates an unbounded, non-nullable numeric field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets inclusive bounds; either side may be unset.
    #[must_use]
    pub fn bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.bounds = Bounds::new(min, max);
        self
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.bounds.max = Some(max);
        self
    }
}

impl_field_options!(NumericField);

impl Field for NumericField {
    fn type_name(&self) -> &'static str {
        "number"
    }

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn check(&self, path: &FieldPath, value: &Value, report: &mut ValidationReport) {
        match value.as_f64() {
            Some(actual) => self.bounds.check(path, actual, value, report),
            None => {
                report.add(ValidationFailure::type_mismatch("number", value).at(path.clone()));
            }
        }
    }
}

// ============================================================================
// INTEGRAL FIELD
// ============================================================================

/// A numeric field that additionally forbids fractional values.
///
/// A number written as `1.0` still counts as integral; only a non-zero
/// fractional part fails.
///
/// # Examples
///
/// ```
/// use strukt::fields::{Field, IntegralField};
/// use serde_json::json;
///
/// let field = IntegralField::new().bounds(Some(0), None);
/// assert!(field.validate(&json!(21)).is_empty());
/// assert_eq!(field.validate(&json!(1.5)).failures()[0].code, "fractional");
/// assert_eq!(field.validate(&json!(-1)).failures()[0].code, "below_min");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntegralField {
    options: FieldOptions,
    bounds: Bounds<i64>,
}

impl IntegralField {
    /// Creates an unbounded, non-nullable integral field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets inclusive bounds; either side may be unset.
    #[must_use]
    pub fn bounds(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.bounds = Bounds::new(min, max);
        self
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub fn min(mut self, min: i64) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn max(mut self, max: i64) -> Self {
        self.bounds.max = Some(max);
        self
    }
}

impl_field_options!(IntegralField);

impl Field for IntegralField {
    fn type_name(&self) -> &'static str {
        "integer"
    }

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn check(&self, path: &FieldPath, value: &Value, report: &mut ValidationReport) {
        let Value::Number(n) = value else {
            report.add(ValidationFailure::type_mismatch("integer", value).at(path.clone()));
            return;
        };

        if let Some(actual) = n.as_i64() {
            self.bounds.check(path, actual, value, report);
        } else if n.as_u64().is_some() {
            // Beyond i64::MAX; saturate so upper-bound checks still fire.
            self.bounds.check(path, i64::MAX, value, report);
        } else {
            let actual = n.as_f64().unwrap_or_default();
            if actual.fract() == 0.0 {
                // Float-to-int casts saturate, which is the behavior we want
                // for values outside the i64 range.
                self.bounds.check(path, actual as i64, value, report);
            } else {
                report.add(ValidationFailure::fractional(value).at(path.clone()));
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
