//! Declarative data models over untrusted JSON.
//!
//! `strukt` lets you declare a record type as an ordered set of named,
//! typed fields, build instances of it from parsed JSON you do not trust,
//! and validate them against the declared types and constraints — collecting
//! every failure found, each annotated with the path of the offending value.
//!
//! The three stages are deliberately separate:
//!
//! 1. **Declare** — [`model!`] builds a [`Schema`](schema::Schema) once per
//!    type: an immutable, ordered map from field name to
//!    [`Field`](fields::Field) descriptor.
//! 2. **Construct** — [`Model::from_value`](model::Model::from_value) and
//!    friends are purely structural: values are stored verbatim, defaults
//!    fill unsupplied fields, and a key outside the schema fails the whole
//!    construction. No type checking happens here.
//! 3. **Validate** — [`Instance::validate`](instance::Instance::validate)
//!    walks the schema in declaration order and aggregates every
//!    [`ValidationFailure`] into a [`ValidationReport`] rather than stopping
//!    at the first.
//!
//! # Examples
//!
//! ```
//! use strukt::fields::{DictField, IntegralField, StringField};
//! use strukt::model;
//! use strukt::prelude::*;
//! use serde_json::json;
//!
//! model! {
//!     pub City {
//!         name: StringField::new(),
//!         officials: DictField::new(StringField::new(), StringField::new()),
//!         population: IntegralField::new().bounds(Some(0), None).default_value(0),
//!     }
//! }
//!
//! let city = City::from_value(json!({
//!     "name": "Gotham",
//!     "officials": {"mayor": "Bill", "sheriff": "Jim"},
//! }))?;
//! assert!(city.validate().is_ok());
//!
//! // Construction never type-checks; validation reports everything at once.
//! let city = City::from_value(json!({
//!     "name": 12,
//!     "officials": {"mayor": 99},
//!     "population": "alot",
//! }))?;
//! let report = city.validate().unwrap_err();
//! assert!(report.len() >= 3);
//! assert_eq!(report.failures()[0].path.to_string(), "name");
//! # Ok::<(), strukt::ModelError>(())
//! ```

pub mod error;
pub mod fields;
pub mod instance;
mod macros;
pub mod model;
pub mod path;
pub mod prelude;
pub mod schema;

pub use error::{ModelError, ValidationFailure, ValidationReport};
