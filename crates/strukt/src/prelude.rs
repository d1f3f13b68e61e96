//! Convenience re-exports of the common surface.
//!
//! ```
//! use strukt::prelude::*;
//! ```

pub use crate::error::{ModelError, ValidationFailure, ValidationReport};
pub use crate::fields::{
    DictField, Field, FieldDefault, FieldOptions, IntegralField, ListField, ModelField,
    NumericField, StringField, UnicodeField,
};
pub use crate::instance::Instance;
pub use crate::model::Model;
pub use crate::path::FieldPath;
pub use crate::schema::{Schema, SchemaBuilder};
