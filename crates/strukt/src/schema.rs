//! Model schemas: ordered, immutable field maps built once per model type.
//!
//! A [`Schema`] is the product of the declaration-collection pass: an
//! ordered map from declared field name to its [`Field`] descriptor. It is
//! built once per model type by a [`SchemaBuilder`], is immutable
//! afterwards, and is shared via `Arc` — concurrent reads from many
//! instances need no locking because nothing mutates after the build.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ModelError, ValidationFailure, ValidationReport};
use crate::fields::Field;
use crate::path::FieldPath;

/// Names the instance runtime surfaces itself; a schema may not declare
/// them as fields.
pub const RESERVED_NAMES: &[&str] = &["schema", "fields", "validate", "from_dict", "to_dict"];

// ============================================================================
// SCHEMA
// ============================================================================

/// The ordered set of (name, field) pairs attached to a model type.
///
/// # Examples
///
/// ```
/// use strukt::schema::Schema;
/// use strukt::fields::{IntegralField, StringField};
///
/// let schema = Schema::builder("Person")
///     .field("name", StringField::new())
///     .field("age", IntegralField::new().bounds(Some(0), None))
///     .build()?;
///
/// assert_eq!(schema.name(), "Person");
/// assert!(schema.contains("name"));
/// assert_eq!(schema.len(), 2);
/// # Ok::<(), strukt::ModelError>(())
/// ```
#[derive(Debug)]
pub struct Schema {
    name: String,
    fields: IndexMap<String, Arc<dyn Field>>,
}

impl Schema {
    /// Starts building a schema for a model type with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: IndexMap::new(),
            declared: Vec::new(),
            error: None,
        }
    }

    /// The model type name this schema belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a field by declared name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Arc<dyn Field>> {
        self.fields.get(name)
    }

    /// True if `name` is a declared field.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Arc<dyn Field>)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True for a schema with no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a raw JSON object against this schema, appending every
    /// failure to `report`.
    ///
    /// Each declared field is validated against the matching entry (an
    /// absent entry is the unset case); keys outside the schema are
    /// reported as `unknown_field` failures. Used by nested-model fields,
    /// where the closed-schema contract applies to raw values rather than
    /// to construction.
    pub fn validate_map(
        &self,
        map: &Map<String, Value>,
        path: &FieldPath,
        report: &mut ValidationReport,
    ) {
        for (name, field) in &self.fields {
            field.validate_at(&path.child(name), map.get(name), report);
        }
        for key in map.keys() {
            if !self.fields.contains_key(key) {
                report.add(ValidationFailure::unknown_field(key).at(path.child(key)));
            }
        }
    }

    /// Validates an instance value store. The store's key set is already
    /// guaranteed to be a subset of the schema's, so only the schema walk
    /// is needed.
    pub(crate) fn validate_values(
        &self,
        values: &IndexMap<String, Value>,
        report: &mut ValidationReport,
    ) {
        for (name, field) in &self.fields {
            field.validate_at(&FieldPath::name(name), values.get(name), report);
        }
    }
}

// ============================================================================
// SCHEMA BUILDER
// ============================================================================

/// Collects field declarations into an immutable [`Schema`].
///
/// Declarations are recorded in order; [`extends`](SchemaBuilder::extends)
/// imports a parent schema's fields, with this builder's own declarations
/// taking precedence on name collision. The build fails on a reserved or
/// duplicated name — the declaration itself is malformed, so the failure is
/// a [`ModelError`], not a validation diagnostic.
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    fields: IndexMap<String, Arc<dyn Field>>,
    declared: Vec<String>,
    error: Option<ModelError>,
}

impl SchemaBuilder {
    /// Inherits every field of `parent`. Fields declared on this builder
    /// (before or after the call) override inherited ones of the same name.
    #[must_use]
    pub fn extends(mut self, parent: &Arc<Schema>) -> Self {
        for (name, field) in &parent.fields {
            if !self.declared.iter().any(|declared| declared == name) {
                self.fields.insert(name.clone(), field.clone());
            }
        }
        self
    }

    /// Declares a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: impl Field + 'static) -> Self {
        let name = name.into();
        if self.error.is_none() {
            if name.is_empty() || RESERVED_NAMES.contains(&name.as_str()) {
                self.error = Some(ModelError::ReservedFieldName { name: name.clone() });
            } else if self.declared.iter().any(|declared| declared == &name) {
                self.error = Some(ModelError::DuplicateField { name: name.clone() });
            }
        }
        self.fields.insert(name.clone(), Arc::new(field));
        self.declared.push(name);
        self
    }

    /// Finishes the build.
    pub fn build(self) -> Result<Arc<Schema>, ModelError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(Arc::new(Schema {
            name: self.name,
            fields: self.fields,
        }))
    }
}

// ============================================================================
// TESTS
// ============================================================================
