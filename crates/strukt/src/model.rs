//! The [`Model`] trait: the typed handle a `model!` declaration produces.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ModelError;
use crate::instance::Instance;
use crate::schema::Schema;

/// A declared record type.
///
/// Implemented by the [`model!`](crate::model!) macro, which builds the
/// schema exactly once per type and memoizes it. The provided constructors
/// are thin wrappers around [`Instance`] bound to that schema.
pub trait Model {
    /// The memoized schema of this model type.
    fn schema() -> &'static Arc<Schema>;

    /// A fresh instance with defaults applied and everything else unset.
    #[must_use]
    fn instance() -> Instance
    where
        Self: Sized,
    {
        Instance::new(Self::schema().clone())
    }

    /// Builds an instance from raw key/value pairs.
    ///
    /// See [`Instance::from_dict`] for the construction contract.
    fn from_dict(
        entries: impl IntoIterator<Item = (String, Value)>,
    ) -> Result<Instance, ModelError>
    where
        Self: Sized,
    {
        Instance::from_dict(Self::schema().clone(), entries)
    }

    /// Builds an instance from a raw JSON value, which must be an object.
    fn from_value(value: Value) -> Result<Instance, ModelError>
    where
        Self: Sized,
    {
        Instance::from_value(Self::schema().clone(), value)
    }
}
