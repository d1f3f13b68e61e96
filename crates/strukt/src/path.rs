//! Field paths for locating a failure inside a nested value.
//!
//! A [`FieldPath`] is a sequence of segments leading from the root of a
//! validated value to the offending sub-value. Paths render in the familiar
//! accessor notation: `address.zipcode`, `siblings[0]`, `officials["mayor"]`.

use std::fmt;

use serde::Serialize;
use serde::Serializer;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A named field of a model.
    Name(String),
    /// An index into a sequence.
    Index(usize),
    /// A key into a mapping.
    Key(String),
}

/// Location of a value inside a nested structure.
///
/// Paths are cheap to extend and are built top-down while walking a schema:
/// the model runtime starts from the field name, containers append an index
/// or key per element, nested models append their own field names.
///
/// # Examples
///
/// ```
/// use strukt::path::FieldPath;
///
/// let path = FieldPath::name("officials").key("mayor");
/// assert_eq!(path.to_string(), r#"officials["mayor"]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// The empty path, pointing at the validated value itself.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// A single-segment path naming a model field.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Name(name.into())],
        }
    }

    /// Returns this path extended by a named field.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        self.push(Segment::Name(name.into()))
    }

    /// Returns this path extended by a sequence index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.push(Segment::Index(index))
    }

    /// Returns this path extended by a mapping key.
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.push(Segment::Key(key.into()))
    }

    /// True for the empty (root) path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments of this path, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn push(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Name(name) if i == 0 => write!(f, "{name}")?,
                Segment::Name(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
                Segment::Key(key) => write!(f, "[{key:?}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
