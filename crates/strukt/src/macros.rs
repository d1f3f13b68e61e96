//! The `model!` declaration macro.

/// Declares a model type: a unit struct implementing
/// [`Model`](crate::model::Model) whose schema is built once, on first use,
/// from the listed fields in declaration order.
///
/// A malformed declaration (reserved or duplicated field name) panics on
/// first schema access; the declaration itself is the bug, not the data fed
/// to it.
///
/// # Examples
///
/// ```
/// use strukt::fields::{IntegralField, StringField};
/// use strukt::model;
/// use strukt::prelude::*;
/// use serde_json::json;
///
/// model! {
///     pub Person {
///         name: StringField::new(),
///         age: IntegralField::new().bounds(Some(0), None),
///     }
/// }
///
/// let person = Person::from_value(json!({"name": "Joe Shmoe", "age": 21}))?;
/// assert!(person.validate().is_ok());
/// # Ok::<(), strukt::ModelError>(())
/// ```
///
/// A model may extend another, inheriting its fields ahead of its own; a
/// re-declared name overrides the inherited field in place:
///
/// ```
/// use strukt::fields::{IntegralField, StringField};
/// use strukt::model;
/// use strukt::prelude::*;
///
/// model! {
///     Person {
///         name: StringField::new(),
///     }
/// }
///
/// model! {
///     Employee extends Person {
///         salary: IntegralField::new().bounds(Some(0), None),
///     }
/// }
///
/// let names: Vec<&str> = Employee::schema().fields().map(|(n, _)| n).collect();
/// assert_eq!(names, ["name", "salary"]);
/// ```
#[macro_export]
macro_rules! model {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            $($field:ident : $fexpr:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::model::Model for $name {
            fn schema() -> &'static ::std::sync::Arc<$crate::schema::Schema> {
                static SCHEMA: ::std::sync::OnceLock<::std::sync::Arc<$crate::schema::Schema>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::schema::Schema::builder(stringify!($name))
                        $(.field(stringify!($field), $fexpr))*
                        .build()
                        .unwrap_or_else(|err| {
                            panic!(
                                "invalid declaration of model `{}`: {err}",
                                stringify!($name)
                            )
                        })
                })
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis $name:ident extends $parent:ty {
            $($field:ident : $fexpr:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::model::Model for $name {
            fn schema() -> &'static ::std::sync::Arc<$crate::schema::Schema> {
                static SCHEMA: ::std::sync::OnceLock<::std::sync::Arc<$crate::schema::Schema>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::schema::Schema::builder(stringify!($name))
                        .extends(<$parent as $crate::model::Model>::schema())
                        $(.field(stringify!($field), $fexpr))*
                        .build()
                        .unwrap_or_else(|err| {
                            panic!(
                                "invalid declaration of model `{}`: {err}",
                                stringify!($name)
                            )
                        })
                })
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
