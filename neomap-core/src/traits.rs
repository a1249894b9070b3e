//! Core traits connecting Rust types to the conversion engine.

use crate::convert::Converted;
use crate::error::MapError;
use crate::shape::{FieldSpec, Kind, Primitive};
use crate::value::Value;

/// A struct-like target that can be populated from a property mapping.
///
/// Automatically implemented by `#[derive(Composite)]`, which emits the
/// static field table and a setter that dispatches on the field name.
/// Every field is zero-initialized through `Default` before population.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Default, PartialEq, Composite)]
/// #[allow(non_snake_case)]
/// struct Category {
///     ID: String,
///     Name: String,
/// }
///
/// assert_eq!(Category::NAME, "Category");
/// assert_eq!(Category::FIELDS.len(), 2);
/// ```
pub trait Composite: Default + Send + 'static {
    /// The shape name (defaults to the struct name).
    const NAME: &'static str;

    /// Declared fields in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Store a coerced primitive into the named field.
    fn assign(&mut self, field: &str, value: Primitive) -> Result<(), MapError>;
}

/// A Rust field type: its declared [`Kind`] and how a [`Primitive`] is
/// stored into it.
///
/// Only `i64`, `bool` and `String` declare a primitive kind. The other
/// implementations let a composite declare such fields; populating one
/// from a present property fails with `UnsupportedFieldKind`.
pub trait FieldValue {
    const KIND: Kind;

    fn set(&mut self, field: &str, value: Primitive) -> Result<(), MapError>;
}

impl FieldValue for i64 {
    const KIND: Kind = Kind::Integer;

    fn set(&mut self, field: &str, value: Primitive) -> Result<(), MapError> {
        match value {
            Primitive::Integer(v) => {
                *self = v;
                Ok(())
            }
            other => Err(MapError::type_mismatch(field, Self::KIND, &other.kind().to_string())),
        }
    }
}

impl FieldValue for bool {
    const KIND: Kind = Kind::Boolean;

    fn set(&mut self, field: &str, value: Primitive) -> Result<(), MapError> {
        match value {
            Primitive::Boolean(v) => {
                *self = v;
                Ok(())
            }
            other => Err(MapError::type_mismatch(field, Self::KIND, &other.kind().to_string())),
        }
    }
}

impl FieldValue for String {
    const KIND: Kind = Kind::String;

    fn set(&mut self, field: &str, value: Primitive) -> Result<(), MapError> {
        match value {
            Primitive::String(v) => {
                *self = v;
                Ok(())
            }
            other => Err(MapError::type_mismatch(field, Self::KIND, &other.kind().to_string())),
        }
    }
}

macro_rules! impl_unsupported_field {
    ($t:ty, $kind:ident) => {
        impl FieldValue for $t {
            const KIND: Kind = Kind::$kind;

            fn set(&mut self, _field: &str, _value: Primitive) -> Result<(), MapError> {
                Err(MapError::UnsupportedTypeKind { kind: Self::KIND })
            }
        }
    };
}

impl_unsupported_field!(f64, Float);
impl_unsupported_field!(Value, Any);
impl_unsupported_field!(bytes::Bytes, Bytes);

impl<T> FieldValue for Vec<T> {
    const KIND: Kind = Kind::List;

    fn set(&mut self, _field: &str, _value: Primitive) -> Result<(), MapError> {
        Err(MapError::UnsupportedTypeKind { kind: Self::KIND })
    }
}

impl<T> FieldValue for Option<T> {
    const KIND: Kind = Kind::Any;

    fn set(&mut self, _field: &str, _value: Primitive) -> Result<(), MapError> {
        Err(MapError::UnsupportedTypeKind { kind: Self::KIND })
    }
}

/// Positional downcast target for a [`Converted`] slot.
///
/// Implemented for scalars, `Value`, typed vectors, and by
/// `#[derive(Composite)]` for composites. `index` is only used to
/// report which slot failed.
pub trait FromConverted: Sized {
    fn from_converted(index: usize, converted: Converted) -> Result<Self, MapError>;
}

/// Inbound record abstraction: one query result row as ordered values.
pub trait Record {
    fn values(&self) -> Result<Vec<Value>, MapError>;
}
