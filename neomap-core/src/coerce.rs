//! Primitive coercion: one dynamic value into one primitive kind.

use crate::error::MapError;
use crate::shape::{Kind, Primitive};
use crate::value::Value;

/// Coerce `value` into the primitive `kind`.
///
/// - `Null` yields the zero value of `kind` (`0`, `false`, `""`).
/// - A kind outside integer/boolean/string fails with
///   [`UnsupportedTypeKind`](MapError::UnsupportedTypeKind).
/// - A value of the wrong dynamic type fails with
///   [`TypeMismatch`](MapError::TypeMismatch) naming `field`.
///
/// No widening or parsing is attempted: `"42"` is not an integer.
///
/// ```rust
/// # use neomap_core::coerce::coerce;
/// # use neomap_core::shape::{Kind, Primitive};
/// # use neomap_core::Value;
/// let v = coerce(&Value::Null, Kind::String, "Name").unwrap();
/// assert_eq!(v, Primitive::String(String::new()));
/// ```
pub fn coerce(value: &Value, kind: Kind, field: &str) -> Result<Primitive, MapError> {
    if !kind.is_primitive() {
        return Err(MapError::UnsupportedTypeKind { kind });
    }
    match (kind, value) {
        (_, Value::Null) => Primitive::zero(kind),
        (Kind::Integer, Value::Integer(i)) => Ok(Primitive::Integer(*i)),
        (Kind::Boolean, Value::Boolean(b)) => Ok(Primitive::Boolean(*b)),
        (Kind::String, Value::String(s)) => Ok(Primitive::String(s.clone())),
        (expected, other) => Err(MapError::type_mismatch(field, expected, other.type_name())),
    }
}
