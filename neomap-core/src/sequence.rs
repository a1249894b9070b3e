//! Sequence building: a dynamic list into a typed vector.

use crate::error::MapError;
use crate::shape::{Kind, Shape};
use crate::value::Value;

/// A typed, ordered sequence produced from a dynamic list.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
    Booleans(Vec<bool>),
    Strings(Vec<String>),
    Values(Vec<Value>),
}

impl Sequence {
    pub fn len(&self) -> usize {
        match self {
            Sequence::Integers(v) => v.len(),
            Sequence::Floats(v) => v.len(),
            Sequence::Booleans(v) => v.len(),
            Sequence::Strings(v) => v.len(),
            Sequence::Values(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> Kind {
        match self {
            Sequence::Integers(_) => Kind::Integer,
            Sequence::Floats(_) => Kind::Float,
            Sequence::Booleans(_) => Kind::Boolean,
            Sequence::Strings(_) => Kind::String,
            Sequence::Values(_) => Kind::Any,
        }
    }
}

fn assign_each<T>(
    items: Vec<Value>,
    kind: Kind,
    pick: impl Fn(Value) -> Result<T, Value>,
) -> Result<Vec<T>, MapError> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| pick(v).map_err(|v| MapError::element_mismatch(i, kind, v.type_name())))
        .collect()
}

/// Build a typed sequence from `items` using the element kind of `shape`.
///
/// Items are assigned as they are: there is no primitive coercion and no
/// null defaulting, so a `Null` or otherwise incompatible item fails the
/// whole sequence with [`ElementMismatch`](MapError::ElementMismatch).
/// Order and length are preserved; an empty list yields an empty sequence.
///
/// ```rust
/// # use neomap_core::sequence::{build_sequence, Sequence};
/// # use neomap_core::shape::Shape;
/// # use neomap_core::Value;
/// let items = vec![Value::from(1), Value::from(2), Value::from(3)];
/// let seq = build_sequence(items, &Shape::of::<Vec<i64>>()).unwrap();
/// assert_eq!(seq, Sequence::Integers(vec![1, 2, 3]));
/// ```
pub fn build_sequence(items: Vec<Value>, shape: &Shape) -> Result<Sequence, MapError> {
    let kind = match shape {
        Shape::Sequence(kind) => *kind,
        other => {
            return Err(MapError::NotASequenceDescriptor { shape: other.describe() });
        }
    };
    let seq = match kind {
        Kind::Integer => Sequence::Integers(assign_each(items, kind, |v| match v {
            Value::Integer(i) => Ok(i),
            other => Err(other),
        })?),
        Kind::Float => Sequence::Floats(assign_each(items, kind, |v| match v {
            Value::Float(f) => Ok(f),
            other => Err(other),
        })?),
        Kind::Boolean => Sequence::Booleans(assign_each(items, kind, |v| match v {
            Value::Boolean(b) => Ok(b),
            other => Err(other),
        })?),
        Kind::String => Sequence::Strings(assign_each(items, kind, |v| match v {
            Value::String(s) => Ok(s),
            other => Err(other),
        })?),
        Kind::Any => Sequence::Values(items),
        other => return Err(MapError::UnsupportedTypeKind { kind: other }),
    };
    Ok(seq)
}
