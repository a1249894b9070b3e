//! Converted values and positional downcasting.

use std::any::Any;
use std::fmt;

use crate::error::MapError;
use crate::sequence::Sequence;
use crate::shape::{HasShape, Shape};
use crate::traits::{Composite, FromConverted};
use crate::value::Value;

/// One converted slot of a row.
pub enum Converted {
    /// A populated composite instance, boxed behind its shape name.
    Composite {
        shape: &'static str,
        value: Box<dyn Any + Send>,
    },
    Sequence(Sequence),
    /// A value passed through unchanged.
    Value(Value),
}

impl Converted {
    /// Short description of what the slot holds, for errors.
    pub fn describe(&self) -> String {
        match self {
            Converted::Composite { shape, .. } => (*shape).to_owned(),
            Converted::Sequence(s) => format!("[{}]", s.kind()),
            Converted::Value(v) => v.type_name().to_owned(),
        }
    }

    /// Borrow a populated composite as `T`.
    pub fn downcast_ref<T: Composite>(&self) -> Option<&T> {
        match self {
            Converted::Composite { value, .. } => value.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for Converted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converted::Composite { shape, .. } => f.debug_struct("Composite").field("shape", shape).finish_non_exhaustive(),
            Converted::Sequence(s) => f.debug_tuple("Sequence").field(s).finish(),
            Converted::Value(v) => f.debug_tuple("Value").field(v).finish(),
        }
    }
}

/// The result of transforming one row.
#[derive(Debug)]
pub enum ConvertedRow {
    /// One converted value per shape, in shape order.
    Shaped(Vec<Converted>),
    /// The row width did not match the shape count; the raw values are
    /// returned untouched so the caller can inspect them.
    Unshaped { values: Vec<Value>, shapes: usize },
}

impl ConvertedRow {
    pub fn len(&self) -> usize {
        match self {
            ConvertedRow::Shaped(v) => v.len(),
            ConvertedRow::Unshaped { values, .. } => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_shaped(&self) -> bool {
        matches!(self, ConvertedRow::Shaped(_))
    }

    /// Borrow a converted slot. `None` for an unshaped row or out of range.
    pub fn get(&self, index: usize) -> Option<&Converted> {
        match self {
            ConvertedRow::Shaped(v) => v.get(index),
            ConvertedRow::Unshaped { .. } => None,
        }
    }

    /// The raw values of an unshaped row.
    pub fn raw(&self) -> Option<&[Value]> {
        match self {
            ConvertedRow::Unshaped { values, .. } => Some(values),
            ConvertedRow::Shaped(_) => None,
        }
    }

    /// Take ownership of the raw values of an unshaped row.
    ///
    /// A shaped row has no raw values and yields `None`.
    pub fn into_raw(self) -> Option<Vec<Value>> {
        match self {
            ConvertedRow::Unshaped { values, .. } => Some(values),
            ConvertedRow::Shaped(_) => None,
        }
    }

    /// Move slot `index` out as `T`, leaving `Null` in its place.
    ///
    /// ```rust,ignore
    /// let doc: Document = row.take(0)?;
    /// let score: i64 = row.take(3)?;
    /// ```
    pub fn take<T: FromConverted>(&mut self, index: usize) -> Result<T, MapError> {
        let width = self.len();
        match self {
            ConvertedRow::Shaped(v) => {
                let slot = v.get_mut(index).ok_or(MapError::RowShapeMismatch {
                    width,
                    shapes: index + 1,
                })?;
                let c = std::mem::replace(slot, Converted::Value(Value::Null));
                T::from_converted(index, c)
            }
            ConvertedRow::Unshaped { values, shapes } => Err(MapError::RowShapeMismatch {
                width: values.len(),
                shapes: *shapes,
            }),
        }
    }

    /// The converted slots, or `RowShapeMismatch` for an unshaped row.
    pub fn into_converted(self) -> Result<Vec<Converted>, MapError> {
        match self {
            ConvertedRow::Shaped(v) => Ok(v),
            ConvertedRow::Unshaped { values, shapes } => Err(MapError::RowShapeMismatch {
                width: values.len(),
                shapes,
            }),
        }
    }

    /// Downcast the whole row into a tuple.
    ///
    /// ```rust,ignore
    /// let (doc, cat, tag, n): (Document, Category, TagsWith, i64) = row.extract()?;
    /// ```
    pub fn extract<T: FromConvertedRow>(self) -> Result<T, MapError> {
        T::from_row(self)
    }
}

// ---------------------------------------------------------------------------
// FromConverted: scalars, values, typed vectors
// ---------------------------------------------------------------------------

macro_rules! impl_from_converted_scalar {
    ($t:ty, $pat:ident) => {
        impl FromConverted for $t {
            fn from_converted(index: usize, converted: Converted) -> Result<Self, MapError> {
                match converted {
                    Converted::Value(Value::$pat(v)) => Ok(v),
                    other => Err(MapError::downcast::<$t>(index, &other.describe())),
                }
            }
        }
    };
}

impl_from_converted_scalar!(i64, Integer);
impl_from_converted_scalar!(f64, Float);
impl_from_converted_scalar!(bool, Boolean);
impl_from_converted_scalar!(String, String);

impl FromConverted for Value {
    fn from_converted(index: usize, converted: Converted) -> Result<Self, MapError> {
        match converted {
            Converted::Value(v) => Ok(v),
            other => Err(MapError::downcast::<Value>(index, &other.describe())),
        }
    }
}

macro_rules! impl_from_converted_seq {
    ($t:ty, $pat:ident) => {
        impl FromConverted for Vec<$t> {
            fn from_converted(index: usize, converted: Converted) -> Result<Self, MapError> {
                match converted {
                    Converted::Sequence(Sequence::$pat(v)) => Ok(v),
                    other => Err(MapError::downcast::<Vec<$t>>(index, &other.describe())),
                }
            }
        }
    };
}

impl_from_converted_seq!(i64, Integers);
impl_from_converted_seq!(f64, Floats);
impl_from_converted_seq!(bool, Booleans);
impl_from_converted_seq!(String, Strings);
impl_from_converted_seq!(Value, Values);

/// Unbox a composite slot as `T`. Used by `#[derive(Composite)]`.
pub fn downcast_composite<T: Composite>(index: usize, converted: Converted) -> Result<T, MapError> {
    match converted {
        Converted::Composite { shape, value } => value
            .downcast::<T>()
            .map(|b| *b)
            .map_err(|_| MapError::downcast::<T>(index, shape)),
        other => Err(MapError::downcast::<T>(index, &other.describe())),
    }
}

// ---------------------------------------------------------------------------
// Whole-row extraction into tuples
// ---------------------------------------------------------------------------

/// A tuple of slot types that a whole row can be downcast into.
///
/// Also knows the shapes it expects, so typed reads can build their
/// descriptors from the tuple alone.
pub trait FromConvertedRow: Sized {
    fn shapes() -> Vec<Shape>;

    fn from_row(row: ConvertedRow) -> Result<Self, MapError>;
}

macro_rules! impl_from_converted_row {
    ($len:expr; $($idx:tt => $t:ident),+) => {
        impl<$($t: FromConverted + HasShape),+> FromConvertedRow for ($($t,)+) {
            fn shapes() -> Vec<Shape> {
                vec![$(<$t as HasShape>::shape()),+]
            }

            fn from_row(row: ConvertedRow) -> Result<Self, MapError> {
                let values = row.into_converted()?;
                let width = values.len();
                if width != $len {
                    return Err(MapError::RowShapeMismatch { width, shapes: $len });
                }
                let mut slots = values.into_iter();
                Ok(($(
                    $t::from_converted(
                        $idx,
                        slots.next().ok_or(MapError::RowShapeMismatch { width, shapes: $len })?,
                    )?,
                )+))
            }
        }
    };
}

impl_from_converted_row!(1; 0 => A);
impl_from_converted_row!(2; 0 => A, 1 => B);
impl_from_converted_row!(3; 0 => A, 1 => B, 2 => C);
impl_from_converted_row!(4; 0 => A, 1 => B, 2 => C, 3 => D);
impl_from_converted_row!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_from_converted_row!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
impl_from_converted_row!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
impl_from_converted_row!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);
