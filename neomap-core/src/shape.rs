//! Shape descriptors: what a caller wants each result slot converted into.
//!
//! A [`Shape`] is built fresh for every call, usually through
//! [`Shape::of`] or the [`shapes!`](crate::shapes) macro, and describes one
//! positional slot of a row.

use std::any::Any;
use std::fmt;

use crate::error::MapError;
use crate::populate::populate;
use crate::traits::Composite;
use crate::value::{PropertyMap, Value};

/// The kind of a target slot, field, or sequence element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Float,
    Boolean,
    String,
    Bytes,
    List,
    Map,
    Temporal,
    Spatial,
    /// Accepts any dynamic value unchanged.
    Any,
}

impl Kind {
    /// Kinds the coercion engine can produce: 64-bit integer, boolean, string.
    pub fn is_primitive(self) -> bool {
        matches!(self, Kind::Integer | Kind::Boolean | Kind::String)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Integer => "Integer",
            Kind::Float => "Float",
            Kind::Boolean => "Boolean",
            Kind::String => "String",
            Kind::Bytes => "Bytes",
            Kind::List => "List",
            Kind::Map => "Map",
            Kind::Temporal => "Temporal",
            Kind::Spatial => "Spatial",
            Kind::Any => "Any",
        };
        f.write_str(name)
    }
}

/// Output of the coercion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl Primitive {
    /// The zero value of a primitive kind: `0`, `false`, or `""`.
    pub fn zero(kind: Kind) -> Result<Self, MapError> {
        match kind {
            Kind::Integer => Ok(Primitive::Integer(0)),
            Kind::Boolean => Ok(Primitive::Boolean(false)),
            Kind::String => Ok(Primitive::String(String::new())),
            other => Err(MapError::UnsupportedTypeKind { kind: other }),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Primitive::Integer(_) => Kind::Integer,
            Primitive::Boolean(_) => Kind::Boolean,
            Primitive::String(_) => Kind::String,
        }
    }
}

/// One declared field of a composite shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Exact property name the field is read from.
    pub name: &'static str,
    pub kind: Kind,
    /// `false` for fields excluded with `#[neomap(skip)]`.
    pub settable: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        FieldSpec { name, kind, settable: true }
    }

    pub const fn skipped(name: &'static str, kind: Kind) -> Self {
        FieldSpec { name, kind, settable: false }
    }
}

type BuildFn = fn(&PropertyMap) -> Result<Box<dyn Any + Send>, MapError>;

/// Type-erased descriptor of a composite (struct-like) target.
///
/// Holds the static field table of a [`Composite`] type and a builder
/// monomorphised for it, so a heterogeneous list of shapes can still
/// allocate concrete instances.
#[derive(Clone, Copy)]
pub struct CompositeShape {
    name: &'static str,
    fields: &'static [FieldSpec],
    build: BuildFn,
}

impl CompositeShape {
    pub fn of<T: Composite>() -> Self {
        CompositeShape {
            name: T::NAME,
            fields: T::FIELDS,
            build: |props| populate::<T>(props).map(|v| Box::new(v) as Box<dyn Any + Send>),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Allocate and populate a fresh instance from a property mapping.
    pub fn build(&self, props: &PropertyMap) -> Result<Box<dyn Any + Send>, MapError> {
        (self.build)(props)
    }
}

impl fmt::Debug for CompositeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeShape")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Descriptor for one positional result slot.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// Struct-like target populated from an entity's properties.
    Composite(CompositeShape),
    /// Variable-length sequence with the given element kind.
    Sequence(Kind),
    /// Scalar target. Advisory only: scalars pass through unchanged.
    Scalar(Kind),
}

impl Shape {
    /// The shape of a Rust type.
    ///
    /// ```rust
    /// # use neomap_core::shape::{Kind, Shape};
    /// assert!(matches!(Shape::of::<i64>(), Shape::Scalar(Kind::Integer)));
    /// assert!(matches!(Shape::of::<Vec<String>>(), Shape::Sequence(Kind::String)));
    /// ```
    pub fn of<T: HasShape>() -> Self {
        T::shape()
    }

    pub fn composite<T: Composite>() -> Self {
        Shape::Composite(CompositeShape::of::<T>())
    }

    /// Short description used in errors and logs.
    pub fn describe(&self) -> String {
        match self {
            Shape::Composite(c) => c.name.to_owned(),
            Shape::Sequence(k) => format!("[{k}]"),
            Shape::Scalar(k) => k.to_string(),
        }
    }
}

/// Rust types that can describe their own [`Shape`].
///
/// Implemented for the scalar types, `Vec<E>` of sequence elements, and
/// by `#[derive(Composite)]`.
pub trait HasShape {
    fn shape() -> Shape;
}

/// Element types a [`Shape::Sequence`] can be built from.
pub trait SequenceElement {
    const KIND: Kind;
}

macro_rules! impl_scalar_shape {
    ($t:ty, $kind:ident) => {
        impl HasShape for $t {
            fn shape() -> Shape {
                Shape::Scalar(Kind::$kind)
            }
        }

        impl SequenceElement for $t {
            const KIND: Kind = Kind::$kind;
        }
    };
}

impl_scalar_shape!(i64, Integer);
impl_scalar_shape!(f64, Float);
impl_scalar_shape!(bool, Boolean);
impl_scalar_shape!(String, String);
impl_scalar_shape!(Value, Any);

impl<E: SequenceElement> HasShape for Vec<E> {
    fn shape() -> Shape {
        Shape::Sequence(E::KIND)
    }
}

/// Build a `Vec<Shape>` from a list of types.
///
/// ```rust,ignore
/// let shapes = shapes![Document, Category, TagsWith, i64, Vec<String>];
/// ```
#[macro_export]
macro_rules! shapes {
    ($($t:ty),* $(,)?) => {
        vec![$(<$t as $crate::shape::HasShape>::shape()),*]
    };
}
