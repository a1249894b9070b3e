
//! Core value model, shape descriptors, and the record-to-type conversion
//! engine for neomap.
//!
//! This crate is not meant to be used directly — use the [`neomap`] facade
//! crate instead, which re-exports everything you need.
//!
//! The engine is layered leaves first:
//!
//! 1. [`coerce`] — one dynamic value into a primitive kind.
//! 2. [`populate`] — a property mapping into a [`Composite`] instance.
//! 3. [`sequence`] — a dynamic list into a typed [`Sequence`].
//! 4. [`transform`] — a whole row against its [`Shape`]s.

pub mod error;
pub mod traits;

pub mod coerce;
pub mod convert;
pub mod populate;
pub mod record;
pub mod sequence;
pub mod shape;
pub mod transform;
pub mod value;

pub use convert::{Converted, ConvertedRow, FromConvertedRow};
pub use error::MapError;
pub use sequence::Sequence;
pub use shape::{FieldSpec, HasShape, Kind, Primitive, Shape};
pub use traits::{Composite, FieldValue, FromConverted, Record};
pub use transform::{convert_many, convert_single, transform_row};
pub use value::{Node, Path, Point2D, Point3D, PropertyMap, Relationship, Value};
