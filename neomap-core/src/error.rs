
//! Error types for neomap conversions.

use thiserror::Error;

use crate::shape::Kind;

/// Unified error type for all neomap operations.
///
/// Every sub-converter returns this type and the row transformer hands it
/// back unchanged, so the variant a caller sees names the exact slot or
/// field that could not be converted:
///
/// ```text
/// type mismatch on field 'ID': expected String, got Boolean
/// ```
#[derive(Error, Debug)]
pub enum MapError {
    /// A target descriptor names a kind the coercion engine cannot produce.
    #[error("unsupported type kind: {kind}")]
    UnsupportedTypeKind { kind: Kind },

    /// A composite declares a field whose kind cannot be populated.
    #[error("unsupported field kind: {shape}::{field} is {kind}")]
    UnsupportedFieldKind {
        shape: String,
        field: String,
        kind: Kind,
    },

    /// A dynamic value did not match the primitive kind of its target field.
    #[error("type mismatch on field '{field}': expected {expected}, got {got}")]
    TypeMismatch {
        field: String,
        expected: Kind,
        got: String,
    },

    /// A list value was paired with a descriptor that is not a sequence.
    #[error("expected a sequence descriptor, got {shape}")]
    NotASequenceDescriptor { shape: String },

    /// A node or relationship was paired with a descriptor that is not a composite.
    #[error("expected a composite descriptor, got {shape}")]
    NotACompositeDescriptor { shape: String },

    /// A list item could not be assigned to the sequence element kind.
    #[error("sequence element {index}: expected {expected}, got {got}")]
    ElementMismatch {
        index: usize,
        expected: Kind,
        got: String,
    },

    /// A positional read was attempted on a row that fell back to raw values.
    #[error("row has {width} values but {shapes} shapes were requested")]
    RowShapeMismatch { width: usize, shapes: usize },

    /// A converted slot did not hold the requested Rust type.
    #[error("slot {index}: cannot read {found} as {expected}")]
    Downcast {
        index: usize,
        expected: &'static str,
        found: String,
    },

    /// The driver handed back a value that has no faithful `Value` form.
    #[error("mapping error: {0}")]
    Mapping(String),

    /// Client configuration could not be assembled.
    #[error("configuration error: {0}")]
    Config(String),

    /// A `neo4rs::Error` from the underlying driver.
    #[error("neo4j error: {0}")]
    Neo4j(#[from] neo4rs::Error),
}

impl MapError {
    /// Create a [`TypeMismatch`](MapError::TypeMismatch) error.
    pub fn type_mismatch(field: &str, expected: Kind, got: &str) -> Self {
        MapError::TypeMismatch {
            field: field.to_owned(),
            expected,
            got: got.to_owned(),
        }
    }

    /// Create an [`UnsupportedFieldKind`](MapError::UnsupportedFieldKind) error.
    pub fn unsupported_field_kind(shape: &str, field: &str, kind: Kind) -> Self {
        MapError::UnsupportedFieldKind {
            shape: shape.to_owned(),
            field: field.to_owned(),
            kind,
        }
    }

    /// Create an [`ElementMismatch`](MapError::ElementMismatch) error.
    pub fn element_mismatch(index: usize, expected: Kind, got: &str) -> Self {
        MapError::ElementMismatch {
            index,
            expected,
            got: got.to_owned(),
        }
    }

    /// Create a [`Downcast`](MapError::Downcast) error.
    pub fn downcast<T>(index: usize, found: &str) -> Self {
        MapError::Downcast {
            index,
            expected: std::any::type_name::<T>(),
            found: found.to_owned(),
        }
    }
}
