//! Convenience re-exports for common neomap usage.
//!
//! ```rust
//! use neomap::prelude::*;
//! ```
//!
//! This imports the `Composite` derive and trait, the shape and value
//! types, the converted-row types, the client surface, and the error type.

pub use crate::Composite;
pub use crate::shapes;
pub use neomap_core::traits::{Composite as CompositeTrait, FromConverted};
pub use neomap_core::{
    Converted, ConvertedRow, FromConvertedRow, HasShape, Kind, MapError, Node, Relationship,
    Sequence, Shape, Value,
};
pub use crate::client::Client;
pub use crate::config::ClientConfig;
pub use crate::projection::Projection;
pub use crate::statement::{statement, Statement};
pub use crate::stream::ShapedStream;
