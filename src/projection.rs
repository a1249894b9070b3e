//! Mapping result columns onto positional slots.
//!
//! A `neo4rs::Row` exposes its columns by name only, so the order of the
//! slots a row is converted into is fixed here, one `(column, shape)` pair
//! per slot.

use neo4rs::{BoltType, Row};

use neomap_core::{FromConvertedRow, HasShape, MapError, Record, Shape, Value};

/// An ordered list of result columns and the shape each converts into.
///
/// ```rust
/// # use neomap::projection::Projection;
/// let projection = Projection::new()
///     .column::<Vec<i64>>("ids")
///     .column::<String>("name");
/// assert_eq!(projection.keys(), ["ids", "name"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Projection {
    keys: Vec<String>,
    shapes: Vec<Shape>,
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column converted into `T`.
    pub fn column<T: HasShape>(self, key: impl Into<String>) -> Self {
        self.column_shape(key, T::shape())
    }

    /// Append a column with an explicit shape.
    pub fn column_shape(mut self, key: impl Into<String>, shape: Shape) -> Self {
        self.keys.push(key.into());
        self.shapes.push(shape);
        self
    }

    /// Pair `keys` with the slot shapes of the tuple `T`.
    ///
    /// Extra keys or extra tuple slots are kept as they are; the mismatch
    /// then surfaces as an unshaped row at conversion time.
    pub fn of<T: FromConvertedRow>(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Projection {
            keys: keys.into_iter().map(Into::into).collect(),
            shapes: T::shapes(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// View `row` through this projection's column order.
    pub fn row<'a>(&'a self, row: &'a Row) -> KeyedRow<'a> {
        KeyedRow { row, keys: &self.keys }
    }
}

/// A `neo4rs::Row` read in projection order.
///
/// Columns the row does not carry, or that the driver cannot read, are
/// left out, so the record is narrower than its shapes and the row is
/// returned unshaped.
pub struct KeyedRow<'a> {
    row: &'a Row,
    keys: &'a [String],
}

/// Read a value from a [`Row`] by column name.
fn get_value(row: &Row, key: &str) -> Result<BoltType, neo4rs::DeError> {
    row.get(key)
}

impl Record for KeyedRow<'_> {
    fn values(&self) -> Result<Vec<Value>, MapError> {
        let mut out = Vec::with_capacity(self.keys.len());
        for key in self.keys {
            match get_value(self.row, key) {
                Ok(v) => out.push(Value::try_from(v)?),
                Err(e) => log::debug!("column '{key}' left out of row: {e}"),
            }
        }
        Ok(out)
    }
}
