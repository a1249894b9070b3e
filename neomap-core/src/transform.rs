//! Row transformation: zip a row's values against its shapes.

use crate::convert::{Converted, ConvertedRow};
use crate::error::MapError;
use crate::sequence::build_sequence;
use crate::shape::{Kind, Shape};
use crate::traits::Record;
use crate::value::Value;

/// Convert one slot according to what the value is.
///
/// Entities go to their composite shape, lists to the sequence builder,
/// and everything else passes through unchanged. A `Value` shape
/// (`Scalar(Any)`) asks for the raw value and always passes through.
fn convert_slot(value: Value, shape: &Shape) -> Result<Converted, MapError> {
    if let Shape::Scalar(Kind::Any) = shape {
        return Ok(Converted::Value(value));
    }
    if let Some(props) = value.properties() {
        return match shape {
            Shape::Composite(c) => Ok(Converted::Composite {
                shape: c.name(),
                value: c.build(props)?,
            }),
            other => Err(MapError::NotACompositeDescriptor { shape: other.describe() }),
        };
    }
    match value {
        Value::List(items) => Ok(Converted::Sequence(build_sequence(items, shape)?)),
        other => Ok(Converted::Value(other)),
    }
}

/// Transform one row against its shapes.
///
/// - `None` (no record) stays `None`.
/// - A row whose width differs from `shapes.len()` is returned as
///   [`ConvertedRow::Unshaped`] with its values untouched.
/// - Otherwise every slot is converted in order; the first failure aborts
///   the row and is returned as is.
pub fn transform_row(
    row: Option<Vec<Value>>,
    shapes: &[Shape],
) -> Result<Option<ConvertedRow>, MapError> {
    let Some(values) = row else {
        return Ok(None);
    };
    if values.len() != shapes.len() {
        log::debug!(
            "row width {} does not match {} shapes, returning raw values",
            values.len(),
            shapes.len()
        );
        return Ok(Some(ConvertedRow::Unshaped {
            values,
            shapes: shapes.len(),
        }));
    }
    let mut out = Vec::with_capacity(values.len());
    for (value, shape) in values.into_iter().zip(shapes) {
        log::trace!("converting {} into {}", value.type_name(), shape.describe());
        out.push(convert_slot(value, shape)?);
    }
    Ok(Some(ConvertedRow::Shaped(out)))
}

/// Convert a single, possibly absent, record.
pub fn convert_single<R: Record + ?Sized>(
    record: Option<&R>,
    shapes: &[Shape],
) -> Result<Option<ConvertedRow>, MapError> {
    let row = record.map(|r| r.values()).transpose()?;
    transform_row(row, shapes)
}

/// Convert every record, stopping at the first failure.
///
/// No rows are returned alongside an error.
pub fn convert_many<I>(records: I, shapes: &[Shape]) -> Result<Vec<ConvertedRow>, MapError>
where
    I: IntoIterator,
    I::Item: Record,
{
    let mut out = Vec::new();
    for record in records {
        if let Some(row) = transform_row(Some(record.values()?), shapes)? {
            out.push(row);
        }
    }
    Ok(out)
}
