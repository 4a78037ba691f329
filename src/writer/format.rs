//! Cell formatter: type-dispatched conversion of column values to raw
//! (pre-quoting) cell text.
//!
//! Dispatch is one exhaustive match over [`DataType`], so adding a type to the
//! supported set is a compile-checked change. Integers render as plain
//! decimal, floats as Rust's shortest round-trippable `Display` form, strings
//! verbatim. Binary columns carry no declared text encoding and are rejected;
//! anything outside the closed set fails with `UnsupportedType` naming the
//! field.

use std::fmt::Display;

use arrow::array::{Array, ArrayRef, AsArray, PrimitiveArray};
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, Field, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type,
    Int8Type, UInt16Type, UInt32Type, UInt64Type, UInt8Type,
};

use super::error::WriterError;

/// Raw cells for one column of one chunk.
///
/// `None` marks a null value; the row assembler renders it as the configured
/// null string and skips quoting entirely.
pub(super) type ColumnCells = Vec<Option<String>>;

/// How the assembled row renders this column's non-null cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CellEncoding {
    /// Text cells: always wrapped in quotes, embedded quotes doubled.
    Quoted,
    /// Numeric and boolean cells: cannot contain special characters, emitted
    /// as-is.
    Verbatim,
}

/// One formatted column of a chunk, ready for row assembly.
pub(super) struct FormattedColumn {
    pub(super) cells: ColumnCells,
    pub(super) encoding: CellEncoding,
}

/// Convert every value in `array` to its raw cell text.
pub(super) fn format_column(
    field: &Field,
    array: &ArrayRef,
) -> Result<FormattedColumn, WriterError> {
    match array.data_type() {
        DataType::Int8 => Ok(verbatim(format_primitive(array.as_primitive::<Int8Type>()))),
        DataType::Int16 => Ok(verbatim(format_primitive(array.as_primitive::<Int16Type>()))),
        DataType::Int32 => Ok(verbatim(format_primitive(array.as_primitive::<Int32Type>()))),
        DataType::Int64 => Ok(verbatim(format_primitive(array.as_primitive::<Int64Type>()))),
        DataType::UInt8 => Ok(verbatim(format_primitive(array.as_primitive::<UInt8Type>()))),
        DataType::UInt16 => Ok(verbatim(format_primitive(
            array.as_primitive::<UInt16Type>(),
        ))),
        DataType::UInt32 => Ok(verbatim(format_primitive(
            array.as_primitive::<UInt32Type>(),
        ))),
        DataType::UInt64 => Ok(verbatim(format_primitive(
            array.as_primitive::<UInt64Type>(),
        ))),
        DataType::Float32 => Ok(verbatim(format_primitive(
            array.as_primitive::<Float32Type>(),
        ))),
        DataType::Float64 => Ok(verbatim(format_primitive(
            array.as_primitive::<Float64Type>(),
        ))),
        DataType::Utf8 => {
            let strings = array.as_string::<i32>();
            Ok(quoted(
                (0..strings.len())
                    .map(|i| strings.is_valid(i).then(|| strings.value(i).to_owned()))
                    .collect(),
            ))
        }
        DataType::LargeUtf8 => {
            let strings = array.as_string::<i64>();
            Ok(quoted(
                (0..strings.len())
                    .map(|i| strings.is_valid(i).then(|| strings.value(i).to_owned()))
                    .collect(),
            ))
        }
        DataType::Boolean => {
            let bools = array.as_boolean();
            Ok(verbatim(
                (0..bools.len())
                    .map(|i| bools.is_valid(i).then(|| bools.value(i).to_string()))
                    .collect(),
            ))
        }
        // A Null-typed column has no values at all; every cell is null.
        DataType::Null => Ok(verbatim(vec![None; array.len()])),
        DataType::Binary | DataType::LargeBinary | DataType::FixedSizeBinary(_) => {
            Err(WriterError::InvalidType {
                field: field.name().clone(),
                reason: "binary data has no declared text encoding".into(),
            })
        }
        other => Err(WriterError::UnsupportedType {
            field: field.name().clone(),
            data_type: other.clone(),
        }),
    }
}

fn verbatim(cells: ColumnCells) -> FormattedColumn {
    FormattedColumn {
        cells,
        encoding: CellEncoding::Verbatim,
    }
}

fn quoted(cells: ColumnCells) -> FormattedColumn {
    FormattedColumn {
        cells,
        encoding: CellEncoding::Quoted,
    }
}

/// Render a primitive column through the native type's `Display` impl.
///
/// For `f32`/`f64` this is the shortest decimal form that round-trips, which
/// is exactly the output contract for floating-point cells.
fn format_primitive<T>(array: &PrimitiveArray<T>) -> ColumnCells
where
    T: ArrowPrimitiveType,
    T::Native: Display,
{
    (0..array.len())
        .map(|i| array.is_valid(i).then(|| array.value(i).to_string()))
        .collect()
}
