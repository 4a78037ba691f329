//! # colsv - Streaming CSV Serialization for Arrow Columnar Tables
//!
//! `colsv` converts in-memory Arrow columnar data (one or more `RecordBatch`es
//! sharing a schema) into an RFC4180-style CSV byte stream, written
//! incrementally to any [`std::io::Write`] sink.
//!
//! ## Key Features
//!
//! - **Streaming Architecture**: Input is processed in bounded row chunks so
//!   arbitrarily large tables serialize without materializing the full output.
//!
//! - **Chunking-Invariant Output**: The chunk size and the physical batching
//!   of the input affect memory use and throughput only; the emitted bytes are
//!   identical for every positive `batch_size` and for any batch layout with
//!   the same logical rows.
//!
//! - **Exact Quoting Rules**: Text cells and header field names are always
//!   wrapped in quotes with embedded quotes doubled, protecting any delimiter
//!   or line break they contain; numeric cells and null cells are never
//!   quoted. This matches the Arrow CSV writer byte-for-byte.
//!
//! - **Explicit Error Taxonomy**: Invalid options, unconvertible column
//!   types, sink failures, and allocation failures are surfaced as distinct
//!   [`writer::WriterError`] variants with field context.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use arrow::array::{Int64Array, StringArray};
//! use arrow::datatypes::{DataType, Field, Schema};
//! use arrow::record_batch::RecordBatch;
//! use colsv::writer::{write_csv_batch, WriteOptions};
//!
//! let schema = Arc::new(Schema::new(vec![
//!     Field::new("id", DataType::Int64, false),
//!     Field::new("name", DataType::Utf8, true),
//! ]));
//! let batch = RecordBatch::try_new(
//!     schema,
//!     vec![
//!         Arc::new(Int64Array::from(vec![1, 2])),
//!         Arc::new(StringArray::from(vec![Some("a,b"), None])),
//!     ],
//! )?;
//!
//! let mut out = Vec::new();
//! write_csv_batch(&batch, &WriteOptions::default(), &mut out)?;
//! assert_eq!(out, b"\"id\",\"name\"\n1,\"a,b\"\n2,\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Streaming Batches
//!
//! Callers that produce batches incrementally can drive [`writer::CsvWriter`]
//! directly:
//!
//! ```rust,no_run
//! use colsv::writer::{CsvWriter, WriteOptions};
//! # use std::sync::Arc;
//! # use arrow::datatypes::Schema;
//! # let schema = Arc::new(Schema::empty());
//! # let batches: Vec<arrow::record_batch::RecordBatch> = vec![];
//!
//! let sink = std::fs::File::create("table.csv")?;
//! let mut writer = CsvWriter::new(sink, schema, WriteOptions::default())?;
//! for batch in &batches {
//!     writer.write_batch(batch)?;
//! }
//! let stats = writer.finish()?;
//! println!("{stats}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Output Format
//!
//! - Field delimiter: `,` (configurable single ASCII byte); row terminator: `\n`.
//! - Quote character: `"`, doubled when embedded in a quoted cell.
//! - Header row (if enabled): quoted field names, emitted exactly once before
//!   any data row, even for a zero-row table.
//! - Text cells: always quoted; an empty string is `""`.
//! - Numeric and boolean cells: never quoted.
//! - Null cells: the configured null string, always unquoted, even when the
//!   null string itself contains the delimiter or quote character.
//! - Zero rows with the header disabled: zero bytes.
//!
//! ## Supported Column Types
//!
//! | Arrow type | Rendering |
//! |------------|-----------|
//! | Int8 / Int16 / Int32 / Int64 | decimal digits, optional leading `-` |
//! | UInt8 / UInt16 / UInt32 / UInt64 | decimal digits |
//! | Float32 / Float64 | shortest round-trippable decimal |
//! | Utf8 / LargeUtf8 | raw text verbatim (pre-quoting) |
//! | Boolean | `true` / `false` |
//! | Null | the configured null string |
//!
//! Binary columns carry no declared text encoding and are rejected with
//! `InvalidType`; all other Arrow types are rejected with `UnsupportedType`.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::writer::{
        write_csv, write_csv_batch, write_csv_to_path, CsvWriter, WriteOptions, WriterError,
        WriterStats,
    };
}
