//! # CSV Writer Module
//!
//! This module provides the core functionality for serializing Arrow columnar
//! data to CSV.
//!
//! ## Design Principles
//!
//! 1. **Streaming Architecture**: Data is written in bounded row chunks to
//!    handle large tables without materializing the whole output in memory.
//!
//! 2. **Chunking Is Invisible**: Chunk boundaries are an internal
//!    memory/throughput control. Output bytes are identical for every positive
//!    chunk size and for any physical batching of the same logical rows.
//!
//! 3. **Fail Whole, Never Partial**: Any conversion or sink failure aborts the
//!    call. Bytes already handed to the sink stay where they are, but no
//!    partial row is ever emitted after a failure.
//!
//! 4. **Closed Type Dispatch**: Supported column types are handled through one
//!    exhaustive match; anything outside the set fails with a typed error
//!    naming the offending field.

mod chunk;
mod config;
mod error;
mod format;
mod quote;
mod stats;
mod writer_impl;


pub use config::{WriteOptions, QUOTE};
pub use error::WriterError;
pub use stats::WriterStats;
pub use writer_impl::{write_csv, write_csv_batch, write_csv_to_path, CsvWriter};
