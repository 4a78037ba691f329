use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::slice;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use super::chunk::RowChunks;
use super::config::WriteOptions;
use super::error::WriterError;
use super::format::{format_column, CellEncoding, FormattedColumn};
use super::quote::push_quoted;
use super::stats::WriterStats;

/// Streaming CSV writer over an arbitrary byte sink
///
/// The writer owns the sink for the duration of the call. Batches are
/// converted in row chunks of at most `options.batch_size` rows; the header
/// (when enabled) is emitted exactly once before the first data byte, or by
/// [`finish`](CsvWriter::finish) when no rows were ever written.
pub struct CsvWriter<W: Write> {
    sink: W,
    schema: SchemaRef,
    options: WriteOptions,
    header_written: bool,
    stats: WriterStats,
}

impl<W: Write> CsvWriter<W> {
    /// Create a new writer to any `Write` implementation.
    ///
    /// Fails with `InvalidArgument` if the options are malformed. Nothing is
    /// written to the sink until the first batch arrives or the writer is
    /// finished.
    pub fn new(sink: W, schema: SchemaRef, options: WriteOptions) -> Result<Self, WriterError> {
        options.validate()?;
        log::debug!(
            "csv writer created: {} fields, batch_size={}, header={}",
            schema.fields().len(),
            options.batch_size,
            options.include_header
        );
        Ok(Self {
            sink,
            schema,
            options,
            header_written: false,
            stats: WriterStats::default(),
        })
    }

    /// Serialize one batch, splitting it into row chunks internally.
    ///
    /// The batch must carry the schema the writer was created with.
    pub fn write_batch(&mut self, batch: &RecordBatch) -> Result<(), WriterError> {
        if batch.schema().fields() != self.schema.fields() {
            return Err(WriterError::InvalidArgument(format!(
                "batch schema does not match writer schema (expected [{}])",
                self.schema
                    .fields()
                    .iter()
                    .map(|f| f.name().as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
        self.ensure_header()?;
        for chunk in RowChunks::new(slice::from_ref(batch), self.options.batch_size) {
            self.encode_chunk(&chunk)?;
        }
        Ok(())
    }

    /// Emit the header (if still pending), flush the sink, and return the
    /// write statistics.
    ///
    /// Must be called to complete the stream: a zero-row write with the
    /// header enabled produces its only bytes here.
    pub fn finish(mut self) -> Result<WriterStats, WriterError> {
        self.ensure_header()?;
        self.sink.flush()?;
        log::debug!("csv writer finished: {}", self.stats);
        Ok(self.stats)
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &WriterStats {
        &self.stats
    }

    fn ensure_header(&mut self) -> Result<(), WriterError> {
        if self.header_written {
            return Ok(());
        }
        self.header_written = true;
        if !self.options.include_header {
            return Ok(());
        }
        let mut buf = Vec::new();
        let estimate: usize = self
            .schema
            .fields()
            .iter()
            .map(|f| f.name().len() + 3)
            .sum();
        try_reserve(&mut buf, estimate + 1)?;
        for (col, field) in self.schema.fields().iter().enumerate() {
            if col > 0 {
                buf.push(self.options.delimiter);
            }
            // Field names are always quoted, like text data cells.
            push_quoted(field.name(), &mut buf);
        }
        buf.push(b'\n');
        self.append(&buf)
    }

    /// Convert one chunk column-by-column, assemble its rows, and hand the
    /// encoded bytes to the sink in a single write.
    ///
    /// All conversion happens before any byte of the chunk is written, so a
    /// formatting failure never leaves a partial row behind.
    fn encode_chunk(&mut self, chunk: &RecordBatch) -> Result<(), WriterError> {
        let columns: Vec<FormattedColumn> = self
            .schema
            .fields()
            .iter()
            .zip(chunk.columns())
            .map(|(field, array)| format_column(field, array))
            .collect::<Result<_, _>>()?;

        let rows = chunk.num_rows();
        let mut buf = Vec::new();
        try_reserve(&mut buf, estimate_chunk_bytes(&columns, rows, &self.options))?;

        for row in 0..rows {
            for (col, column) in columns.iter().enumerate() {
                if col > 0 {
                    buf.push(self.options.delimiter);
                }
                match (&column.cells[row], column.encoding) {
                    // Null cells bypass the quoting engine entirely, even if
                    // the null string contains the delimiter or quotes.
                    (None, _) => buf.extend_from_slice(self.options.null_string.as_bytes()),
                    (Some(raw), CellEncoding::Quoted) => push_quoted(raw, &mut buf),
                    (Some(raw), CellEncoding::Verbatim) => {
                        buf.extend_from_slice(raw.as_bytes())
                    }
                }
            }
            buf.push(b'\n');
        }

        self.append(&buf)?;
        self.stats.rows_written += rows;
        self.stats.chunks_written += 1;
        log::trace!("wrote chunk: {} rows, {} bytes", rows, buf.len());
        Ok(())
    }

    fn append(&mut self, bytes: &[u8]) -> Result<(), WriterError> {
        self.sink.write_all(bytes)?;
        self.stats.bytes_written += bytes.len() as u64;
        Ok(())
    }
}

/// Reserve `additional` bytes up front, surfacing exhaustion as a typed error
/// instead of aborting the process.
fn try_reserve(buf: &mut Vec<u8>, additional: usize) -> Result<(), WriterError> {
    buf.try_reserve(additional)
        .map_err(|e| WriterError::Allocation(e.to_string()))
}

fn estimate_chunk_bytes(columns: &[FormattedColumn], rows: usize, options: &WriteOptions) -> usize {
    let cell_bytes: usize = columns
        .iter()
        .flat_map(|column| column.cells.iter())
        .map(|cell| match cell {
            // +3 leaves room for the delimiter and surrounding quotes; quote
            // doubling can still overshoot, which only costs a regrow.
            Some(raw) => raw.len() + 3,
            None => options.null_string.len() + 1,
        })
        .sum();
    cell_bytes + rows
}

/// Serialize a table presented as a sequence of batches sharing one schema.
///
/// This is the single-call entry point: it writes the optional header, all
/// rows in order, flushes the sink, and returns the statistics. The physical
/// split of rows across `batches` never affects the output bytes.
pub fn write_csv<W: Write>(
    batches: &[RecordBatch],
    options: &WriteOptions,
    sink: W,
) -> Result<WriterStats, WriterError> {
    let first = batches.first().ok_or_else(|| {
        WriterError::InvalidArgument("at least one batch must be provided for CSV export".into())
    })?;
    let mut writer = CsvWriter::new(sink, first.schema(), options.clone())?;
    for batch in batches {
        writer.write_batch(batch)?;
    }
    writer.finish()
}

/// Serialize a single contiguous batch.
pub fn write_csv_batch<W: Write>(
    batch: &RecordBatch,
    options: &WriteOptions,
    sink: W,
) -> Result<WriterStats, WriterError> {
    write_csv(slice::from_ref(batch), options, sink)
}

/// Serialize batches to a file path, buffering writes to the file.
pub fn write_csv_to_path<P: AsRef<Path>>(
    path: P,
    batches: &[RecordBatch],
    options: &WriteOptions,
) -> Result<WriterStats, WriterError> {
    let file = File::create(path)?;
    write_csv(batches, options, BufWriter::new(file))
}
