use super::error::WriterError;

/// The CSV quote character. Fixed; only the delimiter is configurable.
pub const QUOTE: u8 = b'"';

/// Default number of rows converted per internal chunk.
const DEFAULT_BATCH_SIZE: usize = 1024;

/// Configuration for a CSV write call
///
/// Options are validated once when a writer is constructed and are immutable
/// for the duration of the call.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Number of rows converted per internal chunk.
    ///
    /// Affects only memory use and throughput, never the output bytes.
    /// Must be positive.
    pub batch_size: usize,

    /// Write a header row of field names before any data rows when true.
    pub include_header: bool,

    /// Delimiter byte between cells within a row. Must be an ASCII byte
    /// other than the quote character or a line break.
    pub delimiter: u8,

    /// Text emitted for a null cell.
    ///
    /// Always written unquoted, even if it contains the delimiter or quote
    /// character. Callers choosing an unusual null string must account for
    /// that in downstream readers.
    pub null_string: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            include_header: true,
            delimiter: b',',
            null_string: String::new(),
        }
    }
}

impl WriteOptions {
    /// Options producing tab-separated output.
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    /// Set the chunk size (builder style).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Enable or disable the header row (builder style).
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Set the cell delimiter (builder style).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the text emitted for null cells (builder style).
    pub fn with_null_string<S: Into<String>>(mut self, null_string: S) -> Self {
        self.null_string = null_string.into();
        self
    }

    /// Check the options for internal consistency.
    ///
    /// Called by the writer constructor; exposed for callers that want to
    /// validate configuration up front.
    pub fn validate(&self) -> Result<(), WriterError> {
        if self.batch_size == 0 {
            return Err(WriterError::InvalidArgument(
                "batch_size must be a positive number of rows".into(),
            ));
        }
        if !self.delimiter.is_ascii() {
            return Err(WriterError::InvalidArgument(format!(
                "delimiter must be an ASCII byte, got 0x{:02x}",
                self.delimiter
            )));
        }
        if matches!(self.delimiter, QUOTE | b'\n' | b'\r') {
            return Err(WriterError::InvalidArgument(format!(
                "delimiter may not be the quote character or a line break, got 0x{:02x}",
                self.delimiter
            )));
        }
        Ok(())
    }
}
