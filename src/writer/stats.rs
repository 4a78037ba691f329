use std::fmt;

/// Statistics from a completed write operation
#[derive(Debug, Clone, Default)]
pub struct WriterStats {
    /// Number of data rows written (excluding the header)
    pub rows_written: usize,
    /// Number of internal chunks converted
    pub chunks_written: usize,
    /// Total bytes handed to the sink, header included
    pub bytes_written: u64,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} rows ({} bytes) in {} chunks",
            self.rows_written, self.bytes_written, self.chunks_written
        )
    }
}
