use arrow::datatypes::DataType;

/// Errors that can occur during writing
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// Malformed configuration or input (e.g. non-positive batch size,
    /// batches with mismatched schemas)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A column's type or encoding cannot be converted to text
    #[error("invalid type in column '{field}': {reason}")]
    InvalidType {
        /// Name of the offending field.
        field: String,
        /// Why the column cannot be rendered.
        reason: String,
    },

    /// A column's type is outside the supported set
    #[error("unsupported type {data_type} in column '{field}'")]
    UnsupportedType {
        /// Name of the offending field.
        field: String,
        /// The unsupported Arrow data type.
        data_type: DataType,
    },

    /// The destination sink rejected or failed a write or flush
    #[error("sink write failure: {0}")]
    Sink(#[from] std::io::Error),

    /// Memory could not be obtained for an internal buffer
    #[error("allocation failure: {0}")]
    Allocation(String),

    /// Error from the Arrow library during array operations
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
