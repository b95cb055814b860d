use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    /// The column could not be cast to the expected type
    #[error("Failed to cast column '{0}' to type {1}")]
    TypeCastError(String, String),

    /// The Arrow kernel produced an error (e.g., malformed CSV rows)
    #[error("Arrow computation error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// CSV reading or IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The source file has no header row to derive a schema from
    #[error("CSV file '{0}' is empty")]
    EmptyFile(String),
}
