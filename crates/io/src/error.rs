//! Error types for dlmcast-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the dlmcast-io crate.
///
/// | Variant | Trigger |
/// |---------|---------|
/// | `FileNotFound` | input path does not exist |
/// | `Parquet` | Arrow/Parquet decode, encode or file I/O failure |
/// | `Validation` | inconsistent table or writer settings |
/// | `MissingColumn` | a requested column is absent from the file |
/// | `UnsupportedType` | a requested column is not numeric |
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Arrow or Parquet libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a requested column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a requested column cannot be read as `f64`.
    #[error("column '{name}' has unsupported type {data_type}")]
    UnsupportedType {
        /// Name of the column.
        name: String,
        /// Arrow data type found in the file.
        data_type: String,
    },
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}
