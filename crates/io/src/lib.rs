//! # dlmcast-io
//!
//! Read input series from Parquet and write prediction runs back to
//! Parquet. Bridges the file format into dlmcast's `&[f64]` slice-based
//! APIs.

mod error;
mod parquet_read;
mod parquet_write;
mod predictions;
mod reader;
mod table;
mod writer;

pub use error::IoError;
pub use predictions::{Phase, PredictionTable};
pub use reader::read_columns;
pub use table::SeriesTable;
pub use writer::{Compression, WriterConfig, write_predictions};
