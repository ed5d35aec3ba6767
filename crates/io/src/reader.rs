//! High-level Parquet input.

use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::parquet_read;
use crate::table::SeriesTable;

/// Reads the named numeric columns of a Parquet file into a [`SeriesTable`].
///
/// Any integer or floating-point column type is accepted and widened to
/// `f64`. Null cells become NaN; use a null check before fitting.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::MissingColumn`] | a name is absent from the file schema |
/// | [`IoError::UnsupportedType`] | a column is not numeric |
/// | [`IoError::Validation`] | a name is requested twice |
/// | [`IoError::Parquet`] | decoding fails |
pub fn read_columns(path: &Path, names: &[&str]) -> Result<SeriesTable, IoError> {
    let (schema, batches) = parquet_read::read_batches(path)?;
    debug!(
        path = %path.display(),
        batches = batches.len(),
        fields = schema.fields().len(),
        "parquet opened"
    );

    for name in names {
        parquet_read::check_column(&schema, name, path)?;
    }

    let columns = names
        .iter()
        .map(|&name| Ok((name.to_string(), parquet_read::extract_column(&batches, name)?)))
        .collect::<Result<Vec<_>, IoError>>()?;

    let table = SeriesTable::new(columns)?;
    info!(
        path = %path.display(),
        columns = names.len(),
        rows = table.n_rows(),
        "series loaded"
    );
    Ok(table)
}
