//! Low-level Parquet column building.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, RecordBatch, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::error::IoError;
use crate::predictions::PredictionTable;

/// Builds the Arrow schema for prediction output:
/// `step`, `phase`, `observed` (nullable) and `prediction`.
pub(crate) fn build_schema() -> Schema {
    Schema::new(vec![
        Field::new("step", DataType::UInt32, false),
        Field::new("phase", DataType::Utf8, false),
        Field::new("observed", DataType::Float64, true),
        Field::new("prediction", DataType::Float64, false),
    ])
}

/// Converts a [`PredictionTable`] into an Arrow [`RecordBatch`].
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the table has more rows than a
/// `UInt32` step index can address, or [`IoError::Parquet`] if the batch
/// does not match `schema`.
pub(crate) fn predictions_to_record_batch(
    table: &PredictionTable<'_>,
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let n = u32::try_from(table.len()).map_err(|_| IoError::Validation {
        count: 1,
        details: format!("{} rows exceed the u32 step range", table.len()),
    })?;

    let step_col: ArrayRef = Arc::new(UInt32Array::from_iter_values(0..n));
    let phase_col: ArrayRef = Arc::new(StringArray::from_iter_values(
        (0..table.len()).map(|t| table.phase(t).as_str()),
    ));
    let observed_col: ArrayRef = Arc::new(Float64Array::from(
        (0..table.len())
            .map(|t| table.observed(t))
            .collect::<Vec<_>>(),
    ));
    let prediction_col: ArrayRef = Arc::new(Float64Array::from(table.predictions().to_vec()));

    let columns = vec![step_col, phase_col, observed_col, prediction_col];
    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}
