//! Low-level Parquet reading and column extraction.

use std::path::Path;

use arrow::array::{AsArray, RecordBatch};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, SchemaRef};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;

/// Reads the schema and all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> = reader.collect::<Result<Vec<_>, _>>()?;

    Ok((schema, batches))
}

/// Checks that `name` exists in `schema` with a numeric type.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] or [`IoError::UnsupportedType`].
pub(crate) fn check_column(schema: &SchemaRef, name: &str, path: &Path) -> Result<(), IoError> {
    let field = schema
        .field_with_name(name)
        .map_err(|_| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })?;
    if !field.data_type().is_numeric() {
        return Err(IoError::UnsupportedType {
            name: name.to_string(),
            data_type: field.data_type().to_string(),
        });
    }
    Ok(())
}

/// Concatenates column `name` across `batches` as `f64`, mapping nulls to
/// NaN.
///
/// The column must already have passed [`check_column`].
pub(crate) fn extract_column(batches: &[RecordBatch], name: &str) -> Result<Vec<f64>, IoError> {
    let total: usize = batches.iter().map(RecordBatch::num_rows).sum();
    let mut out = Vec::with_capacity(total);

    for batch in batches {
        let Some(col) = batch.column_by_name(name) else {
            return Err(IoError::Parquet {
                reason: format!("column '{name}' missing from record batch"),
            });
        };
        let col = cast(col, &DataType::Float64)?;
        let values = col.as_primitive::<Float64Type>();
        out.extend(values.iter().map(|v| v.unwrap_or(f64::NAN)));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};

    fn batch() -> RecordBatch {
        let schema = Schema::new(vec![
            Field::new("sales", DataType::Int64, true),
            Field::new("price", DataType::Float64, false),
            Field::new("store", DataType::Utf8, false),
        ]);
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from(vec![Some(3), None, Some(5)])),
            Arc::new(Float64Array::from(vec![1.5, 2.5, 3.5])),
            Arc::new(StringArray::from(vec!["a", "b", "c"])),
        ];
        RecordBatch::try_new(Arc::new(schema), columns).unwrap()
    }

    #[test]
    fn extracts_int_column_with_nulls() {
        let b = batch();
        let sales = extract_column(&[b.clone(), b], "sales").unwrap();
        assert_eq!(sales.len(), 6);
        assert_eq!(sales[0], 3.0);
        assert!(sales[1].is_nan());
        assert_eq!(sales[5], 5.0);
    }

    #[test]
    fn extracts_float_column() {
        let price = extract_column(&[batch()], "price").unwrap();
        assert_eq!(price, vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn check_column_reports_missing_and_unsupported() {
        let schema = batch().schema();
        let path = Path::new("in.parquet");
        assert!(check_column(&schema, "sales", path).is_ok());
        assert!(matches!(
            check_column(&schema, "units", path).unwrap_err(),
            IoError::MissingColumn { .. }
        ));
        assert!(matches!(
            check_column(&schema, "store", path).unwrap_err(),
            IoError::UnsupportedType { .. }
        ));
    }

    #[test]
    fn read_batches_missing_file() {
        let err = read_batches(Path::new("/nonexistent/input.parquet")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }
}
