//! Integration tests: read input series and write predictions through
//! Parquet files on disk.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, AsArray, Float64Array, Int64Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Float64Type, Schema, UInt32Type};
use dlmcast_io::{
    Compression, IoError, PredictionTable, WriterConfig, read_columns, write_predictions,
};
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

/// Writes a small sales-style input file with an integer target, a float
/// regressor with one null, and a string id column.
fn write_input(path: &Path) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("sales", DataType::Int64, false),
        Field::new("promo", DataType::Float64, true),
        Field::new("store", DataType::Utf8, false),
    ]));
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(vec![3, 0, 4, 7, 2])),
        Arc::new(Float64Array::from(vec![
            Some(0.0),
            Some(1.0),
            None,
            Some(1.0),
            Some(0.0),
        ])),
        Arc::new(StringArray::from(vec!["s1"; 5])),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).expect("valid batch");
    let file = std::fs::File::create(path).expect("create input");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("writer");
    writer.write(&batch).expect("write batch");
    writer.close().expect("close");
}

#[test]
fn read_selected_columns() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("input.parquet");
    write_input(&path);

    let table = read_columns(&path, &["sales", "promo"]).expect("read succeeds");
    assert_eq!(table.n_rows(), 5);
    assert_eq!(table.names(), &["sales".to_string(), "promo".to_string()]);
    assert_eq!(table.column("sales"), Some(&[3.0, 0.0, 4.0, 7.0, 2.0][..]));

    let promo = table.column("promo").expect("promo present");
    assert!(promo[2].is_nan());
    assert_eq!(promo[3], 1.0);
}

#[test]
fn read_errors() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("input.parquet");
    write_input(&path);

    assert!(matches!(
        read_columns(&path, &["units"]).unwrap_err(),
        IoError::MissingColumn { name, .. } if name == "units"
    ));
    assert!(matches!(
        read_columns(&path, &["store"]).unwrap_err(),
        IoError::UnsupportedType { .. }
    ));
    assert!(matches!(
        read_columns(&path, &["sales", "sales"]).unwrap_err(),
        IoError::Validation { .. }
    ));
    assert!(matches!(
        read_columns(&dir.path().join("absent.parquet"), &["sales"]).unwrap_err(),
        IoError::FileNotFound { .. }
    ));
}

#[test]
fn write_predictions_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("predictions.parquet");

    let observed = [3.0, 0.0, 4.0, 7.0];
    let predictions = [0.0, 3.0, 1.0, 3.0, 5.0, 5.0];
    let table = PredictionTable::new(&observed, &predictions, 3).expect("valid table");

    for compression in [Compression::None, Compression::Snappy, Compression::Zstd] {
        let config = WriterConfig::default().with_compression(compression);
        write_predictions(&path, &table, &config).expect("write succeeds");

        let file = std::fs::File::open(&path).expect("open output");
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .expect("builder")
            .build()
            .expect("reader");
        let batches: Vec<RecordBatch> = reader.collect::<Result<_, _>>().expect("batches");
        assert_eq!(batches.len(), 1);
        let batch = &batches[0];
        assert_eq!(batch.num_rows(), 6);

        let step = batch.column(0).as_primitive::<UInt32Type>();
        assert_eq!(step.values().to_vec(), vec![0, 1, 2, 3, 4, 5]);

        let phase = batch.column(1).as_string::<i32>();
        let phases: Vec<&str> = (0..6).map(|i| phase.value(i)).collect();
        assert_eq!(phases, ["fit", "fit", "fit", "forecast", "forecast", "forecast"]);

        // Held-out observation at step 3 is still recorded; steps 4 and 5
        // have no observation.
        let obs = batch.column(2).as_primitive::<Float64Type>();
        assert_eq!(obs.value(3), 7.0);
        assert!(obs.is_null(4));
        assert!(obs.is_null(5));

        let pred = batch.column(3).as_primitive::<Float64Type>();
        assert_eq!(pred.values().to_vec(), predictions.to_vec());
    }
}

#[test]
fn written_predictions_are_readable_as_series() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("predictions.parquet");

    let predictions = [1.0, 2.0, 2.0];
    let table = PredictionTable::new(&[1.0, 2.0], &predictions, 2).expect("valid table");
    write_predictions(&path, &table, &WriterConfig::default()).expect("write succeeds");

    let back = read_columns(&path, &["prediction", "observed"]).expect("read succeeds");
    assert_eq!(back.column("prediction"), Some(&predictions[..]));
    assert!(back.column("observed").expect("observed")[2].is_nan());
}

#[test]
fn invalid_writer_config_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("out.parquet");
    let table = PredictionTable::new(&[], &[1.0], 0).expect("valid table");
    let err = write_predictions(
        &path,
        &table,
        &WriterConfig::default().with_row_group_size(0),
    )
    .unwrap_err();
    assert!(matches!(err, IoError::Validation { .. }));
    assert!(!path.exists());
}
