//! Forecast command: fit the DLM to an input series and write predictions.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use dlmcast_dlm::Forecast;
use dlmcast_io::{PredictionTable, SeriesTable, WriterConfig, read_columns, write_predictions};
use dlmcast_scale::{has_nulls, mean_absolute_error, root_mean_squared_error, scale};

use crate::cli::ForecastArgs;
use crate::config::{self, ColumnsToml, DlmcastConfig};
use crate::convert;

/// Run the forecast pipeline.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();

    // 1. Load config and merge CLI overrides
    let mut config = config::load(&args.config)?;
    if let Some(pred) = args.pred {
        config.forecast.pred = pred;
    }
    if let Some(cut) = args.cut {
        config.forecast.cut = cut;
    }
    if args.output.is_some() {
        config.io.output = args.output;
    }

    // 2. Resolve paths
    let input = config
        .io
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config"))?;
    let output = config.io.output.as_ref().ok_or_else(|| {
        anyhow::anyhow!("no output path: set [io].output in config or use --output")
    })?;

    // 3. Build configs from TOML
    let hyper = convert::build_hyperparameters(&config.model)?;
    let base_phi = convert::build_base_phi(&config.model);
    let spec = convert::build_forecast_spec(&config.forecast)?;
    let writer_cfg = convert::build_writer_config(&config.io)?;

    // 4. Read input series
    info!(path = %input.display(), "reading input series");
    let table = read_columns(input, &config.io.columns.selected())
        .with_context(|| format!("failed to read Parquet: {}", input.display()))?;
    if has_nulls(table.columns()) {
        bail!(
            "input has missing values in {}; run `dlmcast check` for details",
            null_columns(&table).join(", ")
        );
    }

    let (x, y, z) = select_series(&table, &config)?;

    // 5. Fit and forecast
    let forecast = spec
        .run(&x, &hyper, &base_phi, &y, &z)
        .context("forecast failed")?;
    report_metrics(&x, &forecast);

    // 6. Write predictions
    let table = PredictionTable::new(&x, forecast.predictions(), forecast.fit_len())?;
    write_output(output, &table, &writer_cfg)?;

    info!(
        fitted = forecast.fit_len(),
        forecast = forecast.horizon() - forecast.fit_len(),
        "forecast complete"
    );
    Ok(())
}

/// Names of the table columns holding at least one missing value.
fn null_columns(table: &SeriesTable) -> Vec<&str> {
    table
        .names()
        .iter()
        .zip(table.columns())
        .filter(|(_, col)| has_nulls(std::slice::from_ref(*col)))
        .map(|(name, _)| name.as_str())
        .collect()
}

/// Extracts `x` and the optional auxiliary series, scaling the auxiliaries
/// onto `[0, 1]` when `[forecast].rescale` is set. Absent auxiliaries are
/// returned empty.
fn select_series(
    table: &SeriesTable,
    config: &DlmcastConfig,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let ColumnsToml { x, y, z } = &config.io.columns;
    let column = |name: &str| -> Result<Vec<f64>> {
        table
            .column(name)
            .map(<[f64]>::to_vec)
            .ok_or_else(|| anyhow::anyhow!("column {name:?} missing from loaded table"))
    };

    let primary = column(x.as_str())?;
    if primary.is_empty() {
        bail!("input column {x:?} is empty");
    }

    let mut aux = [Vec::new(), Vec::new()];
    for (slot, name) in aux.iter_mut().zip([y, z]) {
        let Some(name) = name else {
            continue;
        };
        let values = column(name.as_str())?;
        *slot = if config.forecast.rescale {
            let (scaled, scaler) =
                scale(&values).with_context(|| format!("failed to rescale column {name:?}"))?;
            info!(
                column = %name,
                min = scaler.min(),
                max = scaler.max(),
                "rescaled auxiliary series"
            );
            scaled
        } else {
            values
        };
    }

    let [y, z] = aux;
    Ok((primary, y, z))
}

/// Logs in-sample fit error and, when observations were held out, the
/// error of the forecast over the held-out tail.
fn report_metrics(x: &[f64], forecast: &Forecast) {
    let fit_len = forecast.fit_len();
    if fit_len > 0 {
        info!(
            mae = mean_absolute_error(&x[..fit_len], forecast.fitted()),
            rmse = root_mean_squared_error(&x[..fit_len], forecast.fitted()),
            "in-sample fit"
        );
    }

    let held_out = &x[fit_len..];
    if held_out.is_empty() {
        return;
    }
    if forecast.forecast().len() < held_out.len() {
        warn!(
            held_out = held_out.len(),
            forecast = forecast.forecast().len(),
            "forecast shorter than held-out tail; scoring the overlap only"
        );
    }
    info!(
        mae = mean_absolute_error(held_out, forecast.forecast()),
        rmse = root_mean_squared_error(held_out, forecast.forecast()),
        "held-out forecast"
    );
}

fn write_output(
    output: &Path,
    table: &PredictionTable<'_>,
    writer_cfg: &WriterConfig,
) -> Result<()> {
    info!(path = %output.display(), rows = table.len(), "writing predictions");
    write_predictions(output, table, writer_cfg)
        .with_context(|| format!("failed to write Parquet: {}", output.display()))
}
