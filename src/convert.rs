//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use ndarray::{Array1, Array2};

use crate::config::*;

use dlmcast_dlm::{ForecastSpec, Hyperparameters};
use dlmcast_io::{Compression, WriterConfig};

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Converts a row-major nested array into a matrix.
///
/// Every row must have the same length; an empty outer array gives a
/// `0 x 0` matrix.
pub fn to_matrix(name: &str, rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let n_cols = rows.first().map_or(0, Vec::len);
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
        bail!(
            "[model].{name}: row {i} has {} entries, expected {n_cols}",
            row.len()
        );
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), n_cols), flat)
        .with_context(|| format!("[model].{name}: invalid matrix shape"))
}

/// Builds validated [`Hyperparameters`] from the TOML model section.
pub fn build_hyperparameters(model: &ModelToml) -> Result<Hyperparameters> {
    let hyper = Hyperparameters::new(
        Array1::from_vec(model.mean.clone()),
        to_matrix("cov", &model.cov)?,
        to_matrix("transition", &model.transition)?,
        to_matrix("noise", &model.noise)?,
    )
    .context("invalid [model] hyperparameters")?;
    Ok(hyper)
}

/// Returns the base design vector from the TOML model section.
pub fn build_base_phi(model: &ModelToml) -> Array1<f64> {
    Array1::from_vec(model.base_phi.clone())
}

/// Builds a validated [`ForecastSpec`] from the TOML forecast section.
pub fn build_forecast_spec(f: &ForecastToml) -> Result<ForecastSpec> {
    let spec = ForecastSpec::new()
        .with_discount(f.discount)
        .with_ar_terms(f.ar_terms)
        .with_cut(f.cut)
        .with_pred(f.pred);
    spec.validate().context("invalid [forecast] settings")?;
    Ok(spec)
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoToml) -> Result<WriterConfig> {
    let compression = parse_compression(&io.compression)?;
    Ok(WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(io.row_group_size))
}
