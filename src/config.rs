use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level dlmcast configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DlmcastConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Base model hyperparameters.
    #[serde(default)]
    pub model: ModelToml,

    /// Filter and forecast settings.
    #[serde(default)]
    pub forecast: ForecastToml,
}

/// Reads and parses a TOML config file.
pub fn load(path: &Path) -> Result<DlmcastConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub columns: ColumnsToml,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            columns: ColumnsToml::default(),
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}

/// Input column names: `x` is the series to forecast, `y` and `z` optional
/// auxiliary regressors.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnsToml {
    #[serde(default = "default_x_column")]
    pub x: String,
    #[serde(default)]
    pub y: Option<String>,
    #[serde(default)]
    pub z: Option<String>,
}

impl Default for ColumnsToml {
    fn default() -> Self {
        Self {
            x: default_x_column(),
            y: None,
            z: None,
        }
    }
}

impl ColumnsToml {
    /// Selected column names in `x, y, z` order, skipping absent ones.
    pub fn selected(&self) -> Vec<&str> {
        std::iter::once(self.x.as_str())
            .chain(self.y.as_deref())
            .chain(self.z.as_deref())
            .collect()
    }
}

fn default_x_column() -> String {
    "x".to_string()
}

/// Base model before autoregressive augmentation. Matrices are row-major
/// nested arrays. Defaults to a local-level model.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_mean")]
    pub mean: Vec<f64>,
    #[serde(default = "default_identity")]
    pub cov: Vec<Vec<f64>>,
    #[serde(default = "default_identity")]
    pub transition: Vec<Vec<f64>>,
    #[serde(default = "default_zero")]
    pub noise: Vec<Vec<f64>>,
    #[serde(default = "default_base_phi")]
    pub base_phi: Vec<f64>,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            mean: default_mean(),
            cov: default_identity(),
            transition: default_identity(),
            noise: default_zero(),
            base_phi: default_base_phi(),
        }
    }
}

fn default_mean() -> Vec<f64> {
    vec![0.0]
}
fn default_identity() -> Vec<Vec<f64>> {
    vec![vec![1.0]]
}
fn default_zero() -> Vec<Vec<f64>> {
    vec![vec![0.0]]
}
fn default_base_phi() -> Vec<f64> {
    vec![1.0]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_discount")]
    pub discount: f64,
    #[serde(default)]
    pub ar_terms: usize,
    #[serde(default)]
    pub cut: usize,
    #[serde(default)]
    pub pred: usize,
    #[serde(default)]
    pub rescale: bool,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            discount: default_discount(),
            ar_terms: 0,
            cut: 0,
            pred: 0,
            rescale: false,
        }
    }
}

fn default_discount() -> f64 {
    1.0
}
