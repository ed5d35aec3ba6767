//! Forecast run results.

use crate::hyperparams::Hyperparameters;
use crate::update::Prior;

/// Output of [`ForecastSpec::run()`](crate::ForecastSpec::run).
///
/// The prediction sequence has length [`horizon()`](Self::horizon): the
/// first [`fit_len()`](Self::fit_len) values are one-step-ahead fits made
/// before each observation was absorbed, the rest are multi-step forecasts.
/// All predictions are discretized (non-negative integers).
#[derive(Clone, Debug)]
pub struct Forecast {
    predictions: Vec<f64>,
    residuals: Vec<f64>,
    fit_len: usize,
    state: Prior,
    hyper: Hyperparameters,
}

impl Forecast {
    pub(crate) fn new(
        predictions: Vec<f64>,
        residuals: Vec<f64>,
        fit_len: usize,
        state: Prior,
        hyper: Hyperparameters,
    ) -> Self {
        Self {
            predictions,
            residuals,
            fit_len,
            state,
            hyper,
        }
    }

    /// All discretized predictions, fit phase first.
    pub fn predictions(&self) -> &[f64] {
        &self.predictions
    }

    /// Consumes the forecast, returning the prediction sequence.
    pub fn into_predictions(self) -> Vec<f64> {
        self.predictions
    }

    /// One-step-ahead fits over the observed range.
    pub fn fitted(&self) -> &[f64] {
        &self.predictions[..self.fit_len]
    }

    /// Multi-step forecasts past the observed range.
    pub fn forecast(&self) -> &[f64] {
        &self.predictions[self.fit_len..]
    }

    /// Number of fitted steps (`len(x) - cut`).
    pub fn fit_len(&self) -> usize {
        self.fit_len
    }

    /// Total number of predictions.
    pub fn horizon(&self) -> usize {
        self.predictions.len()
    }

    /// Continuous one-step residuals `x[t] - phi·F·m` of the fit phase.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Posterior state after the last fitted observation.
    ///
    /// `n` counts the absorbed observations and `s` is the running sample
    /// variance carried across every update of the fit phase, not a value
    /// restarted at each step.
    pub fn state(&self) -> &Prior {
        &self.state
    }

    /// Hyperparameters after autoregressive augmentation, before fitting.
    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyper
    }
}
