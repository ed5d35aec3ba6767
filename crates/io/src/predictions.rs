//! Borrowed view over a prediction run.

use crate::error::IoError;

/// Run phase of a prediction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// One-step-ahead fit over the observed range.
    Fit,
    /// Multi-step forecast past the fitted range.
    Forecast,
}

impl Phase {
    /// Label written to the `phase` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Forecast => "forecast",
        }
    }
}

/// Predictions aligned with the observed primary series.
///
/// Row `t` pairs `predictions[t]` with `observed[t]` when the observation
/// exists and is not NaN. Rows below `fit_len` are [`Phase::Fit`].
#[derive(Debug, Clone, Copy)]
pub struct PredictionTable<'a> {
    observed: &'a [f64],
    predictions: &'a [f64],
    fit_len: usize,
}

impl<'a> PredictionTable<'a> {
    /// Creates a new view.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `fit_len` exceeds the number of
    /// predictions.
    pub fn new(
        observed: &'a [f64],
        predictions: &'a [f64],
        fit_len: usize,
    ) -> Result<Self, IoError> {
        if fit_len > predictions.len() {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "fit_len {fit_len} exceeds {} predictions",
                    predictions.len()
                ),
            });
        }
        Ok(Self {
            observed,
            predictions,
            fit_len,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Returns `true` if there are no predictions.
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Number of fit-phase rows.
    pub fn fit_len(&self) -> usize {
        self.fit_len
    }

    /// Prediction values.
    pub fn predictions(&self) -> &'a [f64] {
        self.predictions
    }

    /// Observation at row `t`, if one exists.
    pub fn observed(&self, t: usize) -> Option<f64> {
        self.observed.get(t).copied().filter(|v| !v.is_nan())
    }

    /// Phase of row `t`.
    pub fn phase(&self, t: usize) -> Phase {
        if t < self.fit_len {
            Phase::Fit
        } else {
            Phase::Forecast
        }
    }
}
