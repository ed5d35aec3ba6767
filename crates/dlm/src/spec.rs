//! Forecast run specification.

use ndarray::Array1;

use crate::error::DlmError;
use crate::forecast::Forecast;
use crate::hyperparams::Hyperparameters;

/// Settings for a filter-then-forecast run.
///
/// This is the entry point of the workflow. Configure it with the builder
/// methods, then call [`ForecastSpec::run()`] to obtain a [`Forecast`].
///
/// ```mermaid
/// graph LR
///     A["ForecastSpec::new()"] -->|".with_ar_terms(p)"| A
///     A -->|".run(&x, &hyper, &phi, &y, &z)?"| B["Forecast"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForecastSpec {
    discount: f64,
    ar_terms: usize,
    cut: usize,
    pred: usize,
}

impl Default for ForecastSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastSpec {
    /// Creates a specification with defaults.
    ///
    /// Defaults: `discount = 1.0`, `ar_terms = 0`, `cut = 0`, `pred = 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use dlmcast_dlm::ForecastSpec;
    ///
    /// let spec = ForecastSpec::new().with_ar_terms(2).with_pred(7);
    /// assert_eq!(spec.ar_terms(), 2);
    /// assert_eq!(spec.pred(), 7);
    /// ```
    pub fn new() -> Self {
        Self {
            discount: 1.0,
            ar_terms: 0,
            cut: 0,
            pred: 0,
        }
    }

    /// Sets the discount factor `δ`.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the number of autoregressive lags drawn from each series.
    pub fn with_ar_terms(mut self, ar_terms: usize) -> Self {
        self.ar_terms = ar_terms;
        self
    }

    /// Sets how many trailing observations of the primary series are held
    /// out of fitting.
    pub fn with_cut(mut self, cut: usize) -> Self {
        self.cut = cut;
        self
    }

    /// Sets how many steps to forecast past the fitted range.
    pub fn with_pred(mut self, pred: usize) -> Self {
        self.pred = pred;
        self
    }

    /// Returns the discount factor `δ`.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Returns the number of autoregressive lags per series.
    pub fn ar_terms(&self) -> usize {
        self.ar_terms
    }

    /// Returns the held-out tail length.
    pub fn cut(&self) -> usize {
        self.cut
    }

    /// Returns the number of forecast steps.
    pub fn pred(&self) -> usize {
        self.pred
    }

    /// Validates this specification.
    ///
    /// # Errors
    ///
    /// Returns [`DlmError::InvalidDiscount`] if `discount` is not positive
    /// and finite.
    pub fn validate(&self) -> Result<(), DlmError> {
        if !self.discount.is_finite() || self.discount <= 0.0 {
            return Err(DlmError::InvalidDiscount {
                delta: self.discount,
            });
        }
        Ok(())
    }

    /// Filters `x` (helped by the optional auxiliary series `y` and `z`)
    /// and forecasts past its end.
    ///
    /// Pass an empty slice for an absent auxiliary series. `base_phi` is the
    /// design vector before lag features are appended; its length must equal
    /// `hyper.dim()`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`DlmError::InvalidDiscount`] | `discount` is not positive and finite |
    /// | [`DlmError::EmptySeries`] | `x` is empty |
    /// | [`DlmError::InvalidRange`] | `cut > x.len()` |
    /// | [`DlmError::NonFiniteData`] | any series or `base_phi` holds NaN or infinity |
    /// | [`DlmError::DimensionMismatch`] | design vector length differs from the augmented state dimension |
    /// | [`DlmError::DegenerateVariance`] | an update hits zero forecast variance |
    pub fn run(
        &self,
        x: &[f64],
        hyper: &Hyperparameters,
        base_phi: &Array1<f64>,
        y: &[f64],
        z: &[f64],
    ) -> Result<Forecast, DlmError> {
        crate::driver::run_forecast(self, x, hyper, base_phi, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn defaults() {
        let spec = ForecastSpec::new();
        assert_eq!(spec.discount(), 1.0);
        assert_eq!(spec.ar_terms(), 0);
        assert_eq!(spec.cut(), 0);
        assert_eq!(spec.pred(), 0);
        assert_eq!(spec, ForecastSpec::default());
    }

    #[test]
    fn builder_round_trip() {
        let spec = ForecastSpec::new()
            .with_discount(0.9)
            .with_ar_terms(3)
            .with_cut(4)
            .with_pred(5);
        assert_eq!(spec.discount(), 0.9);
        assert_eq!(spec.ar_terms(), 3);
        assert_eq!(spec.cut(), 4);
        assert_eq!(spec.pred(), 5);
    }

    #[test]
    fn validate_discount() {
        assert!(ForecastSpec::new().validate().is_ok());
        for d in [0.0, -0.5, f64::NAN] {
            let err = ForecastSpec::new().with_discount(d).validate().unwrap_err();
            assert!(matches!(err, DlmError::InvalidDiscount { .. }));
        }
    }

    #[test]
    fn run_rejects_bad_discount_before_data() {
        let hyper = Hyperparameters::scalar(0.0, 1.0, 1.0, 0.0).unwrap();
        let err = ForecastSpec::new()
            .with_discount(0.0)
            .run(&[], &hyper, &array![1.0], &[], &[])
            .unwrap_err();
        assert!(matches!(err, DlmError::InvalidDiscount { .. }));
    }

    #[test]
    fn spec_is_copy() {
        let a = ForecastSpec::new().with_pred(2);
        let b = a;
        assert_eq!(a, b);
    }
}
