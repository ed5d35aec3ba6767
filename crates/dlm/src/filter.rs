//! One-call filter-and-forecast entry point.

use ndarray::Array1;

use crate::error::DlmError;
use crate::hyperparams::Hyperparameters;
use crate::spec::ForecastSpec;

/// Filters `x` and returns only the discretized prediction sequence.
///
/// Equivalent to `spec.run(x, hyper, base_phi, y, z)?.into_predictions()`.
/// Use [`ForecastSpec::run()`] directly when residuals or the final
/// posterior are needed.
///
/// # Errors
///
/// Same as [`ForecastSpec::run()`].
///
/// # Example
///
/// ```
/// use dlmcast_dlm::{ForecastSpec, Hyperparameters, filter_arma};
/// use ndarray::array;
///
/// let hyper = Hyperparameters::scalar(0.0, 1.0, 1.0, 0.0)?;
/// let spec = ForecastSpec::new().with_pred(2);
/// let preds = filter_arma(&[1.0, 2.0, 3.0, 4.0, 5.0], &[], &[], &hyper, &array![1.0], &spec)?;
/// assert_eq!(preds.len(), 7);
/// # Ok::<(), dlmcast_dlm::DlmError>(())
/// ```
pub fn filter_arma(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    hyper: &Hyperparameters,
    base_phi: &Array1<f64>,
    spec: &ForecastSpec,
) -> Result<Vec<f64>, DlmError> {
    spec.run(x, hyper, base_phi, y, z)
        .map(|forecast| forecast.into_predictions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn matches_spec_run() {
        let hyper = Hyperparameters::scalar(0.0, 1.0, 1.0, 0.1).unwrap();
        let spec = ForecastSpec::new().with_ar_terms(1).with_pred(3);
        let x = [3.0, 5.0, 4.0, 6.0, 7.0];
        let y = [1.0, 1.0, 2.0];
        let preds = filter_arma(&x, &y, &[], &hyper, &array![1.0], &spec).unwrap();
        let full = spec.run(&x, &hyper, &array![1.0], &y, &[]).unwrap();
        assert_eq!(preds, full.predictions());
    }

    #[test]
    fn propagates_errors() {
        let hyper = Hyperparameters::scalar(0.0, 1.0, 1.0, 0.0).unwrap();
        let err = filter_arma(&[], &[], &[], &hyper, &array![1.0], &ForecastSpec::new())
            .unwrap_err();
        assert_eq!(err, DlmError::EmptySeries);
    }
}
