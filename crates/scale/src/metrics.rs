//! Missing-value detection and simple error metrics.

/// Returns `true` if any column of `table` contains a missing value.
///
/// NaN is the missing-value marker; infinities count as present.
pub fn has_nulls(table: &[Vec<f64>]) -> bool {
    table.iter().flatten().any(|v| v.is_nan())
}

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Mean absolute error over the common prefix of `observed` and `predicted`.
/// Returns 0.0 if either is empty.
pub fn mean_absolute_error(observed: &[f64], predicted: &[f64]) -> f64 {
    let n = observed.len().min(predicted.len());
    if n == 0 {
        return 0.0;
    }
    observed
        .iter()
        .zip(predicted)
        .map(|(o, p)| (o - p).abs())
        .sum::<f64>()
        / n as f64
}

/// Root mean squared error over the common prefix of `observed` and
/// `predicted`. Returns 0.0 if either is empty.
pub fn root_mean_squared_error(observed: &[f64], predicted: &[f64]) -> f64 {
    let n = observed.len().min(predicted.len());
    if n == 0 {
        return 0.0;
    }
    let sse: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(o, p)| (o - p) * (o - p))
        .sum();
    (sse / n as f64).sqrt()
}
