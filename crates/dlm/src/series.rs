//! Series preparation and autoregressive lag windows.

use ndarray::{Array1, ArrayView1, ArrayViewMut1, s};

use crate::error::DlmError;

/// Extends or truncates `series` by `extension` values.
///
/// - `extension == 0` returns a copy.
/// - `extension < 0` drops the last `|extension|` values.
/// - `extension > 0` appends `extension` copies of the last value.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DlmError::InvalidRange`] | `|extension| > series.len()` when truncating |
/// | [`DlmError::EmptySeries`] | `series` is empty when extending |
///
/// # Example
///
/// ```
/// use dlmcast_dlm::prepare_series;
///
/// assert_eq!(prepare_series(&[1.0, 2.0], 2).unwrap(), vec![1.0, 2.0, 2.0, 2.0]);
/// assert_eq!(prepare_series(&[1.0, 2.0, 3.0], -1).unwrap(), vec![1.0, 2.0]);
/// ```
pub fn prepare_series(series: &[f64], extension: isize) -> Result<Vec<f64>, DlmError> {
    let len = series.len();
    match extension {
        0 => Ok(series.to_vec()),
        e if e < 0 => {
            let requested = e.unsigned_abs();
            if requested > len {
                return Err(DlmError::InvalidRange { requested, len });
            }
            Ok(series[..len - requested].to_vec())
        }
        e => {
            let last = *series.last().ok_or(DlmError::EmptySeries)?;
            let mut out = Vec::with_capacity(len + e as usize);
            out.extend_from_slice(series);
            out.resize(len + e as usize, last);
            Ok(out)
        }
    }
}

/// Extends or truncates `series` to exactly `target` values.
///
/// Convenience wrapper over [`prepare_series`] computing the signed
/// extension `target - series.len()`.
///
/// # Errors
///
/// Returns [`DlmError::EmptySeries`] if `series` is empty and `target > 0`.
pub fn fit_to_length(series: &[f64], target: usize) -> Result<Vec<f64>, DlmError> {
    let extension = target as isize - series.len() as isize;
    prepare_series(series, extension)
}

/// Returns the `len` most recent values strictly before index `t`.
///
/// The window is `series[max(t - len, 0)..t]`, left-padded with zeros when
/// fewer than `len` values precede `t`. If `t < 0` or `t > series.len()` the
/// window is all zeros. The result always has exactly `len` elements.
///
/// # Example
///
/// ```
/// use dlmcast_dlm::lag_window;
///
/// let s = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(lag_window(&s, 3, 2).to_vec(), vec![0.0, 1.0, 2.0]);
/// assert_eq!(lag_window(&s, 2, 4).to_vec(), vec![3.0, 4.0]);
/// assert_eq!(lag_window(&s, 2, 5).to_vec(), vec![0.0, 0.0]);
/// ```
pub fn lag_window(series: &[f64], len: usize, t: isize) -> Array1<f64> {
    let mut out = Array1::zeros(len);
    write_lag_window(series, t, out.view_mut());
    out
}

/// Writes the lag window for index `t` into `out`, whose length is the
/// window length. Shared by [`lag_window`] and the design composer.
pub(crate) fn write_lag_window(series: &[f64], t: isize, mut out: ArrayViewMut1<'_, f64>) {
    out.fill(0.0);
    if t < 0 || t as usize > series.len() {
        return;
    }
    let t = t as usize;
    let len = out.len();
    let start = t.saturating_sub(len);
    let history = &series[start..t];
    out.slice_mut(s![len - history.len()..])
        .assign(&ArrayView1::from(history));
}
