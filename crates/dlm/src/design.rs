//! Design (observation) vector composition.

use ndarray::{Array1, s};

use crate::series::write_lag_window;

/// A series contributing `lags` autoregressive features to the design vector.
///
/// An empty `data` slice marks an absent series: it contributes nothing.
#[derive(Clone, Copy, Debug)]
pub struct LaggedSeries<'a> {
    data: &'a [f64],
    lags: usize,
}

impl<'a> LaggedSeries<'a> {
    /// Pairs a series with its lag count.
    pub fn new(data: &'a [f64], lags: usize) -> Self {
        Self { data, lags }
    }

    /// The underlying observations.
    pub fn data(&self) -> &'a [f64] {
        self.data
    }

    /// Number of lagged values drawn from this series.
    pub fn lags(&self) -> usize {
        self.lags
    }

    /// Number of design-vector entries this series contributes.
    pub fn width(&self) -> usize {
        if self.data.is_empty() { 0 } else { self.lags }
    }
}

/// Builds the design vector `phi` for time index `t`.
///
/// `phi = [base, window(s_1), window(s_2), ...]` where each window is the
/// [`lag_window`](crate::lag_window) of a non-empty series. Empty series are
/// skipped rather than zero-filled.
///
/// # Example
///
/// ```
/// use dlmcast_dlm::{LaggedSeries, compose_design};
/// use ndarray::array;
///
/// let x = [1.0, 2.0, 3.0];
/// let phi = compose_design(&array![1.0], &[LaggedSeries::new(&x, 2), LaggedSeries::new(&[], 2)], 2);
/// assert_eq!(phi.to_vec(), vec![1.0, 1.0, 2.0]);
/// ```
pub fn compose_design(base: &Array1<f64>, series: &[LaggedSeries<'_>], t: isize) -> Array1<f64> {
    let mut composer = DesignComposer::new(base, series.iter().map(LaggedSeries::width));
    composer.compose(series, t).clone()
}

/// Reusable design-vector buffer.
///
/// The base block is written once; each call to [`compose`](Self::compose)
/// overwrites only the lag blocks, so a forecasting loop allocates the
/// vector a single time.
#[derive(Clone, Debug)]
pub struct DesignComposer {
    phi: Array1<f64>,
    base_len: usize,
}

impl DesignComposer {
    /// Allocates a buffer for `base` followed by blocks of the given widths.
    pub fn new(base: &Array1<f64>, widths: impl IntoIterator<Item = usize>) -> Self {
        let base_len = base.len();
        let total = base_len + widths.into_iter().sum::<usize>();
        let mut phi = Array1::zeros(total);
        phi.slice_mut(s![..base_len]).assign(base);
        Self { phi, base_len }
    }

    /// Total design-vector length.
    pub fn len(&self) -> usize {
        self.phi.len()
    }

    /// Returns `true` if the design vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.phi.is_empty()
    }

    /// Writes the lag windows for time `t` and returns the full vector.
    ///
    /// `series` must have the same widths, in the same order, as those given
    /// to [`new`](Self::new).
    pub fn compose(&mut self, series: &[LaggedSeries<'_>], t: isize) -> &Array1<f64> {
        let mut offset = self.base_len;
        for ls in series {
            let width = ls.width();
            if width == 0 {
                continue;
            }
            write_lag_window(ls.data, t, self.phi.slice_mut(s![offset..offset + width]));
            offset += width;
        }
        &self.phi
    }
}
