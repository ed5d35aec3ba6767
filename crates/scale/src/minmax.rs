//! Min-max rescaling to the unit interval.

use crate::error::ScaleError;

/// Affine map from `[min, max]` onto `[0, 1]`.
///
/// A constant series has zero range; its scale is treated as 1, so every
/// value maps to 0 and [`inverse_transform`](Self::inverse_transform) still
/// recovers the original.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxScaler {
    min: f64,
    max: f64,
}

impl MinMaxScaler {
    /// Fits the scaler to the range of `data`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ScaleError::EmptyData`] | `data` is empty |
    /// | [`ScaleError::NonFiniteData`] | `data` holds NaN or infinity |
    pub fn fit(data: &[f64]) -> Result<Self, ScaleError> {
        if data.is_empty() {
            return Err(ScaleError::EmptyData);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (index, &value) in data.iter().enumerate() {
            if !value.is_finite() {
                return Err(ScaleError::NonFiniteData { index, value });
            }
            min = min.min(value);
            max = max.max(value);
        }
        Ok(Self { min, max })
    }

    /// Smallest fitted value.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest fitted value.
    pub fn max(&self) -> f64 {
        self.max
    }

    fn range(&self) -> f64 {
        let r = self.max - self.min;
        if r > 0.0 { r } else { 1.0 }
    }

    /// Maps `data` into the fitted unit interval.
    ///
    /// Values outside the fitted range land outside `[0, 1]`.
    pub fn transform(&self, data: &[f64]) -> Vec<f64> {
        let range = self.range();
        data.iter().map(|&v| (v - self.min) / range).collect()
    }

    /// Inverse of [`transform`](Self::transform).
    pub fn inverse_transform(&self, data: &[f64]) -> Vec<f64> {
        let range = self.range();
        data.iter().map(|&v| v * range + self.min).collect()
    }
}

/// Fits a [`MinMaxScaler`] to `data` and returns the scaled series with it.
///
/// # Example
///
/// ```
/// let (scaled, scaler) = dlmcast_scale::scale(&[2.0, 4.0, 6.0])?;
/// assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
/// assert_eq!(scaler.inverse_transform(&scaled), vec![2.0, 4.0, 6.0]);
/// # Ok::<(), dlmcast_scale::ScaleError>(())
/// ```
pub fn scale(data: &[f64]) -> Result<(Vec<f64>, MinMaxScaler), ScaleError> {
    let scaler = MinMaxScaler::fit(data)?;
    Ok((scaler.transform(data), scaler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fit_records_range() {
        let s = MinMaxScaler::fit(&[3.0, -1.0, 7.0, 2.0]).unwrap();
        assert_eq!(s.min(), -1.0);
        assert_eq!(s.max(), 7.0);
    }

    #[test]
    fn transform_maps_extremes_to_unit_bounds() {
        let (scaled, _) = scale(&[10.0, 15.0, 20.0, 12.5]).unwrap();
        assert_abs_diff_eq!(scaled[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(scaled[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(scaled[2], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(scaled[3], 0.25, epsilon = 1e-12);
    }

    #[test]
    fn inverse_recovers_original() {
        let data = [0.3, 8.1, -2.4, 5.5];
        let (scaled, s) = scale(&data).unwrap();
        let back = s.inverse_transform(&scaled);
        for (a, b) in data.iter().zip(&back) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_series_maps_to_zero() {
        let (scaled, s) = scale(&[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(scaled, vec![0.0, 0.0, 0.0]);
        assert_eq!(s.inverse_transform(&scaled), vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn out_of_range_values_extrapolate() {
        let s = MinMaxScaler::fit(&[0.0, 10.0]).unwrap();
        assert_eq!(s.transform(&[20.0, -5.0]), vec![2.0, -0.5]);
    }

    #[test]
    fn fit_rejects_empty() {
        assert_eq!(MinMaxScaler::fit(&[]).unwrap_err(), ScaleError::EmptyData);
    }

    #[test]
    fn fit_rejects_nan() {
        let err = MinMaxScaler::fit(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, ScaleError::NonFiniteData { index: 1, .. }));
    }
}
