//! Error types for rescaling.

/// Errors from fitting a [`MinMaxScaler`](crate::MinMaxScaler).
///
/// | Variant | Trigger |
/// |---------|---------|
/// | `EmptyData` | the series to fit is empty |
/// | `NonFiniteData` | the series holds NaN or infinity |
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    /// Cannot fit a scaler on an empty series.
    #[error("cannot fit scaler on empty data")]
    EmptyData,

    /// Non-finite value at the given index.
    #[error("non-finite value {value} at index {index}")]
    NonFiniteData { index: usize, value: f64 },
}
