//! Error types for the dlmcast-dlm crate.

/// Error type for all fallible operations in the dlmcast-dlm crate.
///
/// This enum covers malformed series, inconsistent model dimensions, and
/// numeric degeneracies that would otherwise surface as NaN predictions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DlmError {
    /// Returned when a series that must hold data is empty.
    #[error("series is empty")]
    EmptySeries,

    /// Returned when a truncation or cut reaches past the start of a series.
    #[error("invalid range: cannot remove {requested} values from a series of length {len}")]
    InvalidRange {
        /// Number of trailing values asked to be removed.
        requested: usize,
        /// Length of the series.
        len: usize,
    },

    /// Returned when two model components disagree in size.
    #[error("dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the offending component.
        what: &'static str,
        /// Expected length or side.
        expected: usize,
        /// Actual length or side.
        got: usize,
    },

    /// Returned when a covariance-like matrix is not symmetric.
    #[error("{what} is not symmetric")]
    NotSymmetric {
        /// Name of the offending matrix.
        what: &'static str,
    },

    /// Returned when model inputs contain NaN or infinity.
    #[error("{what} contains non-finite values")]
    NonFiniteData {
        /// Name of the offending input.
        what: &'static str,
    },

    /// Returned when the one-step forecast variance is zero or not finite.
    #[error("degenerate forecast variance q={q}")]
    DegenerateVariance {
        /// The offending forecast variance.
        q: f64,
    },

    /// Returned when the discount factor is not a positive finite number.
    #[error("discount factor must be positive and finite, got {delta}")]
    InvalidDiscount {
        /// The offending discount factor.
        delta: f64,
    },
}
