/// Rounds a continuous prediction to the nearest non-negative integer.
///
/// Halves round to the nearest even integer, so `0.5` maps to `0.0` and
/// `2.5` to `2.0`. NaN maps to `0.0`. The mapping is
/// idempotent: `discretize(discretize(v)) == discretize(v)`.
///
/// # Example
///
/// ```
/// use dlmcast_dlm::discretize;
///
/// assert_eq!(discretize(2.5), 2.0);
/// assert_eq!(discretize(3.5), 4.0);
/// assert_eq!(discretize(-0.7), 0.0);
/// ```
pub fn discretize(v: f64) -> f64 {
    let r = v.round_ties_even();
    if r > 0.0 { r } else { 0.0 }
}
