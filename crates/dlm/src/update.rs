//! One-step Bayesian update of DLM hyperparameters.
//!
//! Given a prior `(m⁻, B⁻, n⁻, s⁻)`, a design vector `phi` and an
//! observation `x`, the update is the closed-form conjugate recursion:
//!
//! ```text
//! P   = F · B⁻ · Fᵀ + Σ            (pre-posterior covariance)
//! Q   = δ + phiᵀ · P · phi         (forecast variance)
//! G   = P · phi / Q                (gain)
//! e   = x − phiᵀ · F · m⁻          (one-step residual)
//! m   = F · m⁻ + G · e
//! B   = P / δ − (G ⊗ G) · Q
//! n   = n⁻ + 1
//! s   = (δ / n) · (n⁻ · s⁻ + e² / Q)
//! ```

use ndarray::{Array1, Array2, Axis};

use crate::error::DlmError;

/// Prior state going into an update.
///
/// `n` and `s` default to zero, which is the state before any
/// observation has been absorbed.
#[derive(Clone, Debug, PartialEq)]
pub struct Prior {
    /// Prior mean `m⁻`.
    pub mean: Array1<f64>,
    /// Prior covariance `B⁻`.
    pub cov: Array2<f64>,
    /// Observations absorbed so far `n⁻`.
    pub n: u64,
    /// Running sample variance `s⁻`.
    pub s: f64,
}

impl Prior {
    /// Builds a prior with `n = 0` and `s = 0`.
    pub fn new(mean: Array1<f64>, cov: Array2<f64>) -> Self {
        Self {
            mean,
            cov,
            n: 0,
            s: 0.0,
        }
    }
}

/// Posterior state produced by [`bayesian_update`].
#[derive(Clone, Debug, PartialEq)]
pub struct Posterior {
    /// Posterior mean `m`.
    pub mean: Array1<f64>,
    /// Posterior covariance `B`.
    pub cov: Array2<f64>,
    /// Observations absorbed `n`.
    pub n: u64,
    /// Running sample variance `s`.
    pub s: f64,
    /// One-step residual `e` of this update.
    pub residual: f64,
    /// Forecast variance `Q` of this update.
    pub q: f64,
}

impl From<Posterior> for Prior {
    fn from(p: Posterior) -> Self {
        Self {
            mean: p.mean,
            cov: p.cov,
            n: p.n,
            s: p.s,
        }
    }
}

/// Absorbs observation `x` into `prior`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DlmError::InvalidDiscount`] | `delta` is not positive and finite |
/// | [`DlmError::DimensionMismatch`] | `phi`, `transition`, `noise`, `prior.mean` or `prior.cov` disagree in size |
/// | [`DlmError::DegenerateVariance`] | `Q` is zero or not finite |
///
/// # Example
///
/// ```
/// use dlmcast_dlm::{Prior, bayesian_update};
/// use ndarray::array;
///
/// let prior = Prior::new(array![0.0], array![[1.0]]);
/// let post = bayesian_update(5.0, &prior, &array![1.0], &array![[1.0]], &array![[0.0]], 1.0).unwrap();
/// assert!((post.mean[0] - 2.5).abs() < 1e-12);
/// ```
pub fn bayesian_update(
    x: f64,
    prior: &Prior,
    phi: &Array1<f64>,
    transition: &Array2<f64>,
    noise: &Array2<f64>,
    delta: f64,
) -> Result<Posterior, DlmError> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(DlmError::InvalidDiscount { delta });
    }
    check_dims(prior, phi, transition, noise)?;

    let f = transition;
    let p = f.dot(&prior.cov).dot(&f.t()) + noise;
    let p_phi = p.dot(phi);
    let q = delta + phi.dot(&p_phi);
    if !q.is_finite() || q == 0.0 {
        return Err(DlmError::DegenerateVariance { q });
    }

    let gain = p_phi / q;
    let f_m = f.dot(&prior.mean);
    let residual = x - phi.dot(&f_m);

    let mean = f_m + &gain * residual;

    let g_col = gain.view().insert_axis(Axis(1));
    let g_row = gain.view().insert_axis(Axis(0));
    let cov = p / delta - g_col.dot(&g_row) * q;

    let n = prior.n + 1;
    let s = (delta / n as f64) * (prior.n as f64 * prior.s + residual * residual / q);

    Ok(Posterior {
        mean,
        cov,
        n,
        s,
        residual,
        q,
    })
}

fn check_dims(
    prior: &Prior,
    phi: &Array1<f64>,
    transition: &Array2<f64>,
    noise: &Array2<f64>,
) -> Result<(), DlmError> {
    let d = prior.mean.len();
    let checks: [(&'static str, usize); 6] = [
        ("design vector", phi.len()),
        ("prior covariance rows", prior.cov.nrows()),
        ("prior covariance cols", prior.cov.ncols()),
        ("transition rows", transition.nrows()),
        ("transition cols", transition.ncols()),
        ("noise rows", noise.nrows()),
    ];
    for (what, got) in checks {
        if got != d {
            return Err(DlmError::DimensionMismatch {
                what,
                expected: d,
                got,
            });
        }
    }
    if noise.ncols() != d {
        return Err(DlmError::DimensionMismatch {
            what: "noise cols",
            expected: d,
            got: noise.ncols(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn scalar_regression() {
        // gain = 1 / (1 + 1) = 0.5, residual = 5
        let prior = Prior::new(array![0.0], array![[1.0]]);
        let post =
            bayesian_update(5.0, &prior, &array![1.0], &array![[1.0]], &array![[0.0]], 1.0)
                .unwrap();
        assert_abs_diff_eq!(post.mean[0], 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(post.residual, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(post.q, 2.0, epsilon = 1e-12);
        // B = 1 - 0.25 * 2 = 0.5
        assert_abs_diff_eq!(post.cov[[0, 0]], 0.5, epsilon = 1e-12);
        assert_eq!(post.n, 1);
        // s = 1/1 * (0 + 25/2)
        assert_abs_diff_eq!(post.s, 12.5, epsilon = 1e-12);
    }

    #[test]
    fn sample_variance_accumulates() {
        let prior = Prior {
            mean: array![0.0],
            cov: array![[1.0]],
            n: 3,
            s: 2.0,
        };
        let post =
            bayesian_update(5.0, &prior, &array![1.0], &array![[1.0]], &array![[0.0]], 1.0)
                .unwrap();
        assert_eq!(post.n, 4);
        // (1/4) * (3*2 + 25/2) = 4.625
        assert_abs_diff_eq!(post.s, 4.625, epsilon = 1e-12);
    }

    #[test]
    fn discount_scales_covariance() {
        let prior = Prior::new(array![0.0], array![[1.0]]);
        let post =
            bayesian_update(1.0, &prior, &array![1.0], &array![[1.0]], &array![[0.0]], 0.5)
                .unwrap();
        // Q = 0.5 + 1 = 1.5, G = 1/1.5, B = 1/0.5 - G^2 * 1.5
        let g = 1.0 / 1.5;
        assert_abs_diff_eq!(post.q, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(post.cov[[0, 0]], 2.0 - g * g * 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(post.mean[0], g, epsilon = 1e-12);
    }

    #[test]
    fn two_dim_matches_hand_computation() {
        // Local linear trend, observing the level only.
        let f = array![[1.0, 1.0], [0.0, 1.0]];
        let sigma = array![[0.0, 0.0], [0.0, 0.0]];
        let prior = Prior::new(array![1.0, 0.5], Array2::eye(2));
        let phi = array![1.0, 0.0];
        let post = bayesian_update(3.0, &prior, &phi, &f, &sigma, 1.0).unwrap();

        // P = F F' = [[2, 1], [1, 1]]
        // Q = 1 + 2 = 3, G = [2/3, 1/3]
        // F m = [1.5, 0.5], e = 3 - 1.5 = 1.5
        assert_abs_diff_eq!(post.q, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(post.residual, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(post.mean[0], 1.5 + 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(post.mean[1], 0.5 + 0.5, epsilon = 1e-12);
        // B = P - G G' * 3
        assert_abs_diff_eq!(post.cov[[0, 0]], 2.0 - 4.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(post.cov[[0, 1]], 1.0 - 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(post.cov[[1, 0]], post.cov[[0, 1]], epsilon = 1e-12);
        assert_abs_diff_eq!(post.cov[[1, 1]], 1.0 - 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn posterior_feeds_next_prior() {
        let f = array![[1.0]];
        let sigma = array![[0.0]];
        let phi = array![1.0];
        let mut prior = Prior::new(array![0.0], array![[1.0]]);
        for _ in 0..50 {
            prior = bayesian_update(4.0, &prior, &phi, &f, &sigma, 1.0)
                .unwrap()
                .into();
        }
        assert_eq!(prior.n, 50);
        assert_abs_diff_eq!(prior.mean[0], 4.0, epsilon = 0.2);
    }

    #[test]
    fn rejects_bad_discount() {
        let prior = Prior::new(array![0.0], array![[1.0]]);
        for delta in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err =
                bayesian_update(1.0, &prior, &array![1.0], &array![[1.0]], &array![[0.0]], delta)
                    .unwrap_err();
            assert!(matches!(err, DlmError::InvalidDiscount { .. }));
        }
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let prior = Prior::new(array![0.0], array![[1.0]]);
        let err = bayesian_update(
            1.0,
            &prior,
            &array![1.0, 0.0],
            &array![[1.0]],
            &array![[0.0]],
            1.0,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DlmError::DimensionMismatch {
                what: "design vector",
                expected: 1,
                got: 2
            }
        );
    }

    #[test]
    fn rejects_degenerate_variance() {
        // Q = 1 + (-1) = 0 via a negative-variance prior.
        let prior = Prior::new(array![0.0], array![[-1.0]]);
        let err = bayesian_update(1.0, &prior, &array![1.0], &array![[1.0]], &array![[0.0]], 1.0)
            .unwrap_err();
        assert!(matches!(err, DlmError::DegenerateVariance { .. }));
    }
}
