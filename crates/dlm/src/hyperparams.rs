//! DLM hyperparameters and autoregressive state augmentation.

use ndarray::{Array1, Array2, s};
use tracing::debug;

use crate::error::DlmError;
use crate::linalg;

/// Tolerance used when checking that `cov` and `noise` are symmetric.
const SYMMETRY_TOL: f64 = 1e-9;

/// Prior variance given to every reserved autoregressive slot.
const AR_PRIOR_VARIANCE: f64 = 0.5;

/// Hyperparameters of a dynamic linear model of state dimension `d`.
///
/// | Field | Symbol | Shape |
/// |-------|--------|-------|
/// | [`mean()`](Self::mean) | `m` | `d` |
/// | [`cov()`](Self::cov) | `B` | `d × d` |
/// | [`transition()`](Self::transition) | `F` | `d × d` |
/// | [`noise()`](Self::noise) | `Σ` | `d × d` |
///
/// `B` and `Σ` are required to be symmetric. Positive semi-definiteness is
/// assumed and not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Hyperparameters {
    mean: Array1<f64>,
    cov: Array2<f64>,
    transition: Array2<f64>,
    noise: Array2<f64>,
}

impl Hyperparameters {
    /// Creates a validated hyperparameter set.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`DlmError::DimensionMismatch`] | `mean` is empty or any matrix is not `d × d` |
    /// | [`DlmError::NonFiniteData`] | any entry is NaN or infinite |
    /// | [`DlmError::NotSymmetric`] | `cov` or `noise` is not symmetric |
    ///
    /// # Example
    ///
    /// ```
    /// use dlmcast_dlm::Hyperparameters;
    /// use ndarray::array;
    ///
    /// let hyper = Hyperparameters::new(
    ///     array![0.0],
    ///     array![[1.0]],
    ///     array![[1.0]],
    ///     array![[0.0]],
    /// )
    /// .unwrap();
    /// assert_eq!(hyper.dim(), 1);
    /// ```
    pub fn new(
        mean: Array1<f64>,
        cov: Array2<f64>,
        transition: Array2<f64>,
        noise: Array2<f64>,
    ) -> Result<Self, DlmError> {
        let d = mean.len();
        if d == 0 {
            return Err(DlmError::DimensionMismatch {
                what: "mean",
                expected: 1,
                got: 0,
            });
        }
        for (what, m) in [("cov", &cov), ("transition", &transition), ("noise", &noise)] {
            check_square(what, m, d)?;
        }

        if mean.iter().any(|v| !v.is_finite()) {
            return Err(DlmError::NonFiniteData { what: "mean" });
        }
        for (what, m) in [("cov", &cov), ("transition", &transition), ("noise", &noise)] {
            if m.iter().any(|v| !v.is_finite()) {
                return Err(DlmError::NonFiniteData { what });
            }
        }

        if !linalg::is_symmetric(&cov, SYMMETRY_TOL) {
            return Err(DlmError::NotSymmetric { what: "cov" });
        }
        if !linalg::is_symmetric(&noise, SYMMETRY_TOL) {
            return Err(DlmError::NotSymmetric { what: "noise" });
        }

        Ok(Self {
            mean,
            cov,
            transition,
            noise,
        })
    }

    /// Creates a one-dimensional (local level) hyperparameter set.
    ///
    /// # Errors
    ///
    /// Returns [`DlmError::NonFiniteData`] if any argument is NaN or infinite.
    pub fn scalar(m: f64, b: f64, f: f64, sigma: f64) -> Result<Self, DlmError> {
        Self::new(
            Array1::from_elem(1, m),
            Array2::from_elem((1, 1), b),
            Array2::from_elem((1, 1), f),
            Array2::from_elem((1, 1), sigma),
        )
    }

    /// State dimension `d`.
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Prior mean vector `m`.
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Prior covariance matrix `B`.
    pub fn cov(&self) -> &Array2<f64> {
        &self.cov
    }

    /// Transition matrix `F`.
    pub fn transition(&self) -> &Array2<f64> {
        &self.transition
    }

    /// Process-noise matrix `Σ`.
    pub fn noise(&self) -> &Array2<f64> {
        &self.noise
    }

    /// Reserves `p` state slots for autoregressive coefficients.
    ///
    /// Returns a new set of dimension `d + p`:
    ///
    /// ```text
    /// m' = [m, 0_p]
    /// B' = blockdiag(B, 0.5 · I_p)
    /// F' = blockdiag(F, I_p)
    /// Σ' = blockdiag(Σ, 0_p)
    /// ```
    ///
    /// The autoregressive coefficients are therefore static (identity
    /// transition, no process noise) with a weakly informative prior.
    /// `p = 0` returns an equal copy.
    pub fn augment(&self, p: usize) -> Self {
        debug!(d = self.dim(), p, "augmenting hyperparameters");
        let identity = Array2::<f64>::eye(p);

        let d = self.dim();
        let mut mean = Array1::zeros(d + p);
        mean.slice_mut(s![..d]).assign(&self.mean);

        Self {
            mean,
            cov: linalg::block_diag(&self.cov, &(&identity * AR_PRIOR_VARIANCE)),
            transition: linalg::block_diag(&self.transition, &identity),
            noise: linalg::block_diag(&self.noise, &Array2::zeros((p, p))),
        }
    }
}

fn check_square(what: &'static str, m: &Array2<f64>, d: usize) -> Result<(), DlmError> {
    let (r, c) = m.dim();
    if r != d {
        return Err(DlmError::DimensionMismatch {
            what,
            expected: d,
            got: r,
        });
    }
    if c != d {
        return Err(DlmError::DimensionMismatch {
            what,
            expected: d,
            got: c,
        });
    }
    Ok(())
}
