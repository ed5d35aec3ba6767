//! Small dense linear-algebra helpers on top of `ndarray`.
//!
//! **Not part of the public API.**

use ndarray::{Array2, s};

/// Builds the block-diagonal matrix `[[a, 0], [0, b]]`.
pub(crate) fn block_diag(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    let (ar, ac) = a.dim();
    let (br, bc) = b.dim();
    let mut out = Array2::zeros((ar + br, ac + bc));
    out.slice_mut(s![..ar, ..ac]).assign(a);
    out.slice_mut(s![ar.., ac..]).assign(b);
    out
}

/// Returns `true` if `m` is square and `|m[i,j] - m[j,i]| <= tol` everywhere.
pub(crate) fn is_symmetric(m: &Array2<f64>, tol: f64) -> bool {
    let (r, c) = m.dim();
    if r != c {
        return false;
    }
    for i in 0..r {
        for j in (i + 1)..c {
            if (m[[i, j]] - m[[j, i]]).abs() > tol {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn block_diag_shapes_and_values() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0]];
        let out = block_diag(&a, &b);
        assert_eq!(out.dim(), (3, 3));
        assert_eq!(out, array![[1.0, 2.0, 0.0], [3.0, 4.0, 0.0], [0.0, 0.0, 5.0]]);
    }

    #[test]
    fn block_diag_with_empty_block() {
        let a = array![[2.0]];
        let b = Array2::<f64>::zeros((0, 0));
        assert_eq!(block_diag(&a, &b), a);
    }

    #[test]
    fn symmetry_check() {
        assert!(is_symmetric(&array![[1.0, 0.5], [0.5, 2.0]], 1e-12));
        assert!(!is_symmetric(&array![[1.0, 0.5], [0.4, 2.0]], 1e-12));
        assert!(!is_symmetric(&Array2::<f64>::zeros((2, 3)), 1e-12));
    }
}
