// ─────────────────────────────────────────────────────────────────────
// SCPN Determinant Lab — LU Reference
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! LU determinant used as the cross-check oracle.
//!
//! Matches `numpy.linalg.det` (LAPACK getrf: Doolittle LU with partial
//! pivoting, determinant = (-1)^swaps * prod(U diagonal)). The Laplace
//! engine never calls this; tests and benches compare against it.

use det_types::error::{DetError, DetResult};
use ndarray::Array2;

/// Determinant via LU decomposition with partial pivoting.
///
/// Works on a private copy of `m`. Uses the same 0x0 → 0.0 convention
/// as [`crate::laplace::determinant`] so the two are directly
/// comparable.
pub fn det_lu(m: &Array2<f64>) -> DetResult<f64> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(DetError::NotSquare { rows, cols });
    }
    let n = rows;
    if n == 0 {
        return Ok(0.0);
    }

    let mut a = m.clone();
    let mut det = 1.0;

    for k in 0..n {
        // Partial pivoting: largest |a[i][k]| on or below the diagonal.
        let mut piv = k;
        for i in k + 1..n {
            if a[[i, k]].abs() > a[[piv, k]].abs() {
                piv = i;
            }
        }
        if a[[piv, k]] == 0.0 {
            // Whole sub-column is zero: exactly singular.
            return Ok(0.0);
        }
        if piv != k {
            for j in 0..n {
                let tmp = a[[k, j]];
                a[[k, j]] = a[[piv, j]];
                a[[piv, j]] = tmp;
            }
            det = -det;
        }

        det *= a[[k, k]];

        // Eliminate below the pivot.
        for i in k + 1..n {
            let factor = a[[i, k]] / a[[k, k]];
            for j in k + 1..n {
                a[[i, j]] -= factor * a[[k, j]];
            }
        }
    }

    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laplace::determinant;
    use ndarray::array;

    #[test]
    fn test_lu_2x2_literal() {
        let m = array![[1.0, 2.0], [3.0, 4.0]];
        let d = det_lu(&m).unwrap();
        assert!((d - (-2.0)).abs() < 1e-12, "det = {d}");
    }

    #[test]
    fn test_lu_3x3_literal() {
        let m = array![[1.5, 2.2, 3.1], [-4.0, 5.0, -6.0], [7.0, -8.0, 9.0]];
        let d = det_lu(&m).unwrap();
        assert!((d - (-27.0)).abs() < 1e-9, "det = {d}");
    }

    #[test]
    fn test_lu_singular_matrix() {
        let m = array![[1.0, 2.0], [2.0, 4.0]];
        let d = det_lu(&m).unwrap();
        assert!(d.abs() < 1e-12, "det = {d}");
    }

    #[test]
    fn test_lu_non_square_is_an_error() {
        let m = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            det_lu(&m),
            Err(DetError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_lu_empty_matrix_convention() {
        let m = Array2::<f64>::zeros((0, 0));
        assert_eq!(det_lu(&m).unwrap(), 0.0);
    }

    #[test]
    fn test_lu_needs_row_swap() {
        // Zero on the leading diagonal forces a pivot swap.
        let m = array![[0.0, 1.0], [1.0, 0.0]];
        let d = det_lu(&m).unwrap();
        assert!((d - (-1.0)).abs() < 1e-12, "det = {d}");
    }

    #[test]
    fn test_lu_agrees_with_laplace_4x4() {
        let m = array![
            [2.0, -1.0, 0.5, 3.0],
            [1.0, 4.0, -2.0, 0.0],
            [-3.0, 2.5, 1.0, -1.0],
            [0.0, 1.5, 2.0, 2.0]
        ];
        let lu = det_lu(&m).unwrap();
        let lap = determinant(&m).unwrap();
        assert!((lu - lap).abs() < 1e-9, "lu = {lu}, laplace = {lap}");
    }
}
