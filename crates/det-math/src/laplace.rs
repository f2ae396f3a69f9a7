// ─────────────────────────────────────────────────────────────────────
// SCPN Determinant Lab — Laplace Expansion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Recursive Laplace (cofactor) expansion determinant.
//!
//! Port of det.py det(), final revision. The expansion column is the one
//! with the most near-zero entries, and near-zero terms are skipped
//! outright, so matrices that already contain zeros prune most of the
//! O(n!) recursion tree. The pruning is exact up to the tolerance: a
//! skipped term contributes elem * minor_det with |elem| <= eps.
//!
//! This is a small-matrix tool: dense inputs cost O(n!). The LU routine
//! in [`crate::reference`] is a cross-check oracle for tests and
//! benches only, never consulted here.

use det_types::config::EngineConfig;
use det_types::error::{DetError, DetResult};
use ndarray::Array2;

/// Default near-zero threshold, the default of the script's final
/// revision (the first revision had no tolerance at all).
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Determinant via Laplace expansion with the default tolerance.
pub fn determinant(m: &Array2<f64>) -> DetResult<f64> {
    determinant_with_tolerance(m, DEFAULT_TOLERANCE)
}

/// Determinant using the tolerance from an [`EngineConfig`].
pub fn determinant_with_config(m: &Array2<f64>, config: &EngineConfig) -> DetResult<f64> {
    determinant_with_tolerance(m, config.tolerance)
}

/// Determinant via Laplace expansion with an explicit near-zero
/// threshold `eps`, used at every recursion level for both pivot-column
/// scoring and term pruning.
///
/// Conventions:
/// - a 0x0 matrix has determinant 0.0 (kept from the original script;
///   the usual convention for the empty matrix is 1.0)
/// - a non-square matrix is [`DetError::NotSquare`], never a silent 0.0
/// - `eps` must be finite and >= 0
pub fn determinant_with_tolerance(m: &Array2<f64>, eps: f64) -> DetResult<f64> {
    if !eps.is_finite() || eps < 0.0 {
        return Err(DetError::ConfigError(format!(
            "tolerance must be finite and >= 0, got {eps}"
        )));
    }
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(DetError::NotSquare { rows, cols });
    }
    Ok(det_recursive(m, eps))
}

/// Recursive core. Shape and eps are validated once at the entry point;
/// every minor is square by construction.
fn det_recursive(m: &Array2<f64>, eps: f64) -> f64 {
    let n = m.nrows();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return m[[0, 0]];
    }

    let col = select_pivot_column(m, eps);

    let mut d = 0.0;
    for row in 0..n {
        let elem = m[[row, col]];
        if elem.abs() <= eps {
            continue;
        }
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        d += sign * elem * det_recursive(&minor(m, row, col), eps);
    }
    d
}

/// Pick the expansion column with the most near-zero entries.
///
/// The scan replaces the current best only on a strictly greater count,
/// so ties keep the lowest column index and an all-dense matrix expands
/// along column 0.
pub fn select_pivot_column(m: &Array2<f64>, eps: f64) -> usize {
    let mut best_col = 0;
    let mut best_zeros = 0;
    for col in 0..m.ncols() {
        let zeros = m.column(col).iter().filter(|x| x.abs() <= eps).count();
        if zeros > best_zeros {
            best_col = col;
            best_zeros = zeros;
        }
    }
    best_col
}

/// Minor of `m` with `row` and `col` removed, as a fresh matrix.
///
/// Always materialized, never a view: each recursive call owns its
/// minor, so sibling terms share nothing.
pub fn minor(m: &Array2<f64>, row: usize, col: usize) -> Array2<f64> {
    let n = m.nrows();
    Array2::from_shape_fn((n - 1, n - 1), |(i, j)| {
        let si = if i >= row { i + 1 } else { i };
        let sj = if j >= col { j + 1 } else { j };
        m[[si, sj]]
    })
}
