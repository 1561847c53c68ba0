//! Least squares solver.
//!
//! Every target estimator reduces to one linear regression problem:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! Implementation choices:
//! - We solve via SVD so tall systems (1000 rows, tens of columns) are
//!   handled robustly.
//! - The interaction design matrix is rank-deficient by construction: the
//!   sector and region `numeric_change` blocks each sum to the same column,
//!   and likewise for the `|numeric_change|` blocks, so the design is exactly
//!   collinear. The SVD solve returns the minimum-norm β in that case, which
//!   is all prediction needs.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}
