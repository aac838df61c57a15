use log::{debug, trace, warn};

use super::{check_dimension, start_vector, GrowthStreak};
use crate::linalg::LinalgError;
use crate::matrix::Vector;
use crate::{IterConfig, Matrix};

/// Gauss–Seidel iteration for `A·x = b`.
///
/// With `A = L + U` (`L` lower triangle including the diagonal, `U` strictly
/// upper) each step solves `L·x_new = b - U·x_old` by forward substitution.
/// Converges when `‖A·x - b‖ < config.tolerance`; gives up with `Ok(None)`
/// once `‖x‖` has grown by at least 1 for `config.divergence_streak`
/// consecutive steps, or when the iteration cap runs out.
///
/// Convergence is guaranteed for strictly diagonally dominant and for
/// symmetric positive definite `A`.
///
/// # Errors
///
/// [`LinalgError::DimensionMismatch`] if `b` does not match `A`, and
/// [`LinalgError::ZeroDiagonal`] if some `A[i][i]` is zero.
pub fn seidel(a: &Matrix, b: &Vector, config: &IterConfig) -> Result<Option<Vector>, LinalgError> {
    check_dimension(a, b)?;
    let n = a.dim();
    if let Some(index) = (0..n).find(|&i| a[(i, i)] == 0.0) {
        return Err(LinalgError::ZeroDiagonal { index });
    }

    let mut x = start_vector(n);
    let mut growth = GrowthStreak::new(&x);

    for iter in 1..=config.max_iterations {
        sweep(a, b, &mut x);
        let streak = growth.update(&x);

        let residual = (&(a * &x) - b).norm();
        trace!("seidel: step {} residual {:e}", iter, residual);
        if residual < config.tolerance {
            debug!("seidel: converged after {} steps", iter);
            return Ok(Some(x));
        }
        if streak >= config.divergence_streak {
            debug!("seidel: diverging after {} steps", iter);
            return Ok(None);
        }
    }

    warn!("seidel: no convergence within {} steps", config.max_iterations);
    Ok(None)
}

/// One forward-substitution sweep, overwriting `x` in place. Entries before
/// `i` already hold the new iterate, entries after it the old one.
fn sweep(a: &Matrix, b: &Vector, x: &mut Vector) {
    for i in 0..a.dim() {
        let row = a.row(i);
        let off: f64 = row
            .iter()
            .zip(x.as_slice())
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, (a_ij, x_j))| a_ij * x_j)
            .sum();
        x[i] = (b[i] - off) / row[i];
    }
}
