use log::{debug, trace, warn};

use crate::matrix::Vector;
use crate::{IterConfig, Matrix};

/// Power iteration for the eigenvalue of largest magnitude.
///
/// Starts from the all-ones vector and repeats `v := A·v / ‖A·v‖`,
/// `λ := vᵀ·A·v` until `‖A·v - λ·v‖ < config.tolerance`. Returns the unit
/// eigenvector and its eigenvalue, or `None` when the cap runs out (for
/// example when two eigenvalues share the largest magnitude).
///
/// If `A·v` vanishes, `v` is an eigenvector for eigenvalue 0 and is
/// returned as is.
///
/// ```
/// use symeig::{IterConfig, Matrix};
/// use symeig::solve::power_iteration;
///
/// let a = Matrix::new([[2.0, 1.0], [1.0, 2.0]]);
/// let cfg = IterConfig::default().with_tolerance(1e-10);
/// let (v, lambda) = power_iteration(&a, &cfg).unwrap();
/// assert!((lambda - 3.0).abs() < 1e-9);
/// assert!((v[0] - v[1]).abs() < 1e-9);
/// ```
pub fn power_iteration(a: &Matrix, config: &IterConfig) -> Option<(Vector, f64)> {
    let n = a.dim();
    if n == 0 {
        return None;
    }
    let mut v = Vector::from_fn(n, |_| 1.0).normalize();

    for iter in 1..=config.max_iterations {
        let av = a * &v;
        if av.is_near_zero() {
            debug!("power iteration: A·v vanished at step {}", iter);
            return Some((v, 0.0));
        }
        v = av.normalize();

        let av = a * &v;
        let lambda = v.dot(&av);
        let residual = (&av - &(&v * lambda)).norm();
        trace!("power iteration: step {} λ {} residual {:e}", iter, lambda, residual);
        if residual < config.tolerance {
            debug!("power iteration: λ = {} after {} steps", lambda, iter);
            return Some((v, lambda));
        }
    }

    warn!(
        "power iteration: no convergence within {} steps",
        config.max_iterations
    );
    None
}
