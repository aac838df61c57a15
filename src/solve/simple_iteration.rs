use log::{debug, trace, warn};

use super::{check_dimension, start_vector, GrowthStreak};
use crate::linalg::{gershgorin_circles, LinalgError};
use crate::matrix::Vector;
use crate::{IterConfig, Matrix};

/// Fixed-point iteration for `x = A·x + b`.
///
/// Converges when `‖x - A·x - b‖ < config.tolerance`. If no Gershgorin disc
/// bound guarantees a contraction (`max(|center| + radius) >= 1`) and `‖x‖`
/// has grown by at least 1 for `config.divergence_streak` consecutive steps,
/// the iteration is abandoned. `Ok(None)` on divergence or when the
/// iteration cap runs out.
///
/// ```
/// use symeig::{IterConfig, Matrix};
/// use symeig::matrix::Vector;
/// use symeig::solve::simple_iteration;
///
/// let a = Matrix::new([[0.5, 0.0], [0.0, 0.25]]);
/// let b = Vector::from_slice(&[1.0, 3.0]);
/// let cfg = IterConfig::default().with_tolerance(1e-10);
/// let x = simple_iteration(&a, &b, &cfg).unwrap().unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-9);
/// assert!((x[1] - 4.0).abs() < 1e-9);
/// ```
pub fn simple_iteration(
    a: &Matrix,
    b: &Vector,
    config: &IterConfig,
) -> Result<Option<Vector>, LinalgError> {
    check_dimension(a, b)?;

    let reach = gershgorin_circles(a)
        .iter()
        .fold(0.0, |m: f64, c| m.max(c.reach()));
    let may_diverge = reach >= 1.0;

    let mut x = start_vector(b.len());
    let mut growth = GrowthStreak::new(&x);

    for iter in 1..=config.max_iterations {
        x = &(a * &x) + b;
        let streak = growth.update(&x);

        let residual = (&(&x - &(a * &x)) - b).norm();
        trace!("simple iteration: step {} residual {:e}", iter, residual);
        if residual < config.tolerance {
            debug!("simple iteration: converged after {} steps", iter);
            return Ok(Some(x));
        }
        if may_diverge && streak >= config.divergence_streak {
            debug!(
                "simple iteration: diverging after {} steps (disc reach {})",
                iter, reach
            );
            return Ok(None);
        }
    }

    warn!(
        "simple iteration: no convergence within {} steps",
        config.max_iterations
    );
    Ok(None)
}
