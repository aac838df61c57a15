//! Iterative solvers: fixed-point and Gauss–Seidel iteration for linear
//! systems, and power iteration for the dominant eigenpair.
//!
//! All of them report running out of iterations (or detected divergence) as
//! `None`; malformed input is an `Err`.
//!
//! - [`simple_iteration`]: `x := A·x + b` for systems written as `x = A·x + b`
//! - [`seidel`]: Gauss–Seidel for `A·x = b`
//! - [`power_iteration`]: largest-magnitude eigenvalue and its eigenvector
//!
//! The linear solvers start from a fixed, reproducible vector (see
//! [`start_vector`]) and give up early when `‖x‖` keeps growing; tuning lives
//! in [`IterConfig`](crate::IterConfig).

mod power;
mod seidel;
mod simple_iteration;


pub use power::power_iteration;
pub use seidel::seidel;
pub use simple_iteration::simple_iteration;

use crate::linalg::LinalgError;
use crate::matrix::Vector;
use crate::Matrix;

/// Deterministic starting point: `x[i] = (3·x[i-1] + 1) mod n`, seeded with 0
/// before the first entry.
///
/// ```
/// use symeig::solve::start_vector;
///
/// assert_eq!(start_vector(5).as_slice(), &[1.0, 4.0, 3.0, 0.0, 1.0]);
/// assert_eq!(start_vector(1).as_slice(), &[0.0]);
/// ```
pub fn start_vector(n: usize) -> Vector {
    let mut t = 0usize;
    Vector::from_vec(
        (0..n)
            .map(|_| {
                t = (3 * t + 1) % n;
                t as f64
            })
            .collect(),
    )
}

fn check_dimension(a: &Matrix, b: &Vector) -> Result<(), LinalgError> {
    if a.dim() == b.len() {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch {
            expected: a.dim(),
            got: b.len(),
        })
    }
}

/// Counts consecutive steps in which `‖x‖` grew by at least 1.
#[derive(Debug, Clone, Copy)]
struct GrowthStreak {
    prev_norm: f64,
    streak: usize,
}

impl GrowthStreak {
    fn new(x: &Vector) -> Self {
        Self {
            prev_norm: x.norm(),
            streak: 0,
        }
    }

    /// Record the new iterate and return the current streak length.
    fn update(&mut self, x: &Vector) -> usize {
        let norm = x.norm();
        if norm >= self.prev_norm + 1.0 {
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.prev_norm = norm;
        self.streak
    }
}
