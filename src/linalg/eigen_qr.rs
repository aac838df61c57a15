use log::{debug, trace, warn};

use super::gershgorin::{gershgorin_circles, max_radius, GershgorinCircle};
use super::qr::{mul_upper_banded, qr_banded};
use super::symmetric_eigen::Eigen;
use crate::{EigenConfig, Matrix};

/// Unshifted QR algorithm: `A_{k+1} = R_k·Q_k` where `A_k = Q_k·R_k`.
///
/// Factors with `config.qr_method` and accumulates `Q := Q·Q_k`. Converged
/// once every Gershgorin circle of `Qᵀ·A·Q` has radius below
/// `config.tolerance`; the circle centers are then the eigenvalues and the
/// columns of `Q` the eigenvectors. Order follows the iteration, not the
/// magnitude.
///
/// Meant for symmetric input. Convergence is linear in the ratio of
/// neighbouring eigenvalue magnitudes, so eigenvalues of equal magnitude and
/// opposite sign never separate and the call returns `None` after
/// `config.max_iterations` steps.
///
/// ```
/// use symeig::{EigenConfig, Matrix};
/// use symeig::linalg::eigen_qr;
///
/// let a = Matrix::new([[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]]);
/// let cfg = EigenConfig::default().with_tolerance(1e-10);
/// let eig = eigen_qr(&a, &cfg).unwrap().sorted();
/// for (got, want) in eig.eigenvalues().iter().zip([1.0, 2.0, 4.0]) {
///     assert!((got - want).abs() < 1e-9);
/// }
/// ```
pub fn eigen_qr(a: &Matrix, config: &EigenConfig) -> Option<Eigen> {
    let mut cur = a.clone();
    let mut q = Matrix::identity(a.dim());

    let circles = iterate(config, "QR", |step| {
        if step > 0 {
            let (qk, rk) = config.qr_method.factor(&cur).into_parts();
            cur = &rk * &qk;
            q *= &qk;
        }
        let similar = &(&q.transpose() * a) * &q;
        gershgorin_circles(&similar)
    })?;
    Some(Eigen::new(centers(&circles), q))
}

/// [`eigen_qr`] for tridiagonal input.
///
/// Uses the banded factorization and the banded `R·Q` product, and reads the
/// Gershgorin circles straight off the current iterate, which is O(n²) per
/// step instead of two full matrix products.
pub fn eigen_qr_tridiagonal(a: &Matrix, config: &EigenConfig) -> Option<Eigen> {
    let mut cur = a.clone();
    let mut q = Matrix::identity(a.dim());

    let circles = iterate(config, "banded QR", |step| {
        if step > 0 {
            let (qk, rk) = qr_banded(&cur, None).into_parts();
            cur = mul_upper_banded(&rk, &qk);
            q *= &qk;
        }
        gershgorin_circles(&cur)
    })?;
    Some(Eigen::new(centers(&circles), q))
}

fn centers(circles: &[GershgorinCircle]) -> Vec<f64> {
    circles.iter().map(|c| c.center).collect()
}

/// Drive `step` until the largest Gershgorin radius drops below the
/// tolerance, returning the final circles. Step 0 only inspects the input.
fn iterate<F>(config: &EigenConfig, label: &str, mut step: F) -> Option<Vec<GershgorinCircle>>
where
    F: FnMut(usize) -> Vec<GershgorinCircle>,
{
    for k in 0..=config.max_iterations {
        let circles = step(k);
        let radius = max_radius(&circles);
        trace!("{}: step {} max radius {:e}", label, k, radius);

        if radius < config.tolerance {
            debug!("{}: converged after {} steps", label, k);
            return Some(circles);
        }
    }

    warn!(
        "{}: no convergence within {} steps (tolerance {:e})",
        label, config.max_iterations, config.tolerance
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::{tridiagonalize, QrMethod};

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {} (diff {})", msg, a, b, (a - b).abs());
    }

    fn tight() -> EigenConfig {
        EigenConfig::default().with_tolerance(1e-10)
    }

    fn check_pairs(a: &Matrix, eig: &Eigen, tol: f64) {
        for k in 0..eig.len() {
            let v = eig.eigenvector(k);
            let residual = &(a * &v) - &(&v * eig.eigenvalues()[k]);
            assert!(residual.norm() < tol, "pair {}: residual {}", k, residual.norm());
        }
    }

    #[test]
    fn known_eigenvalues_both_methods() {
        let a = Matrix::new([[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]]);
        for method in [QrMethod::Givens, QrMethod::Householder] {
            let eig = eigen_qr(&a, &tight().with_qr_method(method)).unwrap();
            check_pairs(&a, &eig, 1e-8);
            let eig = eig.sorted();
            for (k, want) in [1.0, 2.0, 4.0].into_iter().enumerate() {
                assert_near(eig.eigenvalues()[k], want, 1e-9, &format!("{:?} λ[{}]", method, k));
            }
        }
    }

    #[test]
    fn diagonal_input_converges_immediately() {
        let a = Matrix::from_diag(&[5.0, -2.0, 1.0]);
        let eig = eigen_qr(&a, &tight().with_max_iterations(0)).unwrap();
        assert_eq!(eig.eigenvalues(), &[5.0, -2.0, 1.0]);
        assert_eq!(eig.eigenvectors(), &Matrix::identity(3));
    }

    #[test]
    fn opposite_eigenvalues_do_not_converge() {
        // eigenvalues ±1 have the same magnitude
        let a = Matrix::new([[0.0, 1.0], [1.0, 0.0]]);
        assert!(eigen_qr(&a, &tight().with_max_iterations(50)).is_none());
        assert!(eigen_qr_tridiagonal(&a, &tight().with_max_iterations(50)).is_none());
    }

    #[test]
    fn trace_preserved() {
        let a = Matrix::new([
            [4.0, 1.0, 2.0, 0.5],
            [1.0, 3.0, 0.0, 1.0],
            [2.0, 0.0, -1.0, 0.0],
            [0.5, 1.0, 0.0, 7.0],
        ]);
        let eig = eigen_qr(&a, &tight()).unwrap();
        assert_near(eig.eigenvalues().iter().sum(), a.trace(), 1e-9, "trace");
        check_pairs(&a, &eig, 1e-8);
    }

    #[test]
    fn tridiagonal_variant_agrees() {
        let a = Matrix::new([
            [1.0, 3.0, 3.0, 7.0],
            [3.0, 4.0, 0.0, 9.0],
            [3.0, 0.0, 0.0, 6.0],
            [7.0, 9.0, 6.0, 9.0],
        ]);
        let (t, _) = tridiagonalize(&a).unwrap();
        let banded = eigen_qr_tridiagonal(&t, &tight()).unwrap();
        check_pairs(&t, &banded, 1e-8);
        let dense = eigen_qr(&t, &tight()).unwrap().sorted();
        let banded = banded.sorted();
        for k in 0..4 {
            assert_near(banded.eigenvalues()[k], dense.eigenvalues()[k], 1e-9, "λ");
        }
        assert_near(banded.eigenvalues().iter().sum(), 23.0, 1e-9, "trace");
    }

    #[test]
    fn empty_matrix() {
        let eig = eigen_qr(&Matrix::zeros(0), &tight()).unwrap();
        assert!(eig.is_empty());
    }
}
