use log::{debug, trace, warn};

use super::givens::Givens;
use super::qr::banded_reduce;
use super::symmetric_eigen::Eigen;
use crate::{EigenConfig, Matrix};

/// Wilkinson shift for the trailing block `[[d, e], [e, f]]`: the block
/// eigenvalue closer to `f`.
///
/// ```
/// use symeig::linalg::wilkinson_shift;
///
/// // [[2, 1], [1, 2]] has eigenvalues 1 and 3; equal distance picks the larger.
/// assert_eq!(wilkinson_shift(2.0, 1.0, 2.0), 3.0);
/// // [[0, 1], [1, 3]]: roots 1.5 ± sqrt(13)/2, the larger is nearer 3.
/// let mu = wilkinson_shift(0.0, 1.0, 3.0);
/// assert!((mu - (1.5 + 13.0_f64.sqrt() / 2.0)).abs() < 1e-12);
/// ```
pub fn wilkinson_shift(d: f64, e: f64, f: f64) -> f64 {
    let mid = 0.5 * (d + f);
    let half_gap = 0.5 * (d - f).hypot(2.0 * e);
    let lo = mid - half_gap;
    let hi = mid + half_gap;
    if (lo - f).abs() < (hi - f).abs() {
        lo
    } else {
        hi
    }
}

/// Eigenvalues (and optionally eigenvectors) of a symmetric tridiagonal
/// matrix by the Wilkinson-shifted QR algorithm with deflation.
///
/// The input must already be symmetric tridiagonal (see
/// [`tridiagonalize`](super::tridiagonalize)); entries outside the band are
/// ignored. The active block shrinks from the bottom: once
/// `|A[i][i-1]| < config.tolerance` the entry `A[i][i]` is taken as
/// eigenvalue `i` and the coupling is dropped. Each step costs O(n²) with
/// vectors and O(n) band work plus an O(n²) band cleanup without.
///
/// Eigenvalues are returned by deflation position, not sorted. Without
/// `compute_vectors` the eigenvector matrix is the identity. Returns `None`
/// when a single deflation needs more than `config.max_iterations` steps.
///
/// ```
/// use symeig::{EigenConfig, Matrix};
/// use symeig::linalg::eigen_qr_shifted;
///
/// let t = Matrix::new([[2.0, 1.0, 0.0], [1.0, 2.0, 1.0], [0.0, 1.0, 2.0]]);
/// let cfg = EigenConfig::default().with_tolerance(1e-12);
/// let eig = eigen_qr_shifted(&t, false, &cfg).unwrap().sorted();
/// let s = 2.0_f64.sqrt();
/// for (got, want) in eig.eigenvalues().iter().zip([2.0 - s, 2.0, 2.0 + s]) {
///     assert!((got - want).abs() < 1e-10);
/// }
/// ```
pub fn eigen_qr_shifted(
    a: &Matrix,
    compute_vectors: bool,
    config: &EigenConfig,
) -> Option<Eigen> {
    let n = a.dim();
    let mut q = Matrix::identity(n);

    match n {
        0 => return Some(Eigen::new(Vec::new(), q)),
        1 => return Some(Eigen::new(vec![a[(0, 0)]], q)),
        _ => {}
    }

    let mut t = a.clone();
    restore_band(&mut t, n);
    let mut eigenvalues = vec![0.0; n];
    let mut total_steps = 0usize;

    for i in (1..n).rev() {
        let mut steps = 0usize;
        while t[(i, i - 1)].abs() >= config.tolerance {
            if steps == config.max_iterations {
                warn!(
                    "shifted QR: index {} not deflated after {} steps (sub-diagonal {:e})",
                    i,
                    steps,
                    t[(i, i - 1)]
                );
                return None;
            }
            steps += 1;

            let mu = wilkinson_shift(t[(i - 1, i - 1)], t[(i, i - 1)], t[(i, i)]);
            let q_acc = if compute_vectors { Some(&mut q) } else { None };
            shifted_step(&mut t, mu, i + 1, q_acc);
            trace!(
                "shifted QR: index {} step {} shift {} sub-diagonal {:e}",
                i,
                steps,
                mu,
                t[(i, i - 1)]
            );
        }

        eigenvalues[i] = t[(i, i)];
        t[(i, i - 1)] = 0.0;
        t[(i - 1, i)] = 0.0;
        total_steps += steps;
        debug!(
            "shifted QR: deflated index {} = {} after {} steps",
            i, eigenvalues[i], steps
        );
    }
    eigenvalues[0] = t[(0, 0)];

    debug!("shifted QR: {}x{} converged in {} steps", n, n, total_steps);
    Some(Eigen::new(eigenvalues, q))
}

/// One implicit-shift QR step on the leading `window x window` block:
/// `A := R·Q + μI` where `Q·R = A - μI` (shift applied inside the window only).
fn shifted_step(t: &mut Matrix, mu: f64, window: usize, q: Option<&mut Matrix>) {
    let n = t.dim();
    for k in 0..window {
        t[(k, k)] -= mu;
    }

    let rotations = banded_reduce(t, window);
    for g in &rotations {
        let (c, _) = g.rows();
        g.apply_right_transpose_rows(t, 0..(c + 2).min(n));
    }

    for k in 0..window {
        t[(k, k)] += mu;
    }
    restore_band(t, window);

    if let Some(q) = q {
        accumulate(q, &rotations);
    }
}

/// `Q := Q·G_0ᵀ·G_1ᵀ·…`
fn accumulate(q: &mut Matrix, rotations: &[Givens]) {
    for g in rotations {
        g.apply_right_transpose(q);
    }
}

/// Make the leading block exactly symmetric tridiagonal: mirror each
/// sub-diagonal entry to the super-diagonal and clear rounding fill above it.
fn restore_band(t: &mut Matrix, window: usize) {
    for r in 0..window {
        if r + 1 < window {
            t[(r, r + 1)] = t[(r + 1, r)];
        }
        for j in (r + 2)..window {
            t[(r, j)] = 0.0;
            t[(j, r)] = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::tridiagonalize;

    const TOL: f64 = 1e-10;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {} (diff {})", msg, a, b, (a - b).abs());
    }

    fn tight() -> EigenConfig {
        EigenConfig::default().with_tolerance(1e-12)
    }

    #[test]
    fn shift_picks_root_nearest_trailing_entry() {
        // roots of [[5, 0], [0, 1]] are 5 and 1; 1 is the trailing entry
        assert_eq!(wilkinson_shift(5.0, 0.0, 1.0), 1.0);
        assert_eq!(wilkinson_shift(1.0, 0.0, 5.0), 5.0);
        let mu = wilkinson_shift(4.0, 2.0, -1.0);
        // mu is a root of (4 - x)(-1 - x) - 4 = 0
        assert_near((4.0 - mu) * (-1.0 - mu) - 4.0, 0.0, 1e-12, "characteristic");
        assert!(mu < 0.0);
    }

    #[test]
    fn one_by_one_returns_immediately() {
        let eig = eigen_qr_shifted(&Matrix::new([[7.5]]), true, &tight()).unwrap();
        assert_eq!(eig.eigenvalues(), &[7.5]);
        assert_eq!(eig.eigenvectors(), &Matrix::identity(1));
    }

    #[test]
    fn empty_matrix() {
        let eig = eigen_qr_shifted(&Matrix::zeros(0), true, &tight()).unwrap();
        assert!(eig.eigenvalues().is_empty());
    }

    #[test]
    fn two_by_two() {
        let a = Matrix::new([[2.0, -1.0], [-1.0, 2.0]]);
        let eig = eigen_qr_shifted(&a, true, &tight()).unwrap().sorted();
        assert_near(eig.eigenvalues()[0], 1.0, TOL, "λ0");
        assert_near(eig.eigenvalues()[1], 3.0, TOL, "λ1");
    }

    #[test]
    fn already_diagonal_needs_no_steps() {
        let a = Matrix::from_diag(&[3.0, -1.0, 2.0]);
        let eig = eigen_qr_shifted(&a, true, &tight()).unwrap();
        assert_eq!(eig.eigenvalues(), &[3.0, -1.0, 2.0]);
        assert_eq!(eig.eigenvectors(), &Matrix::identity(3));
    }

    #[test]
    fn eigenpairs_of_tridiagonal() {
        let t = Matrix::new([
            [4.0, 1.0, 0.0, 0.0, 0.0],
            [1.0, -3.0, 2.0, 0.0, 0.0],
            [0.0, 2.0, 1.0, 0.5, 0.0],
            [0.0, 0.0, 0.5, 6.0, -1.0],
            [0.0, 0.0, 0.0, -1.0, 2.0],
        ]);
        let eig = eigen_qr_shifted(&t, true, &tight()).unwrap();
        let q = eig.eigenvectors();

        let qtq = &q.transpose() * q;
        assert!(qtq.max_abs_diff(&Matrix::identity(5)) < TOL);

        for k in 0..5 {
            let v = q.col(k);
            let tv = &t * &v;
            let lv = &v * eig.eigenvalues()[k];
            assert!((&tv - &lv).norm() < 1e-9, "Tv = λv for k={}", k);
        }

        let sum: f64 = eig.eigenvalues().iter().sum();
        assert_near(sum, t.trace(), TOL, "trace");
        let prod: f64 = eig.eigenvalues().iter().product();
        assert_near(prod, t.det(), 1e-8, "det");
    }

    #[test]
    fn values_do_not_depend_on_vectors_flag() {
        let t = Matrix::new([[1.0, 2.0, 0.0], [2.0, 0.0, 3.0], [0.0, 3.0, -1.0]]);
        let with = eigen_qr_shifted(&t, true, &tight()).unwrap();
        let without = eigen_qr_shifted(&t, false, &tight()).unwrap();
        assert_eq!(with.eigenvalues(), without.eigenvalues());
        assert_eq!(without.eigenvectors(), &Matrix::identity(3));
    }

    #[test]
    fn pipeline_scenario_trace_23() {
        let a = Matrix::new([
            [1.0, 3.0, 3.0, 7.0],
            [3.0, 4.0, 0.0, 9.0],
            [3.0, 0.0, 0.0, 6.0],
            [7.0, 9.0, 6.0, 9.0],
        ]);
        let (t, _) = tridiagonalize(&a).unwrap();
        let eig = eigen_qr_shifted(&t, false, &EigenConfig::default()).unwrap();
        assert_eq!(eig.eigenvalues().len(), 4);
        let sum: f64 = eig.eigenvalues().iter().sum();
        assert_near(sum, 23.0, 1e-9, "trace");
    }

    #[test]
    fn iteration_cap_reports_failure() {
        let t = Matrix::new([[1.0, 1.0, 0.0], [1.0, 2.0, 1.0], [0.0, 1.0, 3.0]]);
        let cfg = EigenConfig::default().with_tolerance(0.0).with_max_iterations(5);
        assert!(eigen_qr_shifted(&t, true, &cfg).is_none());
    }

    #[test]
    fn zero_cap_still_deflates_converged_entries() {
        let t = Matrix::from_diag(&[1.0, 2.0]);
        let cfg = EigenConfig::default().with_max_iterations(0);
        let eig = eigen_qr_shifted(&t, false, &cfg).unwrap();
        assert_eq!(eig.eigenvalues(), &[1.0, 2.0]);
    }
}
