use log::debug;

use super::householder::Householder;
use super::{LinalgError, NEAR_ZERO};
use crate::matrix::Vector;
use crate::Matrix;

/// Householder tridiagonalization of a symmetric matrix.
///
/// Returns `(T, Q)` with `T` symmetric tridiagonal, `Q` orthogonal and
/// `Qᵀ·A·Q = T`. Each reflector is applied from both sides (`H·A·H`), so `T`
/// stays symmetric. Entries eliminated by a reflector are stored as exact
/// zeros, as are out-of-band entries of a sub-column too small to reflect.
///
/// Fails with [`LinalgError::NotSymmetric`] if `A[i][j]` and `A[j][i]` differ
/// by [`NEAR_ZERO`] or more.
///
/// ```
/// use symeig::Matrix;
/// use symeig::linalg::tridiagonalize;
///
/// let a = Matrix::new([
///     [1.0, 3.0, 3.0, 7.0],
///     [3.0, 4.0, 0.0, 9.0],
///     [3.0, 0.0, 0.0, 6.0],
///     [7.0, 9.0, 6.0, 9.0],
/// ]);
/// let (t, q) = tridiagonalize(&a).unwrap();
/// assert_eq!(t[(0, 2)], 0.0);
/// assert_eq!(t[(3, 0)], 0.0);
/// let back = &(&q.transpose() * &a) * &q;
/// assert!(back.max_abs_diff(&t) < 1e-10);
/// ```
pub fn tridiagonalize(a: &Matrix) -> Result<(Matrix, Matrix), LinalgError> {
    if let Some((row, col)) = a.first_asymmetry(NEAR_ZERO) {
        return Err(LinalgError::NotSymmetric { row, col });
    }

    let n = a.dim();
    let mut t = a.clone();
    let mut q = Matrix::identity(n);
    let mut reflections = 0usize;

    for c in 0..n.saturating_sub(2) {
        if ((c + 2)..n).all(|i| t[(i, c)] == 0.0) {
            continue;
        }
        let x = Vector::from_fn(n, |i| if i > c { t[(i, c)] } else { 0.0 });
        let Some(h) = Householder::to_axis(&x, c + 1) else {
            // negligible sub-column: drop what lies outside the band
            for i in (c + 2)..n {
                t[(i, c)] = 0.0;
                t[(c, i)] = 0.0;
            }
            continue;
        };

        h.apply_left(&mut t);
        h.apply_right(&mut t);
        h.apply_right(&mut q);
        for i in (c + 2)..n {
            t[(i, c)] = 0.0;
            t[(c, i)] = 0.0;
        }
        reflections += 1;
    }

    debug!("tridiagonalized {}x{} matrix with {} reflections", n, n, reflections);
    Ok((t, q))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn check(a: &Matrix) -> (Matrix, Matrix) {
        let (t, q) = tridiagonalize(a).unwrap();
        assert!(t.is_tridiagonal(1e-300), "not tridiagonal:\n{}", t);
        assert!(t.is_symmetric(TOL));
        let qtq = &q.transpose() * &q;
        assert!(qtq.max_abs_diff(&Matrix::identity(a.dim())) < TOL);
        let back = &(&q.transpose() * a) * &q;
        assert!(back.max_abs_diff(&t) < TOL, "QᵀAQ:\n{}\nT:\n{}", back, t);
        assert!((t.trace() - a.trace()).abs() < TOL);
        (t, q)
    }

    #[test]
    fn four_by_four() {
        let a = Matrix::new([
            [1.0, 3.0, 3.0, 7.0],
            [3.0, 4.0, 0.0, 9.0],
            [3.0, 0.0, 0.0, 6.0],
            [7.0, 9.0, 6.0, 9.0],
        ]);
        let (t, _) = check(&a);
        for &(i, j) in &[(0, 2), (0, 3), (2, 0), (3, 0), (1, 3), (3, 1)] {
            assert_eq!(t[(i, j)], 0.0, "T[({},{})]", i, j);
        }
    }

    #[test]
    fn dense_six_by_six() {
        let a = Matrix::from_fn(6, |i, j| 1.0 / (1.0 + i as f64 + j as f64) + (i * j) as f64);
        check(&a);
    }

    #[test]
    fn already_tridiagonal_is_untouched() {
        let a = Matrix::new([[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
        let (t, q) = check(&a);
        assert_eq!(t, a);
        assert_eq!(q, Matrix::identity(3));
    }

    #[test]
    fn small_sizes() {
        for a in [
            Matrix::zeros(0),
            Matrix::new([[5.0]]),
            Matrix::new([[1.0, 2.0], [2.0, 1.0]]),
        ] {
            let (t, q) = tridiagonalize(&a).unwrap();
            assert_eq!(t, a);
            assert_eq!(q, Matrix::identity(a.dim()));
        }
    }

    #[test]
    fn negligible_sub_column_is_cleared() {
        let a = Matrix::new([[1.0, 0.0, 1e-8], [0.0, 2.0, 0.0], [1e-8, 0.0, 3.0]]);
        let (t, q) = tridiagonalize(&a).unwrap();
        assert!(t.is_tridiagonal(1e-300), "not tridiagonal:\n{}", t);
        assert_eq!(t[(0, 2)], 0.0);
        assert_eq!(t[(2, 0)], 0.0);
        assert_eq!(q, Matrix::identity(3));
        assert!(t.max_abs_diff(&a) <= 1e-8);
    }

    #[test]
    fn zero_sub_column_is_skipped() {
        // Column 0 is already reduced; column 1 needs a reflector.
        let a = Matrix::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 1.0, 1.0],
            [0.0, 1.0, 3.0, 0.0],
            [0.0, 1.0, 0.0, 4.0],
        ]);
        let (t, q) = check(&a);
        assert_eq!(t.row(0), a.row(0));
        assert_eq!(q.row(0), &[1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn rejects_asymmetric() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(
            tridiagonalize(&a).unwrap_err(),
            LinalgError::NotSymmetric { row: 0, col: 1 }
        );
    }

    #[test]
    fn tolerates_tiny_asymmetry() {
        let a = Matrix::new([[1.0, 2.0, 3.0], [2.0 + 1e-9, 4.0, 5.0], [3.0, 5.0, 6.0]]);
        assert!(tridiagonalize(&a).is_ok());
    }
}
