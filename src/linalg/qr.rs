use super::givens::Givens;
use super::householder::Householder;
use super::is_near_zero;
use crate::matrix::Vector;
use crate::Matrix;

/// Which elementary transform a general QR factorization eliminates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QrMethod {
    #[default]
    Givens,
    Householder,
}

impl QrMethod {
    /// Factor `a` with this method.
    pub fn factor(self, a: &Matrix) -> QrDecomposition {
        match self {
            QrMethod::Givens => qr_givens(a),
            QrMethod::Householder => qr_householder(a),
        }
    }
}

/// `A = Q·R` with `Q` orthogonal and `R` upper-triangular.
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition {
    q: Matrix,
    r: Matrix,
}

impl QrDecomposition {
    /// The orthogonal factor.
    #[inline]
    pub fn q(&self) -> &Matrix {
        &self.q
    }

    /// The upper-triangular factor.
    #[inline]
    pub fn r(&self) -> &Matrix {
        &self.r
    }

    /// `(Q, R)`.
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.q, self.r)
    }

    /// `Q·R`.
    pub fn reconstruct(&self) -> Matrix {
        &self.q * &self.r
    }
}

/// QR factorization by Givens rotations.
///
/// Columns whose entries at and below the diagonal are all below
/// [`NEAR_ZERO`](super::NEAR_ZERO) are skipped as already eliminated.
/// Every other nonzero sub-diagonal entry is rotated into the diagonal row.
///
/// ```
/// use symeig::Matrix;
/// use symeig::linalg::qr_givens;
///
/// let a = Matrix::new([[6.0, 5.0, 0.0], [5.0, 1.0, 4.0], [0.0, 4.0, 3.0]]);
/// let qr = qr_givens(&a);
/// assert!(qr.r()[(1, 0)].abs() < 1e-12);
/// assert!(qr.r()[(2, 1)].abs() < 1e-12);
/// assert!(qr.reconstruct().max_abs_diff(&a) < 1e-6);
/// ```
pub fn qr_givens(a: &Matrix) -> QrDecomposition {
    let n = a.dim();
    let mut r = a.clone();
    let mut q = Matrix::identity(n);

    for c in 0..n {
        if (c..n).all(|row| is_near_zero(r[(row, c)])) {
            continue;
        }
        for i in (c + 1)..n {
            if r[(i, c)] == 0.0 {
                continue;
            }
            let g = Givens::new(c, i, r[(c, c)], r[(i, c)]);
            g.apply_left(&mut r);
            g.apply_right_transpose(&mut q);
            r[(i, c)] = 0.0;
        }
    }

    QrDecomposition { q, r }
}

/// QR factorization by Householder reflections.
///
/// Column `c` is reflected onto the `c`-th axis; near-zero sub-columns and
/// columns with nothing below the diagonal are skipped.
pub fn qr_householder(a: &Matrix) -> QrDecomposition {
    let n = a.dim();
    let mut r = a.clone();
    let mut q = Matrix::identity(n);

    for c in 0..n {
        if ((c + 1)..n).all(|row| r[(row, c)] == 0.0) {
            continue;
        }
        let x = Vector::from_fn(n, |i| if i >= c { r[(i, c)] } else { 0.0 });
        let Some(h) = Householder::to_axis(&x, c) else {
            continue;
        };
        h.apply_left(&mut r);
        h.apply_right(&mut q);
        for row in (c + 1)..n {
            r[(row, c)] = 0.0;
        }
    }

    QrDecomposition { q, r }
}

/// Reduce a tridiagonal `r` to upper-triangular form in place, eliminating
/// only the sub-diagonal of columns `0..window-1`. Returns the rotations in
/// the order they were applied.
///
/// Each rotation touches three columns, so a full reduction costs O(n).
pub(crate) fn banded_reduce(r: &mut Matrix, window: usize) -> Vec<Givens> {
    let n = r.dim();
    let window = window.min(n);
    let mut rotations = Vec::with_capacity(window.saturating_sub(1));

    for c in 0..window.saturating_sub(1) {
        let below = r[(c + 1, c)];
        if below == 0.0 {
            continue;
        }
        let g = Givens::new(c, c + 1, r[(c, c)], below);
        g.apply_left_cols(r, c..(c + 3).min(n));
        r[(c + 1, c)] = 0.0;
        rotations.push(g);
    }

    rotations
}

/// QR factorization of a tridiagonal matrix, restricted to the leading
/// `window x window` block (the whole matrix when `None`).
///
/// Only the sub-diagonal entry `(c+1, c)` can be nonzero in column `c`, so
/// each column needs at most one rotation. Columns at or beyond the window
/// are left as they are.
///
/// ```
/// use symeig::Matrix;
/// use symeig::linalg::qr_banded;
///
/// let t = Matrix::new([[2.0, 1.0, 0.0], [1.0, 2.0, 1.0], [0.0, 1.0, 2.0]]);
/// let qr = qr_banded(&t, None);
/// assert!(qr.r().is_upper_triangular(1e-12));
/// assert!(qr.reconstruct().max_abs_diff(&t) < 1e-12);
/// ```
pub fn qr_banded(a: &Matrix, window: Option<usize>) -> QrDecomposition {
    let n = a.dim();
    let mut r = a.clone();
    let rotations = banded_reduce(&mut r, window.unwrap_or(n));

    let mut q = Matrix::identity(n);
    for g in &rotations {
        let (c, _) = g.rows();
        // Q stays upper Hessenberg: columns c, c+1 are nonzero in rows 0..=c+1.
        g.apply_right_transpose_rows(&mut q, 0..(c + 2).min(n));
    }

    QrDecomposition { q, r }
}

/// `R·Q` for an `R` whose nonzeros lie on the diagonal and the two diagonals
/// above it (the `R` factor of a tridiagonal matrix). O(n²).
pub fn mul_upper_banded(r: &Matrix, q: &Matrix) -> Matrix {
    let n = r.dim();
    assert_eq!(
        n,
        q.dim(),
        "dimension mismatch: {}x{} * {}x{}",
        n,
        n,
        q.dim(),
        q.dim(),
    );
    let mut out = Matrix::zeros(n);
    for i in 0..n {
        for k in i..(i + 3).min(n) {
            let r_ik = r[(i, k)];
            if r_ik == 0.0 {
                continue;
            }
            for j in 0..n {
                out[(i, j)] += r_ik * q[(k, j)];
            }
        }
    }
    out
}
