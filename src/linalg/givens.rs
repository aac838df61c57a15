use core::ops::Range;

use crate::Matrix;

/// Plane rotation acting on rows `i` and `j`.
///
/// As a matrix, `G` equals the identity except for
/// `G[i][i] = c`, `G[i][j] = s`, `G[j][i] = -s`, `G[j][j] = c`,
/// with `c² + s² = 1`.
///
/// ```
/// use symeig::Matrix;
/// use symeig::linalg::Givens;
///
/// let mut a = Matrix::new([[6.0, 5.0, 0.0], [5.0, 1.0, 4.0], [0.0, 4.0, 3.0]]);
/// let g = Givens::new(0, 1, a[(0, 0)], a[(1, 0)]);
/// g.apply_left(&mut a);
/// assert!(a[(1, 0)].abs() < 1e-12);
/// assert!((a[(0, 0)] - 61.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Givens {
    i: usize,
    j: usize,
    c: f64,
    s: f64,
}

impl Givens {
    /// Rotation that zeroes `x_j` against `x_i`, entries of one column at
    /// rows `i` and `j`. Row `i` receives `hypot(x_i, x_j)`.
    ///
    /// Both zero gives the identity rotation.
    pub fn new(i: usize, j: usize, x_i: f64, x_j: f64) -> Self {
        debug_assert_ne!(i, j, "rotation rows must differ");
        let r = x_i.hypot(x_j);
        if r == 0.0 {
            return Self { i, j, c: 1.0, s: 0.0 };
        }
        Self {
            i,
            j,
            c: x_i / r,
            s: x_j / r,
        }
    }

    /// The rows this rotation mixes, `(i, j)`.
    #[inline]
    pub fn rows(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    #[inline]
    pub fn cos(&self) -> f64 {
        self.c
    }

    #[inline]
    pub fn sin(&self) -> f64 {
        self.s
    }

    /// Whether this is the identity rotation.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.c == 1.0 && self.s == 0.0
    }

    /// The inverse rotation `Gᵀ`.
    pub fn transpose(&self) -> Self {
        Self {
            s: -self.s,
            ..*self
        }
    }

    /// `A := G·A`.
    pub fn apply_left(&self, a: &mut Matrix) {
        let n = a.dim();
        self.apply_left_cols(a, 0..n);
    }

    /// `A := G·A`, touching only the given column range of rows `i` and `j`.
    ///
    /// Callers use this when the columns outside `cols` are known to be zero
    /// in both rows.
    pub fn apply_left_cols(&self, a: &mut Matrix, cols: Range<usize>) {
        let (c, s) = (self.c, self.s);
        let (ri, rj) = a.two_rows_mut(self.i, self.j);
        for k in cols {
            let x = ri[k];
            let y = rj[k];
            ri[k] = c * x + s * y;
            rj[k] = c * y - s * x;
        }
    }

    /// `A := A·Gᵀ`.
    pub fn apply_right_transpose(&self, a: &mut Matrix) {
        let n = a.dim();
        self.apply_right_transpose_rows(a, 0..n);
    }

    /// `A := A·Gᵀ`, touching only the given row range of columns `i` and `j`.
    pub fn apply_right_transpose_rows(&self, a: &mut Matrix, rows: Range<usize>) {
        let (c, s) = (self.c, self.s);
        for r in rows {
            let x = a[(r, self.i)];
            let y = a[(r, self.j)];
            a[(r, self.i)] = c * x + s * y;
            a[(r, self.j)] = c * y - s * x;
        }
    }

    /// The rotation as a dense `n x n` matrix.
    pub fn to_matrix(&self, n: usize) -> Matrix {
        let mut g = Matrix::identity(n);
        g[(self.i, self.i)] = self.c;
        g[(self.i, self.j)] = self.s;
        g[(self.j, self.i)] = -self.s;
        g[(self.j, self.j)] = self.c;
        g
    }
}
