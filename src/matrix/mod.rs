pub mod io;
mod ops;
mod square;
pub mod vector;

use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;

pub use vector::Vector;

/// Dense square matrix of `f64`.
///
/// Row-major `Vec<f64>` storage. The dimension is fixed at construction:
/// every operation on a matrix produces a matrix of the same size, and
/// elements are only ever mutated through indexing (`a[(i, j)] = x`).
///
/// # Examples
///
/// ```
/// use symeig::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.dim(), 2);
///
/// let id = Matrix::identity(3);
/// assert_eq!(id[(2, 2)], 1.0);
/// assert_eq!(id[(0, 2)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    pub(crate) data: Vec<f64>,
    pub(crate) n: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    /// Create an `n x n` matrix of zeros.
    ///
    /// ```
    /// use symeig::Matrix;
    /// let m = Matrix::zeros(3);
    /// assert_eq!(m.dim(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![0.0; n * n],
            n,
        }
    }

    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Create a matrix from literal rows. Squareness is checked at compile time.
    ///
    /// ```
    /// use symeig::Matrix;
    /// let m = Matrix::new([[6.0, 5.0, 0.0], [5.0, 1.0, 4.0], [0.0, 4.0, 3.0]]);
    /// assert_eq!(m[(1, 2)], 4.0);
    /// ```
    pub fn new<const N: usize>(rows: [[f64; N]; N]) -> Self {
        let mut data = Vec::with_capacity(N * N);
        for row in rows.iter() {
            data.extend_from_slice(row);
        }
        Self { data, n: N }
    }

    /// Create a matrix from runtime rows.
    ///
    /// The row count is the dimension; fails with [`LinalgError::RaggedRow`]
    /// if any row's length differs from it.
    ///
    /// ```
    /// use symeig::Matrix;
    /// use symeig::linalg::LinalgError;
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    ///
    /// let bad = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    /// assert_eq!(bad.unwrap_err(), LinalgError::RaggedRow { row: 1, len: 1, expected: 2 });
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LinalgError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(LinalgError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, n })
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use symeig::Matrix;
    /// let m = Matrix::from_fn(3, |i, j| (i * 3 + j) as f64);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_fn(n: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { data, n }
    }

    /// Create a diagonal matrix from a slice of diagonal entries.
    pub fn from_diag(d: &[f64]) -> Self {
        let mut m = Self::zeros(d.len());
        for (i, &x) in d.iter().enumerate() {
            m[(i, i)] = x;
        }
        m
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Matrix {
    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Row `i` as a mutable slice.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.n..(i + 1) * self.n]
    }

    /// Column `j` copied into a [`Vector`].
    pub fn col(&self, j: usize) -> Vector {
        Vector::from_fn(self.n, |i| self[(i, j)])
    }

    /// Row-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable references to two distinct rows, `(row a, row b)`.
    pub(crate) fn two_rows_mut(&mut self, a: usize, b: usize) -> (&mut [f64], &mut [f64]) {
        assert_ne!(a, b, "two_rows_mut requires distinct rows");
        let n = self.n;
        if a < b {
            let (lo, hi) = self.data.split_at_mut(b * n);
            (&mut lo[a * n..(a + 1) * n], &mut hi[..n])
        } else {
            let (lo, hi) = self.data.split_at_mut(a * n);
            let (rb, ra) = (&mut lo[b * n..(b + 1) * n], &mut hi[..n]);
            (ra, rb)
        }
    }

    /// Transpose.
    ///
    /// ```
    /// use symeig::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.transpose()[(0, 1)], 3.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.n, |i, j| self[(j, i)])
    }

    /// Largest absolute elementwise difference to `other`.
    ///
    /// Panics on dimension mismatch.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        assert_eq!(
            self.n, other.n,
            "dimension mismatch: {}x{} vs {}x{}",
            self.n, self.n, other.n, other.n,
        );
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(0.0, |m, (&a, &b)| f64::max(m, (a - b).abs()))
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.n + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.n + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = Matrix::zeros(3);
        assert_eq!(m.dim(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn identity() {
        let m = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn new_is_row_major() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(2, 0)], 7.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![1.0, 2.0], vec![0.0; 3]])
            .unwrap_err();
        assert_eq!(
            err,
            LinalgError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn from_rows_empty() {
        let m = Matrix::from_rows(&[]).unwrap();
        assert_eq!(m.dim(), 0);
    }

    #[test]
    fn index_mut() {
        let mut m = Matrix::zeros(2);
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
        assert_eq!(m[(1, 0)], 0.0);
    }

    #[test]
    fn two_rows_mut_both_orders() {
        let mut m = Matrix::from_fn(3, |i, j| (i * 3 + j) as f64);
        {
            let (a, b) = m.two_rows_mut(0, 2);
            assert_eq!(a, &[0.0, 1.0, 2.0]);
            assert_eq!(b, &[6.0, 7.0, 8.0]);
        }
        let (a, b) = m.two_rows_mut(2, 1);
        assert_eq!(a, &[6.0, 7.0, 8.0]);
        assert_eq!(b, &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn transpose_and_col() {
        let m = Matrix::from_fn(3, |i, j| (i * 3 + j) as f64);
        let t = m.transpose();
        assert_eq!(t[(0, 2)], 6.0);
        assert_eq!(m.col(1).as_slice(), &[1.0, 4.0, 7.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn max_abs_diff() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[1.0, 2.5], [2.0, 4.0]]);
        assert_eq!(a.max_abs_diff(&b), 1.0);
    }
}
