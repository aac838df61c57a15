use super::{Matrix, Vector};

impl Matrix {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use symeig::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> f64 {
        (0..self.n).map(|i| self[(i, i)]).sum()
    }

    /// Extract the diagonal.
    pub fn diag(&self) -> Vector {
        Vector::from_fn(self.n, |i| self[(i, i)])
    }

    /// Check `|A[i][j] - A[j][i]| < tol` for every `i < j`.
    ///
    /// ```
    /// use symeig::Matrix;
    /// let sym = Matrix::new([[1.0, 2.0], [2.0, 3.0]]);
    /// assert!(sym.is_symmetric(1e-12));
    /// let asym = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert!(!asym.is_symmetric(1e-12));
    /// ```
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.first_asymmetry(tol).is_none()
    }

    /// First `(i, j)` with `i < j` whose mirrored entries differ by `tol` or more.
    pub(crate) fn first_asymmetry(&self, tol: f64) -> Option<(usize, usize)> {
        let n = self.n;
        for i in 0..n {
            for j in (i + 1)..n {
                if (self[(i, j)] - self[(j, i)]).abs() >= tol {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Whether every entry more than one position off the diagonal is below `tol`.
    pub fn is_tridiagonal(&self, tol: f64) -> bool {
        let n = self.n;
        for i in 0..n {
            for j in 0..n {
                if i.abs_diff(j) > 1 && self[(i, j)].abs() >= tol {
                    return false;
                }
            }
        }
        true
    }

    /// Whether every entry below the diagonal is below `tol`.
    pub fn is_upper_triangular(&self, tol: f64) -> bool {
        let n = self.n;
        for i in 1..n {
            for j in 0..i {
                if self[(i, j)].abs() >= tol {
                    return false;
                }
            }
        }
        true
    }

    /// Determinant via Gaussian elimination with partial pivoting.
    ///
    /// ```
    /// use symeig::Matrix;
    /// let m = Matrix::new([[3.0, 8.0], [4.0, 6.0]]);
    /// assert!((m.det() - (-14.0)).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> f64 {
        let n = self.n;
        let mut a = self.clone();
        let mut sign = 1.0;

        for col in 0..n {
            let mut max_row = col;
            let mut max_val = a[(col, col)].abs();
            for row in (col + 1)..n {
                let val = a[(row, col)].abs();
                if val > max_val {
                    max_val = val;
                    max_row = row;
                }
            }

            if max_val < f64::EPSILON {
                return 0.0;
            }

            if max_row != col {
                let (r0, r1) = a.two_rows_mut(col, max_row);
                r0.swap_with_slice(r1);
                sign = -sign;
            }

            let pivot = a[(col, col)];
            for row in (col + 1)..n {
                let factor = a[(row, col)] / pivot;
                for j in (col + 1)..n {
                    let val = a[(col, j)];
                    a[(row, j)] -= factor * val;
                }
                a[(row, col)] = 0.0;
            }
        }

        let mut det = sign;
        for i in 0..n {
            det *= a[(i, i)];
        }
        det
    }
}
