use super::shifted::eigen_qr_shifted;
use super::tridiagonal::tridiagonalize;
use super::LinalgError;
use crate::matrix::Vector;
use crate::{EigenConfig, Matrix};

/// Eigenvalues with the matching eigenvectors as the columns of a matrix.
///
/// Column `k` of [`eigenvectors`](Eigen::eigenvectors) belongs to
/// `eigenvalues()[k]`. Ordering depends on the solver that produced it; call
/// [`sorted`](Eigen::sorted) for ascending order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eigen {
    eigenvalues: Vec<f64>,
    eigenvectors: Matrix,
}

impl Eigen {
    pub(crate) fn new(eigenvalues: Vec<f64>, eigenvectors: Matrix) -> Self {
        debug_assert_eq!(eigenvalues.len(), eigenvectors.dim());
        Self {
            eigenvalues,
            eigenvectors,
        }
    }

    #[inline]
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// The eigenvector matrix (columns are eigenvectors).
    #[inline]
    pub fn eigenvectors(&self) -> &Matrix {
        &self.eigenvectors
    }

    /// Eigenvector `k` as a vector.
    pub fn eigenvector(&self, k: usize) -> Vector {
        self.eigenvectors.col(k)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    pub fn into_parts(self) -> (Vec<f64>, Matrix) {
        (self.eigenvalues, self.eigenvectors)
    }

    /// Reorder ascending by eigenvalue, permuting eigenvector columns alongside.
    pub fn sorted(self) -> Self {
        let n = self.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&x, &y| self.eigenvalues[x].total_cmp(&self.eigenvalues[y]));

        let eigenvalues = order.iter().map(|&k| self.eigenvalues[k]).collect();
        let eigenvectors = Matrix::from_fn(n, |i, j| self.eigenvectors[(i, order[j])]);
        Self {
            eigenvalues,
            eigenvectors,
        }
    }
}

/// Symmetric eigendecomposition of a dense matrix.
///
/// Householder tridiagonalization followed by the Wilkinson-shifted QR
/// algorithm. Eigenvectors are mapped back to the basis of the input and
/// everything is sorted ascending.
///
/// # Example
///
/// ```
/// use symeig::{EigenConfig, Matrix};
/// use symeig::linalg::SymmetricEigen;
///
/// let a = Matrix::new([[2.0, -1.0], [-1.0, 2.0]]);
/// let cfg = EigenConfig::default().with_tolerance(1e-12);
/// let eig = SymmetricEigen::new(&a, &cfg).unwrap().unwrap();
/// assert!((eig.eigenvalues()[0] - 1.0).abs() < 1e-10);
/// assert!((eig.eigenvalues()[1] - 3.0).abs() < 1e-10);
///
/// // A·v ≈ λ·v for the first pair
/// let v = eig.eigenvector(0);
/// let av = &a * &v;
/// assert!((&av - &(&v * eig.eigenvalues()[0])).norm() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SymmetricEigen;

impl SymmetricEigen {
    /// Decompose a symmetric matrix.
    ///
    /// `Err(NotSymmetric)` for asymmetric input, `Ok(None)` if the QR
    /// iteration hits its cap.
    pub fn new(a: &Matrix, config: &EigenConfig) -> Result<Option<Eigen>, LinalgError> {
        let (t, q_tri) = tridiagonalize(a)?;
        let Some(eig) = eigen_qr_shifted(&t, true, config) else {
            return Ok(None);
        };
        let (values, q_qr) = eig.into_parts();
        Ok(Some(Eigen::new(values, &q_tri * &q_qr).sorted()))
    }

    /// Eigenvalues only, ascending. Skips eigenvector accumulation.
    pub fn eigenvalues_only(
        a: &Matrix,
        config: &EigenConfig,
    ) -> Result<Option<Vec<f64>>, LinalgError> {
        let (t, _) = tridiagonalize(a)?;
        Ok(eigen_qr_shifted(&t, false, config).map(|eig| {
            let mut values = eig.into_parts().0;
            values.sort_by(f64::total_cmp);
            values
        }))
    }
}

/// Deflation threshold for the convenience methods, relative to the largest
/// entry of the matrix.
const RELATIVE_TOLERANCE: f64 = 1e-13;

fn precise_config(a: &Matrix) -> EigenConfig {
    let scale = a.as_slice().iter().fold(1.0, |m: f64, x| m.max(x.abs()));
    EigenConfig::default().with_tolerance(RELATIVE_TOLERANCE * scale)
}

/// Convenience methods for symmetric eigendecomposition.
impl Matrix {
    /// Symmetric eigendecomposition with a tight deflation tolerance.
    ///
    /// Eigenvalues ascending, eigenvectors as columns.
    ///
    /// ```
    /// use symeig::Matrix;
    ///
    /// let a = Matrix::new([[5.0, 2.0], [2.0, 2.0]]);
    /// let eig = a.eig_symmetric().unwrap().unwrap();
    /// let vals = eig.eigenvalues();
    /// assert!((vals[0] - 1.0).abs() < 1e-10);
    /// assert!((vals[1] - 6.0).abs() < 1e-10);
    /// ```
    pub fn eig_symmetric(&self) -> Result<Option<Eigen>, LinalgError> {
        SymmetricEigen::new(self, &precise_config(self))
    }

    /// Eigenvalues of a symmetric matrix (no eigenvectors), ascending.
    ///
    /// ```
    /// use symeig::Matrix;
    ///
    /// let a = Matrix::new([[3.0, 1.0], [1.0, 3.0]]);
    /// let vals = a.eigenvalues_symmetric().unwrap().unwrap();
    /// assert!((vals[0] - 2.0).abs() < 1e-10);
    /// assert!((vals[1] - 4.0).abs() < 1e-10);
    /// ```
    pub fn eigenvalues_symmetric(&self) -> Result<Option<Vec<f64>>, LinalgError> {
        SymmetricEigen::eigenvalues_only(self, &precise_config(self))
    }
}
