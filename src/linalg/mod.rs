pub(crate) mod eigen_qr;
pub(crate) mod gershgorin;
pub(crate) mod givens;
pub(crate) mod householder;
pub(crate) mod qr;
pub(crate) mod shifted;
pub(crate) mod symmetric_eigen;
pub(crate) mod tridiagonal;

pub use eigen_qr::{eigen_qr, eigen_qr_tridiagonal};
pub use gershgorin::{gershgorin_circles, max_radius, GershgorinCircle};
pub use givens::Givens;
pub use householder::Householder;
pub use qr::{mul_upper_banded, qr_banded, qr_givens, qr_householder, QrDecomposition, QrMethod};
pub use shifted::{eigen_qr_shifted, wilkinson_shift};
pub use symmetric_eigen::{Eigen, SymmetricEigen};
pub use tridiagonal::tridiagonalize;

/// Magnitude below which an entry, column or vector counts as zero.
///
/// Used for pivot search, zero-column skips and the symmetry check.
pub const NEAR_ZERO: f64 = 1e-6;

/// Errors from linear algebra operations.
///
/// Non-convergence is not an error: iterative routines return `None` when
/// their iteration budget runs out.
///
/// ```
/// use symeig::Matrix;
/// use symeig::linalg::{tridiagonalize, LinalgError};
///
/// let asym = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(
///     tridiagonalize(&asym).unwrap_err(),
///     LinalgError::NotSymmetric { row: 0, col: 1 },
/// );
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinalgError {
    /// `A[row][col]` and `A[col][row]` differ by more than [`NEAR_ZERO`].
    #[error("matrix is not symmetric: entries ({row}, {col}) and ({col}, {row}) differ")]
    NotSymmetric { row: usize, col: usize },

    /// A literal row has the wrong number of entries.
    #[error("row {row} has {len} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Operands have incompatible dimensions.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A diagonal entry required as a pivot is zero.
    #[error("zero diagonal entry at index {index}")]
    ZeroDiagonal { index: usize },

    /// Malformed matrix text.
    #[error("cannot parse matrix: {0}")]
    Parse(String),
}

/// `|x| < NEAR_ZERO`.
#[inline]
pub(crate) fn is_near_zero(x: f64) -> bool {
    x.abs() < NEAR_ZERO
}
