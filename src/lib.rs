//! # symeig
//!
//! Dense real eigenvalue algorithms built from elementary orthogonal
//! transforms: Givens rotations, Householder reflections, QR factorization,
//! Householder tridiagonalization and the QR algorithm (unshifted, and
//! Wilkinson-shifted with deflation).
//!
//! ## Quick start
//!
//! ```
//! use symeig::{EigenConfig, Matrix};
//! use symeig::linalg::{eigen_qr_shifted, tridiagonalize};
//!
//! let a = Matrix::new([
//!     [1.0, 3.0, 3.0, 7.0],
//!     [3.0, 4.0, 0.0, 9.0],
//!     [3.0, 0.0, 0.0, 6.0],
//!     [7.0, 9.0, 6.0, 9.0],
//! ]);
//!
//! // Qᵀ·A·Q = T, T symmetric tridiagonal
//! let (t, _q) = tridiagonalize(&a).unwrap();
//! let eig = eigen_qr_shifted(&t, false, &EigenConfig::default()).unwrap();
//! let sum: f64 = eig.eigenvalues().iter().sum();
//! assert!((sum - 23.0).abs() < 1e-9);
//!
//! // or in one go, sorted, with eigenvectors in the basis of `a`
//! let eig = a.eig_symmetric().unwrap().unwrap();
//! assert_eq!(eig.len(), 4);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: square `Matrix` with `Vec<f64>` row-major storage and a
//!   dense `Vector`. Arithmetic operators, indexing by `(row, col)`, trace,
//!   determinant, structure predicates, and a plain-text format
//!   (`Display` / `FromStr` / [`Matrix::write_to`]).
//!
//! - [`linalg`]: the eigen pipeline.
//!   - [`Givens`](linalg::Givens) and [`Householder`](linalg::Householder)
//!     elementary transforms
//!   - QR by rotations or reflections ([`qr_givens`](linalg::qr_givens),
//!     [`qr_householder`](linalg::qr_householder)) and a banded variant for
//!     tridiagonal input ([`qr_banded`](linalg::qr_banded))
//!   - [`tridiagonalize`](linalg::tridiagonalize)
//!   - [`eigen_qr`](linalg::eigen_qr), [`eigen_qr_tridiagonal`](linalg::eigen_qr_tridiagonal)
//!     and [`eigen_qr_shifted`](linalg::eigen_qr_shifted)
//!   - [`SymmetricEigen`](linalg::SymmetricEigen), the full pipeline
//!
//! - [`solve`]: fixed-point and Gauss–Seidel iteration for linear systems,
//!   power iteration.
//!
//! - [`config`]: [`EigenConfig`] and [`IterConfig`], passed to every
//!   iterative routine.
//!
//! ## Errors and convergence
//!
//! Invalid input (asymmetric matrix, ragged rows, mismatched lengths) is a
//! [`LinalgError`](linalg::LinalgError). Running out of iterations is not an
//! error: iterative routines return `None`. Progress is reported through the
//! [`log`] facade; install any logger to see it.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no      | `Serialize` / `Deserialize` for matrices, vectors, results and configs |

pub mod config;
pub mod linalg;
pub mod matrix;
pub mod solve;

pub use config::{EigenConfig, IterConfig};
pub use matrix::{Matrix, Vector};
