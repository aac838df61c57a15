use crate::matrix::Vector;
use crate::Matrix;

/// Householder reflection `H = I - 2·v·vᵀ` with `‖v‖ = 1`.
///
/// Entries of `v` before the first nonzero one are skipped when applying,
/// so a reflector built from a sub-column only touches the trailing rows
/// (or columns) it acts on.
///
/// ```
/// use symeig::{Matrix, Vector};
/// use symeig::linalg::Householder;
///
/// let x = Vector::from_slice(&[0.0, 3.0, 4.0]);
/// let h = Householder::to_axis(&x, 1).unwrap();
/// let y = h.reflect(&x);
/// assert!((y[1].abs() - 5.0).abs() < 1e-12);
/// assert!(y[2].abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Householder {
    v: Vector,
    start: usize,
}

impl Householder {
    /// Reflector across the hyperplane orthogonal to `v`. `v` is normalized.
    ///
    /// A zero `v` yields the identity.
    pub fn new(v: &Vector) -> Self {
        let v = v.normalize();
        let start = v
            .as_slice()
            .iter()
            .position(|&x| x != 0.0)
            .unwrap_or(v.len());
        Self { v, start }
    }

    /// Reflector mapping `x` onto the `k`-th coordinate axis.
    ///
    /// Built as `normalize(normalize(x) + sign(x_k)·e_k)`, so the image is
    /// `-sign(x_k)·‖x‖·e_k`. Returns `None` when `x` is numerically zero;
    /// there is nothing to reflect and the caller should skip the step.
    pub fn to_axis(x: &Vector, k: usize) -> Option<Self> {
        if x.is_near_zero() {
            return None;
        }
        let mut u = x.normalize();
        let sign = if u[k] >= 0.0 { 1.0 } else { -1.0 };
        u[k] += sign;
        Some(Self::new(&u))
    }

    /// The unit reflector vector.
    #[inline]
    pub fn vector(&self) -> &Vector {
        &self.v
    }

    /// `H·x`.
    pub fn reflect(&self, x: &Vector) -> Vector {
        let t = 2.0 * self.v.dot(x);
        x - &(&self.v * t)
    }

    /// `A := H·A = A - 2·v·(vᵀA)`, restricted to the rows where `v` is nonzero.
    pub fn apply_left(&self, a: &mut Matrix) {
        let n = a.dim();
        assert_eq!(n, self.v.len(), "dimension mismatch: reflector vs matrix");
        let v = self.v.as_slice();

        let mut vt_a = vec![0.0; n];
        for r in self.start..n {
            if v[r] == 0.0 {
                continue;
            }
            for (acc, &x) in vt_a.iter_mut().zip(a.row(r)) {
                *acc += v[r] * x;
            }
        }

        for r in self.start..n {
            let scale = 2.0 * v[r];
            if scale == 0.0 {
                continue;
            }
            for (x, &w) in a.row_mut(r).iter_mut().zip(vt_a.iter()) {
                *x -= scale * w;
            }
        }
    }

    /// `A := A·H = A - 2·(A·v)·vᵀ`, restricted to the columns where `v` is nonzero.
    pub fn apply_right(&self, a: &mut Matrix) {
        let n = a.dim();
        assert_eq!(n, self.v.len(), "dimension mismatch: reflector vs matrix");
        let v = &self.v.as_slice()[self.start..];

        for r in 0..n {
            let row = &mut a.row_mut(r)[self.start..];
            let t: f64 = row.iter().zip(v).map(|(&x, &y)| x * y).sum();
            if t == 0.0 {
                continue;
            }
            let t2 = 2.0 * t;
            for (x, &y) in row.iter_mut().zip(v) {
                *x -= t2 * y;
            }
        }
    }

    /// The reflection as a dense `n x n` matrix.
    pub fn to_matrix(&self) -> Matrix {
        Matrix::identity(self.v.len()) - self.v.outer(&self.v) * 2.0
    }
}
