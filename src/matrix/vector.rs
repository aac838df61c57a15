use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use super::Matrix;
use crate::linalg::NEAR_ZERO;

/// Dense vector of `f64` with a fixed length.
///
/// # Examples
///
/// ```
/// use symeig::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]);
/// assert_eq!(v[1], 4.0);
/// assert_eq!(v.len(), 2);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![0.0; n] }
    }

    /// Create a vector from a slice.
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Create a vector from an owned `Vec`.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Create a vector by calling `f(i)` for each element.
    pub fn from_fn(n: usize, f: impl Fn(usize) -> f64) -> Self {
        Self {
            data: (0..n).map(f).collect(),
        }
    }

    /// The `k`-th standard basis vector of length `n`.
    ///
    /// ```
    /// use symeig::Vector;
    /// let e1 = Vector::basis(3, 1);
    /// assert_eq!(e1.as_slice(), &[0.0, 1.0, 0.0]);
    /// ```
    pub fn basis(n: usize, k: usize) -> Self {
        let mut v = Self::zeros(n);
        v[k] = 1.0;
        v
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Dot product. Panics on length mismatch.
    ///
    /// ```
    /// use symeig::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> f64 {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a * b)
            .sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Whether the norm is below the crate's near-zero threshold.
    pub fn is_near_zero(&self) -> bool {
        self.norm() < NEAR_ZERO
    }

    /// Unit vector in the same direction.
    ///
    /// A (numerically) zero vector normalizes to the zero vector.
    ///
    /// ```
    /// use symeig::Vector;
    /// let u = Vector::from_slice(&[3.0, 4.0]).normalize();
    /// assert!((u[0] - 0.6).abs() < 1e-12);
    /// assert_eq!(Vector::zeros(2).normalize(), Vector::zeros(2));
    /// ```
    pub fn normalize(&self) -> Self {
        let norm = self.norm();
        if norm < NEAR_ZERO {
            return Self::zeros(self.len());
        }
        self / norm
    }

    /// Outer product `a · bᵀ`. Panics on length mismatch.
    pub fn outer(&self, rhs: &Self) -> Matrix {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        Matrix::from_fn(self.len(), |i, j| self[i] * rhs[j])
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl Add<&Vector> for &Vector {
    type Output = Vector;
    fn add(self, rhs: &Vector) -> Vector {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        Vector {
            data: self.data.iter().zip(&rhs.data).map(|(a, b)| a + b).collect(),
        }
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;
    fn sub(self, rhs: &Vector) -> Vector {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        Vector {
            data: self.data.iter().zip(&rhs.data).map(|(a, b)| a - b).collect(),
        }
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector {
            data: self.data.iter().map(|&x| -x).collect(),
        }
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        -&self
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, k: f64) -> Vector {
        Vector {
            data: self.data.iter().map(|&x| x * k).collect(),
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, k: f64) -> Vector {
        &self * k
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;
    fn div(self, k: f64) -> Vector {
        Vector {
            data: self.data.iter().map(|&x| x / k).collect(),
        }
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, k: f64) -> Vector {
        &self / k
    }
}
