use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Matrix, Vector};

#[inline]
fn check_dims(lhs: &Matrix, rhs: &Matrix, op: &str) {
    assert_eq!(
        lhs.n, rhs.n,
        "dimension mismatch: {}x{} {} {}x{}",
        lhs.n, lhs.n, op, rhs.n, rhs.n,
    );
}

fn zip_with(lhs: &Matrix, rhs: &Matrix, f: impl Fn(f64, f64) -> f64) -> Matrix {
    let data = lhs
        .data
        .iter()
        .zip(rhs.data.iter())
        .map(|(&a, &b)| f(a, b))
        .collect();
    Matrix { data, n: lhs.n }
}

fn matmul(lhs: &Matrix, rhs: &Matrix) -> Matrix {
    check_dims(lhs, rhs, "*");
    let n = lhs.n;
    let mut out = Matrix::zeros(n);
    // i-k-j order keeps both operands walking rows.
    for i in 0..n {
        for k in 0..n {
            let a_ik = lhs.data[i * n + k];
            if a_ik == 0.0 {
                continue;
            }
            let rhs_row = &rhs.data[k * n..(k + 1) * n];
            let out_row = &mut out.data[i * n..(i + 1) * n];
            for (o, &b) in out_row.iter_mut().zip(rhs_row) {
                *o += a_ik * b;
            }
        }
    }
    out
}

// ── Element-wise addition / subtraction ─────────────────────────────

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;
    fn add(self, rhs: &Matrix) -> Matrix {
        check_dims(self, rhs, "+");
        zip_with(self, rhs, |a, b| a + b)
    }
}

impl Add for Matrix {
    type Output = Matrix;
    fn add(self, rhs: Matrix) -> Matrix {
        &self + &rhs
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Matrix;
    fn add(mut self, rhs: &Matrix) -> Matrix {
        self += rhs;
        self
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        check_dims(self, rhs, "+=");
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
    }
}

impl AddAssign for Matrix {
    fn add_assign(&mut self, rhs: Matrix) {
        *self += &rhs;
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;
    fn sub(self, rhs: &Matrix) -> Matrix {
        check_dims(self, rhs, "-");
        zip_with(self, rhs, |a, b| a - b)
    }
}

impl Sub for Matrix {
    type Output = Matrix;
    fn sub(self, rhs: Matrix) -> Matrix {
        &self - &rhs
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Matrix;
    fn sub(mut self, rhs: &Matrix) -> Matrix {
        self -= rhs;
        self
    }
}

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        check_dims(self, rhs, "-=");
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
    }
}

impl SubAssign for Matrix {
    fn sub_assign(&mut self, rhs: Matrix) {
        *self -= &rhs;
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        Matrix {
            data: self.data.iter().map(|&x| -x).collect(),
            n: self.n,
        }
    }
}

impl Neg for Matrix {
    type Output = Matrix;
    fn neg(mut self) -> Matrix {
        for x in self.data.iter_mut() {
            *x = -*x;
        }
        self
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, k: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|&x| x * k).collect(),
            n: self.n,
        }
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;
    fn mul(mut self, k: f64) -> Matrix {
        self *= k;
        self
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, k: f64) {
        for x in self.data.iter_mut() {
            *x *= k;
        }
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        matmul(self, rhs)
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        matmul(&self, &rhs)
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        matmul(&self, rhs)
    }
}

impl Mul<Matrix> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        matmul(self, &rhs)
    }
}

impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        *self = matmul(self, rhs);
    }
}

// ── Matrix-vector multiplication ────────────────────────────────────

impl Mul<&Vector> for &Matrix {
    type Output = Vector;
    fn mul(self, v: &Vector) -> Vector {
        assert_eq!(
            self.n,
            v.len(),
            "dimension mismatch: {}x{} * vector of length {}",
            self.n,
            self.n,
            v.len(),
        );
        Vector::from_fn(self.n, |i| {
            self.row(i)
                .iter()
                .zip(v.as_slice())
                .map(|(&a, &b)| a * b)
                .sum()
        })
    }
}

impl Mul<Vector> for &Matrix {
    type Output = Vector;
    fn mul(self, v: Vector) -> Vector {
        self * &v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(&a + &b, Matrix::new([[6.0, 8.0], [10.0, 12.0]]));
        assert_eq!(&b - &a, Matrix::new([[4.0, 4.0], [4.0, 4.0]]));

        let mut c = a.clone();
        c += &b;
        c -= &b;
        assert_eq!(c, a);
    }

    #[test]
    fn neg_and_scale() {
        let a = Matrix::new([[1.0, -2.0], [3.0, 0.5]]);
        assert_eq!(-&a, Matrix::new([[-1.0, 2.0], [-3.0, -0.5]]));
        assert_eq!(&a * 2.0, Matrix::new([[2.0, -4.0], [6.0, 1.0]]));
    }

    #[test]
    fn matmul_known() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(&a * &b, Matrix::new([[19.0, 22.0], [43.0, 50.0]]));
    }

    #[test]
    fn matmul_identity() {
        let a = Matrix::from_fn(4, |i, j| (i * 4 + j) as f64 - 3.5);
        let id = Matrix::identity(4);
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }

    #[test]
    fn mul_assign() {
        let mut a = Matrix::new([[0.0, 1.0], [1.0, 0.0]]);
        let b = a.clone();
        a *= &b;
        assert_eq!(a, Matrix::identity(2));
    }

    #[test]
    fn matvec() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let v = Vector::from_slice(&[1.0, -1.0]);
        assert_eq!((&a * &v).as_slice(), &[-1.0, -1.0]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_mismatch_panics() {
        let _ = &Matrix::zeros(2) + &Matrix::zeros(3);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn matvec_mismatch_panics() {
        let _ = &Matrix::zeros(2) * &Vector::zeros(3);
    }
}
