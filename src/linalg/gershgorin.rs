use crate::Matrix;

/// Disc in which at least one eigenvalue lies: every eigenvalue of `A` is
/// within `radius` of some row's `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GershgorinCircle {
    /// Diagonal entry `A[i][i]`.
    pub center: f64,
    /// `Σ_{j≠i} |A[i][j]|`.
    pub radius: f64,
}

impl GershgorinCircle {
    /// Farthest distance of the disc from the origin, `|center| + radius`.
    #[inline]
    pub fn reach(&self) -> f64 {
        self.center.abs() + self.radius
    }
}

/// One circle per row of `a`.
///
/// ```
/// use symeig::Matrix;
/// use symeig::linalg::gershgorin_circles;
///
/// let a = Matrix::new([[4.0, -1.0], [2.0, 3.0]]);
/// let c = gershgorin_circles(&a);
/// assert_eq!((c[0].center, c[0].radius), (4.0, 1.0));
/// assert_eq!((c[1].center, c[1].radius), (3.0, 2.0));
/// ```
pub fn gershgorin_circles(a: &Matrix) -> Vec<GershgorinCircle> {
    (0..a.dim())
        .map(|i| {
            let radius = a
                .row(i)
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, x)| x.abs())
                .sum();
            GershgorinCircle {
                center: a[(i, i)],
                radius,
            }
        })
        .collect()
}

/// Largest radius among `circles`, `0.0` for none.
pub fn max_radius(circles: &[GershgorinCircle]) -> f64 {
    circles.iter().fold(0.0, |m, c| f64::max(m, c.radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_has_zero_radii() {
        let a = Matrix::from_diag(&[1.0, -2.0, 3.0]);
        let circles = gershgorin_circles(&a);
        assert_eq!(max_radius(&circles), 0.0);
        assert_eq!(circles[1].center, -2.0);
    }

    #[test]
    fn radii_sum_abs_off_diagonal() {
        let a = Matrix::new([[1.0, -2.0, 3.0], [0.5, 0.0, -0.5], [1.0, 1.0, 1.0]]);
        let circles = gershgorin_circles(&a);
        assert_eq!(circles[0].radius, 5.0);
        assert_eq!(circles[1].radius, 1.0);
        assert_eq!(circles[2].radius, 2.0);
        assert_eq!(max_radius(&circles), 5.0);
        assert_eq!(circles[0].reach(), 6.0);
    }

    #[test]
    fn empty() {
        assert!(gershgorin_circles(&Matrix::zeros(0)).is_empty());
        assert_eq!(max_radius(&[]), 0.0);
    }
}
