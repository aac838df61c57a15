//! Per-call tuning for the iterative routines.
//!
//! Every solver takes its configuration by reference; there is no global
//! state. The defaults match the historical constants: tolerance `1e-3`,
//! iteration cap `1000`, divergence streak `20`.

use crate::linalg::QrMethod;

/// Settings for the QR eigen-solvers.
///
/// ```
/// use symeig::EigenConfig;
/// use symeig::linalg::QrMethod;
///
/// let cfg = EigenConfig::default()
///     .with_tolerance(1e-10)
///     .with_qr_method(QrMethod::Householder);
/// assert_eq!(cfg.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EigenConfig {
    /// Convergence threshold. The unshifted solvers compare the largest
    /// Gershgorin radius against it; the shifted solver compares each
    /// trailing sub-diagonal entry.
    pub tolerance: f64,
    /// Iteration cap. For the shifted solver the cap applies per deflated
    /// eigenvalue.
    pub max_iterations: usize,
    /// Factorization used by [`eigen_qr`](crate::linalg::eigen_qr).
    pub qr_method: QrMethod,
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 1000,
            qr_method: QrMethod::Givens,
        }
    }
}

impl EigenConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_qr_method(mut self, qr_method: QrMethod) -> Self {
        self.qr_method = qr_method;
        self
    }
}

/// Settings for the iterative linear solvers and power iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IterConfig {
    /// Residual norm below which the iteration has converged.
    pub tolerance: f64,
    /// Iteration cap.
    pub max_iterations: usize,
    /// Consecutive steps in which `‖x‖` grows by at least 1 after which the
    /// iteration is declared divergent.
    pub divergence_streak: usize,
}

impl Default for IterConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 1000,
            divergence_streak: 20,
        }
    }
}

impl IterConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_divergence_streak(mut self, divergence_streak: usize) -> Self {
        self.divergence_streak = divergence_streak;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let e = EigenConfig::default();
        assert_eq!(e.tolerance, 1e-3);
        assert_eq!(e.max_iterations, 1000);
        assert_eq!(e.qr_method, QrMethod::Givens);

        let i = IterConfig::default();
        assert_eq!(i.divergence_streak, 20);
    }

    #[test]
    fn builders() {
        let i = IterConfig::default()
            .with_tolerance(1e-9)
            .with_max_iterations(50)
            .with_divergence_streak(3);
        assert_eq!(
            i,
            IterConfig {
                tolerance: 1e-9,
                max_iterations: 50,
                divergence_streak: 3
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_partial_config() {
        let cfg: EigenConfig =
            serde_json::from_str(r#"{"tolerance": 1e-8, "qr_method": "householder"}"#).unwrap();
        assert_eq!(cfg.tolerance, 1e-8);
        assert_eq!(cfg.max_iterations, 1000);
        assert_eq!(cfg.qr_method, QrMethod::Householder);
    }
}
