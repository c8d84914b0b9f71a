//! Fixed-step double integration over function-bounded regions.
//!
//! Approximates ∬ f(x, y) dy dx over x ∈ [a, b], y ∈ [g(x), h(x)] with a
//! left-rectangle rule in both dimensions. The outer and inner variables are
//! advanced by repeated addition of the step, so results are reproducible
//! bit-for-bit for a given pair of step sizes. There is no error estimate and
//! no adaptivity; the error is first order in `dx + dy`.

use crate::math::Scalar;

/// Default step used in both dimensions.
pub const DEFAULT_STEP: Scalar = 0.01;

/// Errors raised while configuring the integrator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrationError {
    /// Raised when a step is not a finite positive number; the summation
    /// would never terminate.
    #[error("invalid integration step: dx = {dx}, dy = {dy} (both must be finite and > 0)")]
    InvalidStep {
        /// Requested outer step.
        dx: Scalar,
        /// Requested inner step.
        dy: Scalar,
    },
    /// Raised when a resolution of zero cells is requested.
    #[error("integration grid needs at least one cell per dimension")]
    EmptyGrid,
}

/// Validated step sizes for the outer (`dx`) and inner (`dy`) variables.
///
/// Deserialization goes through [`FixedStep::new`], so a decoded step is
/// always finite and positive.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawStep"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    dx: Scalar,
    dy: Scalar,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawStep {
    dx: Scalar,
    dy: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStep> for FixedStep {
    type Error = IntegrationError;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        Self::new(raw.dx, raw.dy)
    }
}

impl FixedStep {
    /// Creates step sizes, rejecting anything that is not finite and positive.
    pub fn new(dx: Scalar, dy: Scalar) -> Result<Self, IntegrationError> {
        let valid = |s: Scalar| s.is_finite() && s > 0.0;
        if valid(dx) && valid(dy) {
            Ok(Self { dx, dy })
        } else {
            Err(IntegrationError::InvalidStep { dx, dy })
        }
    }

    /// Same step in both dimensions.
    pub fn uniform(step: Scalar) -> Result<Self, IntegrationError> {
        Self::new(step, step)
    }

    /// Steps that split a `width` × `height` bounding box into `cells` columns
    /// per dimension. Used for plates too large for the default step.
    pub fn for_extent(width: Scalar, height: Scalar, cells: usize) -> Result<Self, IntegrationError> {
        if cells == 0 {
            return Err(IntegrationError::EmptyGrid);
        }
        let n = cells as Scalar;
        Self::new(width / n, height / n)
    }

    /// Outer step.
    #[must_use]
    pub const fn dx(&self) -> Scalar {
        self.dx
    }

    /// Inner step.
    #[must_use]
    pub const fn dy(&self) -> Scalar {
        self.dy
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self { dx: DEFAULT_STEP, dy: DEFAULT_STEP }
    }
}

/// Sum and evaluation count returned by [`dblquad_counted`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrature {
    /// Accumulated Riemann sum.
    pub value: Scalar,
    /// Number of integrand evaluations.
    pub evaluations: usize,
}

/// Approximates ∬ f(x, y) dy dx over x ∈ [a, b), y ∈ [g(x), h(x)).
///
/// `f` receives `(outer, inner)`. Extra parameters are captured by the closure.
/// Degenerate bounds (`a >= b`, or `g(x) >= h(x)` everywhere) return exactly `0.0`.
#[must_use]
pub fn dblquad<F, G, H>(f: F, a: Scalar, b: Scalar, g: G, h: H, step: &FixedStep) -> Scalar
where
    F: Fn(Scalar, Scalar) -> Scalar,
    G: Fn(Scalar) -> Scalar,
    H: Fn(Scalar) -> Scalar,
{
    dblquad_counted(f, a, b, g, h, step).value
}

/// Same as [`dblquad`] but also reports how many times `f` was evaluated.
#[must_use]
pub fn dblquad_counted<F, G, H>(f: F, a: Scalar, b: Scalar, g: G, h: H, step: &FixedStep) -> Quadrature
where
    F: Fn(Scalar, Scalar) -> Scalar,
    G: Fn(Scalar) -> Scalar,
    H: Fn(Scalar) -> Scalar,
{
    let (dx, dy) = (step.dx, step.dy);
    let mut value = 0.0;
    let mut evaluations = 0;
    let mut x = a;
    while x < b {
        let mut y = g(x);
        let y_max = h(x);
        while y < y_max {
            value += f(x, y) * dy * dx;
            evaluations += 1;
            y += dy;
        }
        x += dx;
    }
    Quadrature { value, evaluations }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn zero_step_does_not_deserialize() {
        let err = serde_json::from_str::<FixedStep>(r#"{"dx":0.0,"dy":0.0}"#).unwrap_err();
        assert!(err.to_string().contains("invalid integration step"), "{err}");
        assert!(serde_json::from_str::<FixedStep>(r#"{"dx":0.01,"dy":-0.01}"#).is_err());
    }

    #[test]
    fn valid_step_survives_json() {
        let step = FixedStep::new(0.02, 0.05).unwrap();
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(serde_json::from_str::<FixedStep>(&json).unwrap(), step);
    }
}
