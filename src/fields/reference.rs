//! Closed-form limiting formulas used as ground truth for the numerical fields.

use std::f64::consts::PI;

use crate::constants::VACUUM_PERMITTIVITY;
use crate::math::Scalar;

/// Field on the symmetry axis of a disk of radius `radius` and density
/// `density`, at height `height`: E_z = 2πkσ(1 − h/√(h² + R²)).
#[must_use]
pub fn disk_axis_field(radius: Scalar, density: Scalar, height: Scalar, k: Scalar) -> Scalar {
    2.0 * PI * k * density * (1.0 - height / (height * height + radius * radius).sqrt())
}

/// Field of an infinite uniformly charged plane, E = σ / (2ε₀), independent of
/// the distance to the plane.
#[must_use]
pub fn infinite_plane_field(density: Scalar) -> Scalar {
    density / (2.0 * VACUUM_PERMITTIVITY)
}

/// Infinite-plane field for an arbitrary Coulomb constant `k`: E = 2πkσ.
/// Equals [`infinite_plane_field`] when `k = 1/(4πε₀)`.
#[must_use]
pub fn plane_field(density: Scalar, k: Scalar) -> Scalar {
    2.0 * PI * k * density
}

/// |(numeric − reference) / reference|.
#[must_use]
pub fn relative_difference(numeric: Scalar, reference: Scalar) -> Scalar {
    ((numeric - reference) / reference).abs()
}

/// Numerical magnitude paired with its closed-form reference.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisComparison {
    /// Magnitude from the double integral.
    pub numeric: Scalar,
    /// Closed-form value.
    pub reference: Scalar,
    /// Relative difference between the two.
    pub relative_difference: Scalar,
}

impl AxisComparison {
    /// Pairs a numerical magnitude with a reference value.
    #[must_use]
    pub fn new(numeric: Scalar, reference: Scalar) -> Self {
        Self { numeric, reference, relative_difference: relative_difference(numeric, reference) }
    }
}
