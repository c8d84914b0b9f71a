//! Physical constants used by the field computations.
//!
//! ## Accuracy
//!
//! ε₀ is provided with 11 significant figures (CODATA 2018), which is far below
//! the discretization error of the fixed-step integrator.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - Mohr, P. J., Newell, D. B., Taylor, B. N., & Tiesinga, E. (2019). CODATA Recommended Values of the Fundamental Physical Constants: 2018.

use std::f64::consts::PI;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Returns the Coulomb constant k = 1 / (4π ε₀) in N·m²/C².
#[inline]
#[must_use]
pub fn coulomb_constant() -> f64 {
    1.0 / (4.0 * PI * VACUUM_PERMITTIVITY)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn coulomb_constant_matches_reference() {
        assert_relative_eq!(coulomb_constant(), 8.987_551_792_3e9, max_relative = 1.0e-9);
    }
}
