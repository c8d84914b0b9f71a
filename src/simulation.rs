//! Experiment configuration and the surface field solver.

use crate::constants::coulomb_constant;
use crate::fields::{
    disk_axis_field, plane_field, surface_field, AxisComparison, ChargedSurface, Disk,
    FieldError, FieldSample, Rectangle,
};
use crate::math::{point, R3, Scalar};
use crate::quadrature::{FixedStep, IntegrationError};

/// Numerical and physical settings shared by every field evaluation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Coulomb constant k applied to every result.
    pub coulomb_constant: Scalar,
    /// Integration steps.
    pub step: FixedStep,
}

impl SimulationConfig {
    /// SI units: k = 1/(4π ε₀), default steps.
    #[must_use]
    pub fn si() -> Self {
        Self { coulomb_constant: coulomb_constant(), step: FixedStep::default() }
    }

    /// Normalized units with k = 1, used for the axis comparisons.
    #[must_use]
    pub fn normalized() -> Self {
        Self { coulomb_constant: 1.0, step: FixedStep::default() }
    }

    /// Replaces the integration steps.
    #[must_use]
    pub fn with_step(mut self, step: FixedStep) -> Self {
        self.step = step;
        self
    }

    /// Uses the same step `step` in both dimensions.
    pub fn with_uniform_step(self, step: Scalar) -> Result<Self, SimulationError> {
        Ok(self.with_step(FixedStep::uniform(step)?))
    }

    /// Checks the configuration is internally consistent: a finite Coulomb
    /// constant and steps that let the integrator terminate.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.coulomb_constant.is_finite() {
            return Err(SimulationError::InvalidConfig(format!(
                "coulomb constant must be finite, got {}",
                self.coulomb_constant
            )));
        }
        FixedStep::new(self.step.dx(), self.step.dy())?;
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::si()
    }
}

/// Errors that can occur while configuring a solver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Raised when the configuration is internally inconsistent.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
    /// Raised when integration steps are rejected.
    #[error(transparent)]
    Step(#[from] IntegrationError),
}

/// Evaluates the field of one uniformly charged surface.
#[derive(Debug, Clone)]
pub struct SurfaceFieldSolver<S> {
    surface: S,
    density: Scalar,
    config: SimulationConfig,
}

impl<S: ChargedSurface> SurfaceFieldSolver<S> {
    /// Creates a solver for `surface` with uniform charge density `density` (C/m²).
    pub fn new(surface: S, density: Scalar, config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        if !density.is_finite() {
            return Err(SimulationError::InvalidConfig(format!("density must be finite, got {density}")));
        }
        Ok(Self { surface, density, config })
    }

    /// Charged surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Surface charge density in C/m².
    #[must_use]
    pub const fn density(&self) -> Scalar {
        self.density
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Field at `p`; fails when `p` lies on the surface.
    pub fn field_at(&self, p: R3) -> Result<FieldSample, FieldError> {
        surface_field(p, &self.surface, self.density, self.config.coulomb_constant, &self.config.step)
    }
}

impl SurfaceFieldSolver<Disk> {
    /// Compares the numerical field at height `height` on the disk axis with
    /// the closed-form central-axis formula.
    pub fn compare_on_axis(&self, height: Scalar) -> Result<AxisComparison, FieldError> {
        let numeric = self.field_at(point(0.0, 0.0, height))?.magnitude;
        let reference =
            disk_axis_field(self.surface.radius(), self.density, height, self.config.coulomb_constant);
        Ok(AxisComparison::new(numeric, reference))
    }
}

impl SurfaceFieldSolver<Rectangle> {
    /// Compares the numerical field at height `height` above the plate centre
    /// with the infinite-plane formula 2πkσ (σ/(2ε₀) in SI units).
    pub fn compare_with_plane(&self, height: Scalar) -> Result<AxisComparison, FieldError> {
        let numeric = self.field_at(point(0.0, 0.0, height))?.magnitude;
        Ok(AxisComparison::new(numeric, plane_field(self.density, self.config.coulomb_constant)))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn rejects_non_finite_constant_and_density() {
        let disk = Disk::new(1.0).unwrap();
        let config = SimulationConfig { coulomb_constant: f64::NAN, ..SimulationConfig::si() };
        assert!(matches!(
            SurfaceFieldSolver::new(disk, 1.0, config),
            Err(SimulationError::InvalidConfig(_))
        ));
        assert!(SurfaceFieldSolver::new(disk, f64::INFINITY, SimulationConfig::si()).is_err());
    }

    #[test]
    fn invalid_step_surfaces_as_simulation_error() {
        let err = SimulationConfig::normalized().with_uniform_step(0.0).unwrap_err();
        assert!(matches!(err, SimulationError::Step(IntegrationError::InvalidStep { .. })));
    }

    #[test]
    fn disk_axis_comparison_matches_closed_form() {
        let solver = SurfaceFieldSolver::new(Disk::new(1.0).unwrap(), 1.0, SimulationConfig::normalized()).unwrap();
        let cmp = solver.compare_on_axis(10.0).unwrap();
        assert_relative_eq!(cmp.reference, 2.0 * std::f64::consts::PI * (1.0 - 10.0 / 101.0_f64.sqrt()));
        assert!(cmp.relative_difference < 5.0e-3);
    }

    #[test]
    fn plate_close_to_its_centre_approaches_infinite_plane() {
        // 40 × 40 plate observed from 0.5 m; the finite size costs about 2.2 %.
        let config = SimulationConfig::si().with_uniform_step(0.05).unwrap();
        let solver = SurfaceFieldSolver::new(Rectangle::new(40.0, 40.0).unwrap(), 1.0e-9, config).unwrap();
        let cmp = solver.compare_with_plane(0.5).unwrap();
        assert!(cmp.relative_difference < 3.0e-2, "{cmp:?}");
    }

    #[test]
    fn plane_comparison_holds_in_normalized_units() {
        let config = SimulationConfig::normalized().with_uniform_step(0.05).unwrap();
        let solver = SurfaceFieldSolver::new(Rectangle::new(40.0, 40.0).unwrap(), 1.0, config).unwrap();
        let cmp = solver.compare_with_plane(0.5).unwrap();
        assert_relative_eq!(cmp.reference, 2.0 * std::f64::consts::PI);
        assert!(cmp.relative_difference < 3.0e-2, "{cmp:?}");
    }

    #[test]
    fn solver_reports_point_on_surface() {
        let solver = SurfaceFieldSolver::new(Rectangle::new(5.0, 7.0).unwrap(), 1.0, SimulationConfig::si()).unwrap();
        assert_eq!(
            solver.field_at(point(0.0, 0.0, 0.0)),
            Err(FieldError::PointOnSurface { shape: "rectangle" })
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_with_zero_step_is_rejected() {
        let json = r#"{"coulomb_constant":1.0,"step":{"dx":0.0,"dy":0.0}}"#;
        assert!(serde_json::from_str::<SimulationConfig>(json).is_err());
    }

    #[test]
    fn decoded_config_builds_a_solver() {
        let json = r#"{"coulomb_constant":1.0,"step":{"dx":0.05,"dy":0.05}}"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, SimulationConfig::normalized().with_uniform_step(0.05).unwrap());
        assert!(SurfaceFieldSolver::new(Disk::new(1.0).unwrap(), 1.0, config).is_ok());
    }
}
