//! Shared error types used across submodules.

use thiserror::Error;

use crate::fields::FieldError;
#[cfg(feature = "plot")]
use crate::plot::PlotError;
use crate::quadrature::IntegrationError;
use crate::simulation::SimulationError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum EmSurfacesError {
    /// Wraps simulation configuration errors.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    /// Wraps geometry and field evaluation errors.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Wraps integrator configuration errors.
    #[error(transparent)]
    Integration(#[from] IntegrationError),
    /// Wraps plot rendering errors.
    #[cfg(feature = "plot")]
    #[error(transparent)]
    Plot(#[from] PlotError),
}
