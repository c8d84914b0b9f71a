//! Convenience re-exports for field experiments.

pub use crate::constants::{coulomb_constant, VACUUM_PERMITTIVITY};
pub use crate::errors::EmSurfacesError;
pub use crate::fields::{
    disk_axis_field,
    electric_field_from_point_charges,
    far_field_of_surface,
    infinite_plane_field,
    plane_field,
    relative_difference,
    surface_field,
    AxisComparison,
    ChargedSurface,
    Disk,
    FieldError,
    FieldSample,
    PointCharge,
    Rectangle,
};
pub use crate::math::{point, R3, Scalar};
#[cfg(feature = "plot")]
pub use crate::plot::{quiver_segments, render_quiver, PlotError, QuiverStyle};
pub use crate::quadrature::{dblquad, dblquad_counted, FixedStep, IntegrationError, Quadrature};
pub use crate::report::{disk_axis_line, field_line, plane_line, relative_difference_line};
pub use crate::simulation::{SimulationConfig, SimulationError, SurfaceFieldSolver};
pub use crate::sweep::{arange, linspace, sample_field, Grid3};
