//! Charged surfaces, the Coulomb kernel, and closed-form reference fields.

mod electrostatic;
pub mod reference;
mod surface;

pub use electrostatic::{
    electric_field_from_point_charges,
    far_field_of_surface,
    surface_field,
    FieldSample,
    PointCharge,
};
pub use reference::{disk_axis_field, infinite_plane_field, plane_field, relative_difference, AxisComparison};
pub use surface::{ChargedSurface, Disk, Rectangle};

/// Errors raised while building a charged surface or evaluating its field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The observation point lies on the charged surface, where the kernel is singular.
    #[error("Error: the point is on the {shape}")]
    PointOnSurface {
        /// Shape name ("disk", "rectangle").
        shape: &'static str,
    },
    /// Raised when a surface dimension is not finite and positive.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}
