//! Human-readable console lines for field results and closed-form comparisons.
//!
//! The library never prints; callers decide where these lines go.

use std::fmt::Display;

use crate::fields::{AxisComparison, FieldSample};
use crate::math::Scalar;

/// `"<surface>, the field at point (x,y,z) is Exx, Eyy, Ezz, with size |E|"`.
#[must_use]
pub fn field_line<S: Display>(surface: &S, sample: &FieldSample) -> String {
    let (p, e) = (sample.point, sample.vector);
    format!(
        "{surface}, the field at point ({},{},{}) is {}x, {}y, {}z, with size {}",
        p.x, p.y, p.z, e.x, e.y, e.z, sample.magnitude
    )
}

/// Closed-form field on the axis of a disk.
#[must_use]
pub fn disk_axis_line(radius: Scalar, height: Scalar, field: Scalar) -> String {
    format!("The Radius is {radius}, the field at point (0,0,{height}) is 0, 0, {field}")
}

/// Closed-form field of an infinite plane.
#[must_use]
pub fn plane_line(height: Scalar, field: Scalar) -> String {
    format!("The field at point (0,0,{height}) is 0, 0, {field}")
}

/// `"the relative difference is d"`.
#[must_use]
pub fn relative_difference_line(comparison: &AxisComparison) -> String {
    format!("the relative difference is {}", comparison.relative_difference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Disk;
    use crate::math::point;

    #[test]
    fn field_line_names_surface_point_and_components() {
        let disk = Disk::new(2.0).unwrap();
        let sample = FieldSample { point: point(0.0, 0.0, 1.0), vector: point(0.0, 0.5, 3.0), magnitude: 3.5 };
        assert_eq!(
            field_line(&disk, &sample),
            "The Radius is 2, the field at point (0,0,1) is 0x, 0.5y, 3z, with size 3.5"
        );
    }

    #[test]
    fn comparison_lines() {
        assert_eq!(disk_axis_line(1.0, 10.0, 0.25), "The Radius is 1, the field at point (0,0,10) is 0, 0, 0.25");
        assert_eq!(plane_line(1.0, 2.0), "The field at point (0,0,1) is 0, 0, 2");
        let cmp = AxisComparison::new(1.5, 2.0);
        assert_eq!(relative_difference_line(&cmp), "the relative difference is 0.25");
    }
}
