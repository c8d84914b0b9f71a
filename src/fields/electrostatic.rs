use crate::math::{component, distance, point, R3, Scalar};
use crate::quadrature::{dblquad, FixedStep};

use super::surface::ChargedSurface;
use super::FieldError;

/// Point charge in coulombs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCharge {
    /// Position in meters.
    pub position: R3,
    /// Charge in coulombs.
    pub charge_c: Scalar,
}

/// Electric field vector together with its magnitude.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Observation point.
    pub point: R3,
    /// Field components (Ex, Ey, Ez) in V/m.
    pub vector: R3,
    /// |E| in V/m.
    pub magnitude: Scalar,
}

/// Electric field E at `point` due to discrete point charges, scaled by the
/// Coulomb constant `k`. Charges closer than 1e-12 m are skipped.
#[must_use]
pub fn electric_field_from_point_charges(point: R3, charges: &[PointCharge], k: Scalar) -> R3 {
    let mut e = R3::zeros();
    for c in charges {
        let r_vec = point - c.position;
        let r = r_vec.norm();
        if r > 1.0e-12 {
            e += r_vec * (k * c.charge_c / (r * r * r));
        }
    }
    e
}

/// Far-field approximation of a uniformly charged surface: its total charge
/// `σ A` collapsed onto the origin.
#[must_use]
pub fn far_field_of_surface<S>(point: R3, surface: &S, density: Scalar, k: Scalar) -> R3
where
    S: ChargedSurface + ?Sized,
{
    let q = PointCharge { position: R3::zeros(), charge_c: density * surface.area() };
    electric_field_from_point_charges(point, &[q], k)
}

/// Coulomb kernel component `(p - q)_axis / |p - q|³` for a source element at
/// `(x, y, 0)`. Singular when `p` coincides with the source element.
#[inline]
fn coulomb_kernel(p: &R3, x: Scalar, y: Scalar, axis: usize) -> Scalar {
    let q = point(x, y, 0.0);
    let r = distance(p, &q);
    component(&(p - q), axis) / (r * r * r)
}

/// Electric field at `p` due to `surface` carrying uniform density `density`
/// (C/m²), with the Coulomb constant `k`.
///
/// Each Cartesian component is a separate fixed-step double integral of the
/// Coulomb kernel over the surface. The magnitude is taken from the unscaled
/// components and multiplied by `|σ k|`.
///
/// Returns [`FieldError::PointOnSurface`] when `p` lies on the surface.
pub fn surface_field<S>(
    p: R3,
    surface: &S,
    density: Scalar,
    k: Scalar,
    step: &FixedStep,
) -> Result<FieldSample, FieldError>
where
    S: ChargedSurface + ?Sized,
{
    if surface.contains(&p) {
        return Err(FieldError::PointOnSurface { shape: surface.shape() });
    }
    let (a, b) = surface.outer_bounds();
    let mut raw = R3::zeros();
    for axis in 0..3 {
        raw[axis] = dblquad(
            |x, y| coulomb_kernel(&p, x, y, axis),
            a,
            b,
            |x| surface.inner_lower(x),
            |x| surface.inner_upper(x),
            step,
        );
    }
    let scale = density * k;
    Ok(FieldSample { point: p, vector: raw * scale, magnitude: raw.norm() * scale.abs() })
}
