use std::fmt;

use crate::math::{R3, Scalar};

use super::FieldError;

/// Flat charged region lying in the z = 0 plane, described as a strip
/// x ∈ [a, b], y ∈ [g(x), h(x)] for the double integrator.
pub trait ChargedSurface {
    /// Outer integration bounds `(a, b)` along x.
    fn outer_bounds(&self) -> (Scalar, Scalar);

    /// Lower inner bound g(x).
    fn inner_lower(&self, x: Scalar) -> Scalar;

    /// Upper inner bound h(x).
    fn inner_upper(&self, x: Scalar) -> Scalar;

    /// True when `point` lies exactly on the charged region, where the
    /// Coulomb kernel is singular.
    fn contains(&self, point: &R3) -> bool;

    /// Surface area in square meters.
    fn area(&self) -> Scalar;

    /// Shape name used in diagnostics ("disk", "rectangle").
    fn shape(&self) -> &'static str;
}

fn check_dimension(name: &str, value: Scalar) -> Result<Scalar, FieldError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FieldError::InvalidGeometry(format!("{name} must be finite and > 0, got {value}")))
    }
}

/// Disk of radius `R` centred at the origin.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDisk"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    radius: Scalar,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDisk {
    radius: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDisk> for Disk {
    type Error = FieldError;

    fn try_from(raw: RawDisk) -> Result<Self, Self::Error> {
        Self::new(raw.radius)
    }
}

impl Disk {
    /// Creates a disk; the radius must be finite and positive.
    pub fn new(radius: Scalar) -> Result<Self, FieldError> {
        Ok(Self { radius: check_dimension("radius", radius)? })
    }

    /// Radius in meters.
    #[must_use]
    pub const fn radius(&self) -> Scalar {
        self.radius
    }

    fn half_chord(&self, x: Scalar) -> Scalar {
        // Accumulated steps can overshoot R by an ulp; that row is empty.
        (self.radius * self.radius - x * x).max(0.0).sqrt()
    }
}

impl ChargedSurface for Disk {
    fn outer_bounds(&self) -> (Scalar, Scalar) {
        (-self.radius, self.radius)
    }

    fn inner_lower(&self, x: Scalar) -> Scalar {
        -self.half_chord(x)
    }

    fn inner_upper(&self, x: Scalar) -> Scalar {
        self.half_chord(x)
    }

    fn contains(&self, point: &R3) -> bool {
        point.z == 0.0 && point.norm() <= self.radius
    }

    fn area(&self) -> Scalar {
        std::f64::consts::PI * self.radius * self.radius
    }

    fn shape(&self) -> &'static str {
        "disk"
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The Radius is {}", self.radius)
    }
}

/// Rectangle with side `a` along x and `b` along y, centred at the origin.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRectangle"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    a: Scalar,
    b: Scalar,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRectangle {
    a: Scalar,
    b: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRectangle> for Rectangle {
    type Error = FieldError;

    fn try_from(raw: RawRectangle) -> Result<Self, Self::Error> {
        Self::new(raw.a, raw.b)
    }
}

impl Rectangle {
    /// Creates a rectangle; both sides must be finite and positive.
    pub fn new(a: Scalar, b: Scalar) -> Result<Self, FieldError> {
        Ok(Self { a: check_dimension("side a", a)?, b: check_dimension("side b", b)? })
    }

    /// Side length along x.
    #[must_use]
    pub const fn a(&self) -> Scalar {
        self.a
    }

    /// Side length along y.
    #[must_use]
    pub const fn b(&self) -> Scalar {
        self.b
    }
}

impl ChargedSurface for Rectangle {
    fn outer_bounds(&self) -> (Scalar, Scalar) {
        (-self.a / 2.0, self.a / 2.0)
    }

    fn inner_lower(&self, _x: Scalar) -> Scalar {
        -self.b / 2.0
    }

    fn inner_upper(&self, _x: Scalar) -> Scalar {
        self.b / 2.0
    }

    fn contains(&self, point: &R3) -> bool {
        point.z == 0.0
            && point.x >= -self.a / 2.0
            && point.x <= self.a / 2.0
            && point.y >= -self.b / 2.0
            && point.y <= self.b / 2.0
    }

    fn area(&self) -> Scalar {
        self.a * self.b
    }

    fn shape(&self) -> &'static str {
        "rectangle"
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The rectangle is {}*{}", self.a, self.b)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn invalid_dimensions_do_not_deserialize() {
        assert!(serde_json::from_str::<Disk>(r#"{"radius":-1.0}"#).is_err());
        assert!(serde_json::from_str::<Rectangle>(r#"{"a":2.0,"b":0.0}"#).is_err());
        let disk = serde_json::from_str::<Disk>(r#"{"radius":1.5}"#).unwrap();
        assert_eq!(disk, Disk::new(1.5).unwrap());
    }
}
