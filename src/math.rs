//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector3;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Builds an observation or source point from its coordinates.
#[inline]
#[must_use]
pub fn point(x: Scalar, y: Scalar, z: Scalar) -> R3 {
    R3::new(x, y, z)
}

/// Euclidean distance between two points. Callers must ensure `a != b`
/// whenever the result is used as a divisor.
#[inline]
#[must_use]
pub fn distance(a: &R3, b: &R3) -> Scalar {
    (a - b).norm()
}

/// Component of `v` along axis `axis` (0 = x, 1 = y, 2 = z).
#[inline]
#[must_use]
pub fn component(v: &R3, axis: usize) -> Scalar {
    v[axis]
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn distance_matches_euclidean_norm() {
        let a = point(1.0, 2.0, 2.0);
        let b = point(0.0, 0.0, 0.0);
        assert_relative_eq!(distance(&a, &b), 3.0, epsilon = 1.0e-12);
    }

    #[test]
    fn component_indexes_axes_in_order() {
        let v = point(4.0, 5.0, 6.0);
        assert_eq!(component(&v, 0), 4.0);
        assert_eq!(component(&v, 1), 5.0);
        assert_eq!(component(&v, 2), 6.0);
    }
}
