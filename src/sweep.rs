//! Sample ranges and 3D observation grids.

use crate::fields::{FieldError, FieldSample};
use crate::math::{point, R3, Scalar};

/// Half-open range `[start, stop)` with spacing `step`, `numpy.arange` style:
/// `ceil((stop - start) / step)` samples at `start + i * step`.
/// A zero or non-finite step yields an empty range.
#[must_use]
pub fn arange(start: Scalar, stop: Scalar, step: Scalar) -> Vec<Scalar> {
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let n = ((stop - start) / step).ceil();
    if n.is_nan() || n <= 0.0 {
        return Vec::new();
    }
    (0..n as usize).map(|i| start + step * i as Scalar).collect()
}

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Cartesian product of three axes, iterated y, then x, then z
/// (the order of `numpy.meshgrid` with default indexing).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid3 {
    xs: Vec<Scalar>,
    ys: Vec<Scalar>,
    zs: Vec<Scalar>,
}

impl Grid3 {
    /// Builds a grid from its axes.
    #[must_use]
    pub fn new(xs: Vec<Scalar>, ys: Vec<Scalar>, zs: Vec<Scalar>) -> Self {
        Self { xs, ys, zs }
    }

    /// x, y ∈ {−10, −8, …, 8} and z ∈ {−10, −6, −2, 2, 6}: the grid used for the
    /// symmetry plots. It never touches the z = 0 plane.
    #[must_use]
    pub fn symmetry_default() -> Self {
        Self::new(arange(-10.0, 10.0, 2.0), arange(-10.0, 10.0, 2.0), arange(-10.0, 10.0, 4.0))
    }

    /// Number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len() * self.ys.len() * self.zs.len()
    }

    /// True if any axis is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest spacing between neighbouring samples on any axis, if any axis
    /// has two or more samples.
    #[must_use]
    pub fn spacing(&self) -> Option<Scalar> {
        [&self.xs, &self.ys, &self.zs]
            .into_iter()
            .flat_map(|axis| axis.windows(2).map(|w| (w[1] - w[0]).abs()))
            .filter(|d| *d > 0.0)
            .reduce(Scalar::min)
    }

    /// Iterates the grid points.
    pub fn points(&self) -> impl Iterator<Item = R3> + '_ {
        self.ys.iter().flat_map(move |&y| {
            self.xs
                .iter()
                .flat_map(move |&x| self.zs.iter().map(move |&z| point(x, y, z)))
        })
    }
}

/// Evaluates `field` at every grid point. Points lying on the charged surface
/// are skipped; any other error aborts the sweep.
pub fn sample_field<F>(grid: &Grid3, mut field: F) -> Result<Vec<FieldSample>, FieldError>
where
    F: FnMut(R3) -> Result<FieldSample, FieldError>,
{
    let mut out = Vec::with_capacity(grid.len());
    for p in grid.points() {
        match field(p) {
            Ok(sample) => out.push(sample),
            Err(FieldError::PointOnSurface { .. }) => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(out)
}
