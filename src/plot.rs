//! 3D quiver rendering of sampled fields with `plotters`.

use std::path::Path;

use plotters::prelude::*;

use crate::fields::FieldSample;
use crate::math::{R3, Scalar};

/// Raised when the plot cannot be drawn or written.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("plot rendering failed: {0}")]
pub struct PlotError(String);

fn plot_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError(err.to_string())
}

/// Arrow scaling for [`render_quiver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuiverStyle {
    /// Length of the longest arrow, in units of grid spacing.
    pub length: Scalar,
    /// Factor applied to Ez before scaling, to keep the normal component from
    /// hiding the in-plane pattern.
    pub z_scale: Scalar,
    /// Output image size in pixels.
    pub size: (u32, u32),
}

impl Default for QuiverStyle {
    fn default() -> Self {
        Self { length: 0.7, z_scale: 1.0, size: (1024, 768) }
    }
}

impl QuiverStyle {
    /// Sets the Ez factor.
    #[must_use]
    pub fn with_z_scale(mut self, z_scale: Scalar) -> Self {
        self.z_scale = z_scale;
        self
    }
}

/// Arrow start and end points. The longest arrow spans `style.length * spacing`;
/// all-zero fields produce zero-length arrows.
#[must_use]
pub fn quiver_segments(samples: &[FieldSample], style: &QuiverStyle, spacing: Scalar) -> Vec<(R3, R3)> {
    let scaled: Vec<R3> = samples
        .iter()
        .map(|s| R3::new(s.vector.x, s.vector.y, s.vector.z * style.z_scale))
        .collect();
    let longest = scaled.iter().map(|v| v.norm()).fold(0.0, Scalar::max);
    let factor = if longest > 0.0 { style.length * spacing / longest } else { 0.0 };
    samples
        .iter()
        .zip(scaled)
        .map(|(s, v)| (s.point, s.point + v * factor))
        .collect()
}

// plotters puts the vertical axis second; physical z is drawn upwards.
#[inline]
fn to_chart(p: &R3) -> (Scalar, Scalar, Scalar) {
    (p.x, p.z, p.y)
}

fn axis_range(values: impl Iterator<Item = Scalar>) -> std::ops::Range<Scalar> {
    let (lo, hi) = values.fold((Scalar::INFINITY, Scalar::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo.is_finite() && hi.is_finite() {
        (lo - 1.0)..(hi + 1.0)
    } else {
        -1.0..1.0
    }
}

/// Renders `samples` as a 3D quiver plot into the SVG file at `path`.
pub fn render_quiver(
    path: &Path,
    title: &str,
    samples: &[FieldSample],
    spacing: Scalar,
    style: &QuiverStyle,
) -> Result<(), PlotError> {
    let segments = quiver_segments(samples, style, spacing);
    let ends = || segments.iter().flat_map(|(a, b)| [*a, *b]);
    let xs = axis_range(ends().map(|p| p.x));
    let ys = axis_range(ends().map(|p| p.y));
    let zs = axis_range(ends().map(|p| p.z));

    let root = SVGBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24).into_font())
        .margin(20)
        .build_cartesian_3d(xs, zs, ys)
        .map_err(plot_err)?;
    chart.with_projection(|mut pb| {
        pb.pitch = 0.4;
        pb.yaw = 0.6;
        pb.scale = 0.85;
        pb.into_matrix()
    });
    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            segments
                .iter()
                .map(|(a, b)| PathElement::new(vec![to_chart(a), to_chart(b)], BLUE.stroke_width(1))),
        )
        .map_err(plot_err)?;
    chart
        .draw_series(segments.iter().map(|(_, b)| Circle::new(to_chart(b), 2, BLUE.filled())))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::point;

    fn sample(p: R3, e: R3) -> FieldSample {
        FieldSample { point: p, vector: e, magnitude: e.norm() }
    }

    #[test]
    fn longest_arrow_spans_requested_length() {
        let samples = [
            sample(point(0.0, 0.0, 1.0), point(0.0, 0.0, 4.0)),
            sample(point(2.0, 0.0, 1.0), point(1.0, 0.0, 0.0)),
        ];
        let segs = quiver_segments(&samples, &QuiverStyle::default(), 2.0);
        assert_relative_eq!((segs[0].1 - segs[0].0).norm(), 1.4, epsilon = 1.0e-12);
        assert_relative_eq!((segs[1].1 - segs[1].0).norm(), 0.35, epsilon = 1.0e-12);
    }

    #[test]
    fn z_scale_shrinks_normal_component() {
        let samples = [sample(point(0.0, 0.0, 1.0), point(1.0, 0.0, 2.0))];
        let style = QuiverStyle::default().with_z_scale(0.5);
        let segs = quiver_segments(&samples, &style, 1.0);
        let d = segs[0].1 - segs[0].0;
        assert_relative_eq!(d.x, d.z, epsilon = 1.0e-12);
    }

    #[test]
    fn zero_field_gives_zero_length_arrows() {
        let samples = [sample(point(1.0, 1.0, 1.0), R3::zeros())];
        let segs = quiver_segments(&samples, &QuiverStyle::default(), 1.0);
        assert_eq!(segs[0].0, segs[0].1);
    }

    #[test]
    fn renders_svg_file() {
        let path = std::env::temp_dir().join("em_surfaces_quiver_test.svg");
        let samples = [
            sample(point(-1.0, 0.0, 1.0), point(-0.2, 0.0, 1.0)),
            sample(point(1.0, 0.0, 1.0), point(0.2, 0.0, 1.0)),
            sample(point(0.0, 0.0, -1.0), point(0.0, 0.0, -1.0)),
        ];
        render_quiver(&path, "test", &samples, 2.0, &QuiverStyle::default()).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        let _ = std::fs::remove_file(&path);
    }
}
