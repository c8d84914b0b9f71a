use std::path::Path;

use em_surfaces::prelude::*;

// Plates this large need coarser steps than the 0.01 default.
const LARGE_PLATE_CELLS: usize = 2_000;

fn print_field(a: Scalar, b: Scalar, density: Scalar, p: R3) -> Result<(), EmSurfacesError> {
    let rect = Rectangle::new(a, b)?;
    let step = if a.max(b) > 10.0 { FixedStep::for_extent(a, b, LARGE_PLATE_CELLS)? } else { FixedStep::default() };
    let solver = SurfaceFieldSolver::new(rect, density, SimulationConfig::si().with_step(step))?;
    match solver.field_at(p) {
        Ok(sample) => println!("{}", field_line(solver.surface(), &sample)),
        Err(err @ FieldError::PointOnSurface { .. }) => println!("{err}"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn main() -> Result<(), EmSurfacesError> {
    // Field of a charged rectangle at a few points (SI units).
    print_field(1.0, 1.0, 1.0, point(4.0, 3.0, 0.0))?;
    print_field(1.0, 1.0, 1.0, point(4.0, 3.0, 3.0))?;
    print_field(1.0, 1.0, 1.0, point(4.0, 0.0, 3.0))?;
    print_field(110.0, 123.0, 1.0, point(0.0, 3.0, 7.0))?;
    print_field(1.0, 1.0, 1.0, point(0.25, -0.5, 0.0))?;

    // Comparison with an infinite plane, 1 m above the plate centre.
    let height = 1.0;
    for (side, cells) in [(10_000.0, 10_000), (100.0, 2_000)] {
        let step = FixedStep::for_extent(side, side, cells)?;
        let solver = SurfaceFieldSolver::new(Rectangle::new(side, side)?, 1.0, SimulationConfig::si().with_step(step))?;
        let sample = solver.field_at(point(0.0, 0.0, height))?;
        println!("{}", field_line(solver.surface(), &sample));
        let cmp = solver.compare_with_plane(height)?;
        println!("{}", plane_line(height, cmp.reference));
        println!("{}", relative_difference_line(&cmp));
    }

    // Symmetry plot around a 5 × 7 plate.
    let config = SimulationConfig::si().with_uniform_step(0.05)?;
    let solver = SurfaceFieldSolver::new(Rectangle::new(5.0, 7.0)?, 1.0, config)?;
    let grid = Grid3::symmetry_default();
    let samples = sample_field(&grid, |p| solver.field_at(p))?;
    let path = Path::new("rectangle_field.svg");
    render_quiver(
        path,
        "Field around a charged 5 x 7 plate",
        &samples,
        grid.spacing().unwrap_or(1.0),
        &QuiverStyle::default(),
    )?;
    println!("{} field vectors plotted to {}", samples.len(), path.display());
    Ok(())
}
