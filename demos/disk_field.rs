use std::path::Path;

use em_surfaces::prelude::*;

fn print_field(radius: Scalar, density: Scalar, p: R3) -> Result<(), EmSurfacesError> {
    let solver = SurfaceFieldSolver::new(Disk::new(radius)?, density, SimulationConfig::si())?;
    match solver.field_at(p) {
        Ok(sample) => println!("{}", field_line(solver.surface(), &sample)),
        Err(err @ FieldError::PointOnSurface { .. }) => println!("{err}"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn main() -> Result<(), EmSurfacesError> {
    // Field of a charged disk at a few points (SI units).
    let cases = [
        (1.0, 1.0, point(1.0, 0.0, 0.0)),
        (1.0, 1.0, point(1.0, 1.0, 0.0)),
        (1.0, 1.0, point(1.0, 0.0, 1.0)),
        (1.0, 1.0, point(0.0, 1.0, 1.0)),
        (2.0, 1.0, point(0.0, 0.0, 1.0)),
        (1.0, 80.0, point(1.0, 1.0, 1.0)),
        (2.0, 1.0, point(0.0, 0.0, -1.0)),
    ];
    for (radius, density, p) in cases {
        print_field(radius, density, p)?;
    }

    // Central-axis comparison with k = 1, σ = 1.
    for height in [10.0, 9999.0] {
        let solver = SurfaceFieldSolver::new(Disk::new(1.0)?, 1.0, SimulationConfig::normalized())?;
        let sample = solver.field_at(point(0.0, 0.0, height))?;
        println!("{}", field_line(solver.surface(), &sample));
        let cmp = solver.compare_on_axis(height)?;
        println!("{}", disk_axis_line(1.0, height, cmp.reference));
        println!("{}", relative_difference_line(&cmp));
    }

    // Symmetry plot around a disk of radius 5; Ez halved so the in-plane pattern stays visible.
    let config = SimulationConfig::si().with_uniform_step(0.05)?;
    let solver = SurfaceFieldSolver::new(Disk::new(5.0)?, 1.0, config)?;
    let grid = Grid3::symmetry_default();
    let samples = sample_field(&grid, |p| solver.field_at(p))?;
    let path = Path::new("disk_field.svg");
    let style = QuiverStyle::default().with_z_scale(0.5);
    render_quiver(path, "Field around a charged disk (R = 5)", &samples, grid.spacing().unwrap_or(1.0), &style)?;
    println!("{} field vectors plotted to {}", samples.len(), path.display());
    Ok(())
}
