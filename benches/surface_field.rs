use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use em_surfaces::prelude::*;

fn bench_dblquad(c: &mut Criterion) {
    let mut group = c.benchmark_group("dblquad_unit_square");
    for step in [0.02, 0.01, 0.005] {
        let fixed = FixedStep::uniform(step).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(step), &fixed, |b, fixed| {
            b.iter(|| dblquad(|x, y| x * y, 0.0, 1.0, |_| 0.0, |_| 1.0, black_box(fixed)))
        });
    }
    group.finish();
}

fn bench_disk_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("disk_axis_field");
    group.sample_size(10);
    let solver = SurfaceFieldSolver::new(Disk::new(1.0).unwrap(), 1.0, SimulationConfig::normalized()).unwrap();
    for height in linspace(1.0, 10.0, 3) {
        group.bench_with_input(BenchmarkId::from_parameter(height), &height, |b, &h| {
            b.iter(|| solver.field_at(point(0.0, 0.0, black_box(h))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dblquad, bench_disk_axis);
criterion_main!(benches);
