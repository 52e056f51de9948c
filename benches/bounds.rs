use criterion::{criterion_group, criterion_main, Criterion};
use flatgeom::algorithm::TotalBounds;
use flatgeom::geometry::Polygon;
use flatgeom::{Bounds, Coord, Layout};

fn create_data() -> Vec<Polygon> {
    // An L shape with elevation
    let ring = vec![
        0.0, 0.0, 1.0, //
        4.0, 0.0, 2.0, //
        4.0, 1.0, 3.0, //
        1.0, 1.0, 4.0, //
        1.0, 4.0, 5.0, //
        0.0, 4.0, 6.0, //
        0.0, 0.0, 1.0, //
    ];
    (0..1000)
        .map(|i| {
            let offset = i as f64;
            let flat_coords = ring
                .chunks_exact(3)
                .flat_map(|c| [c[0] + offset, c[1] - offset, c[2]])
                .collect::<Vec<_>>();
            let end = flat_coords.len();
            Polygon::new(Layout::XYZ, flat_coords, vec![end])
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();

    c.bench_function("extend Bounds by 1000 polygons", |b| {
        b.iter(|| {
            let mut bounds = Bounds::new(Layout::XYZ);
            for polygon in data.iter() {
                bounds.extend(polygon);
            }
            bounds
        })
    });

    c.bench_function("total_bounds 1000 polygons", |b| {
        b.iter(|| data.total_bounds(Layout::XY))
    });

    let bounds = data.total_bounds(Layout::XYZ);
    c.bench_function("overlaps_point", |b| {
        b.iter(|| bounds.overlaps_point(Layout::XYZ, Coord::from([500., -500., 3.])))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
