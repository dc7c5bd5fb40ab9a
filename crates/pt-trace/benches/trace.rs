use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pt_trace::{Bounds, CellMap, ContourTracer};

fn disk_map(size: i32, radius: f64) -> CellMap {
    let c = f64::from(size) / 2.0;
    CellMap::from_fill_fn(Bounds::new(0, 0, size, size), |x, y| {
        let dx = f64::from(x) - c;
        let dy = f64::from(y) - c;
        dx * dx + dy * dy < radius * radius
    })
}

fn checkerboard_map(size: i32) -> CellMap {
    // Checkerboard with a one-pixel margin: every interior window is a
    // saddle or a stub, the tracer's worst case.
    CellMap::from_fill_fn(Bounds::new(0, 0, size, size), |x, y| {
        x > 0 && y > 0 && x < size - 1 && y < size - 1 && (x + y) % 2 == 0
    })
}

fn bench_trace_disk(c: &mut Criterion) {
    let tracer = ContourTracer::new();

    c.bench_function("pt_trace_disk_512", |b| {
        b.iter(|| {
            let mut map = disk_map(512, 200.0);
            let polygons = tracer.trace(black_box(&mut map)).expect("disk traces");
            black_box(polygons.len());
        });
    });
}

fn bench_trace_checkerboard(c: &mut Criterion) {
    let tracer = ContourTracer::new();

    c.bench_function("pt_trace_checkerboard_128", |b| {
        b.iter(|| {
            let mut map = checkerboard_map(128);
            let polygons = tracer
                .trace(black_box(&mut map))
                .expect("checkerboard traces");
            black_box(polygons.len());
        });
    });
}

criterion_group!(benches, bench_trace_disk, bench_trace_checkerboard);
criterion_main!(benches);
