//! Benchmarks for escape-time field generation.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use fractal_engine::{
    ComplexRect, IterationColourMapKind, colourise_field, iteration_colour_map_factory,
    mandelbrot_field, mandelbrot_field_serial,
};

fn classic_bounds() -> ComplexRect {
    ComplexRect::new(-2.5, 1.5, -2.0, 2.0).unwrap()
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("mandelbrot_field");
    group.sample_size(20);

    for size in [100u32, 400] {
        group.bench_with_input(BenchmarkId::new("rayon", size), &size, |b, &size| {
            b.iter(|| mandelbrot_field(black_box(classic_bounds()), size, size, 230).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("serial", size), &size, |b, &size| {
            b.iter(|| {
                mandelbrot_field_serial(black_box(classic_bounds()), size, size, 230).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_colourise(c: &mut Criterion) {
    let mut group = c.benchmark_group("colourise_field");

    let field = mandelbrot_field(classic_bounds(), 400, 400, 230).unwrap();

    for &kind in IterationColourMapKind::ALL {
        let map = iteration_colour_map_factory(kind, field.max_iterations());

        group.bench_function(kind.display_name(), |b| {
            b.iter(|| colourise_field(black_box(&field), &map).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_field, bench_colourise);
criterion_main!(benches);
