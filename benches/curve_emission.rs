//! Benchmarks for the geometric generators at the deepest supported levels.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use fractal_engine::{
    CantorConfig, ColourStrategy, Depth, Emission, KochConfig, PaletteScheme, SierpinskiConfig,
    cantor, depth_colour_map_factory, koch_snowflake, sierpinski,
};

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_emission");
    let palette = PaletteScheme::Vibrant.palette();

    for depth in [4i64, 7] {
        let depth = Depth::new(depth).unwrap();

        group.bench_with_input(BenchmarkId::new("sierpinski", depth), &depth, |b, &depth| {
            let config = SierpinskiConfig::default();
            b.iter(|| {
                let colours =
                    depth_colour_map_factory(ColourStrategy::ContinuousGradient, palette.clone());
                sierpinski(black_box(config.triangle), depth, colours, Emission::Layered)
                    .unwrap()
                    .count()
            })
        });

        group.bench_with_input(BenchmarkId::new("koch", depth), &depth, |b, &depth| {
            let config = KochConfig::default();
            b.iter(|| {
                let colours =
                    depth_colour_map_factory(ColourStrategy::ContinuousGradient, palette.clone());
                koch_snowflake(
                    black_box(config.centre),
                    config.size,
                    depth,
                    colours,
                    Emission::Layered,
                )
                .unwrap()
                .into_iter()
                .count()
            })
        });

        group.bench_with_input(BenchmarkId::new("cantor", depth), &depth, |b, &depth| {
            let config = CantorConfig::default();
            b.iter(|| {
                let colours =
                    depth_colour_map_factory(ColourStrategy::DiscreteRepeat, palette.clone());
                cantor(
                    config.seed().unwrap(),
                    config.y,
                    config.row_spacing,
                    depth,
                    colours,
                    Emission::Layered,
                )
                .unwrap()
                .count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_curves);
criterion_main!(benches);
