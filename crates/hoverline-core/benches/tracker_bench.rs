use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hoverline_core::{nearest_index, ChartConfig, DataPoint, Dataset, LineChart, Point, SurfaceSize};

fn gen_series(n: usize, series: usize) -> Dataset {
    (0..n)
        .map(|i| {
            let s = i % series;
            let x = (i / series) as f64;
            // one wave per series, phase-shifted
            let y = (x * 0.01 + s as f64).sin() * 10.0 + s as f64;
            DataPoint::new(x, y, format!("series-{s}"))
        })
        .collect()
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_index");
    for &n in &[1_000usize, 10_000usize, 50_000usize] {
        let chart = LineChart::new(gen_series(n, 8), ChartConfig::default(), SurfaceSize::new(1280, 720))
            .expect("chart");
        let projected = chart.geometry().projected().to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(n), &projected, |b, pts| {
            b.iter(|| black_box(nearest_index(black_box(Point::new(640.0, 360.0)), pts)));
        });
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut chart = LineChart::new(gen_series(5_000, 8), ChartConfig::default(), SurfaceSize::new(1280, 720))
        .expect("chart");
    c.bench_function("pointer_sweep_5k", |b| {
        b.iter(|| {
            chart.pointer_entered();
            for x in (40..1260).step_by(20) {
                black_box(chart.pointer_moved(Point::new(x as f32, 300.0)));
            }
            chart.pointer_left();
        })
    });
}

criterion_group!(benches, bench_nearest, bench_sweep);
criterion_main!(benches);
