use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numquad::{riemann, simpson, trapezoid};

fn normal_density(x: f64) -> f64 {
    (-x * x / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadrature_rules");

    group.bench_function("riemann_n1000", |bencher| {
        bencher.iter(|| riemann(normal_density, black_box(0.0), black_box(1.0), 1000).unwrap())
    });
    group.bench_function("trapezoid_n1000", |bencher| {
        bencher.iter(|| trapezoid(normal_density, black_box(0.0), black_box(1.0), 1000).unwrap())
    });
    group.bench_function("simpson_n1000", |bencher| {
        bencher.iter(|| simpson(normal_density, black_box(0.0), black_box(1.0), 1000).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_rules);
criterion_main!(benches);
