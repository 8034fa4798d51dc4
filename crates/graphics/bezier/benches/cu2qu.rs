use bezier::{curve_to_quadratic, curves_to_quadratic, CubicBezier, Vec2D};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const CURVES: [CubicBezier; 3] = [
    CubicBezier::new(
        Vec2D::new(550., 258.),
        Vec2D::new(1044., 482.),
        Vec2D::new(2029., 1841.),
        Vec2D::new(1934., 1554.),
    ),
    CubicBezier::new(
        Vec2D::new(859., 384.),
        Vec2D::new(1998., 116.),
        Vec2D::new(1596., 1772.),
        Vec2D::new(8., 1824.),
    ),
    CubicBezier::new(
        Vec2D::new(1090., 937.),
        Vec2D::new(418., 1300.),
        Vec2D::new(125., 91.),
        Vec2D::new(104., 37.),
    ),
];

fn single_curve(c: &mut Criterion) {
    for tolerance in [0.1, 1., 5.] {
        c.bench_with_input(
            BenchmarkId::new("curve_to_quadratic", tolerance),
            &tolerance,
            |b, &tolerance| b.iter(|| curve_to_quadratic(black_box(&CURVES[0]), tolerance)),
        );
    }
}

fn compatible_curves(c: &mut Criterion) {
    let tolerances = [1.; CURVES.len()];

    c.bench_function("curves_to_quadratic", |b| {
        b.iter(|| curves_to_quadratic(black_box(&CURVES), &tolerances))
    });
}

fn split(c: &mut Criterion) {
    for n in [2, 5, 6, 17] {
        c.bench_with_input(BenchmarkId::new("split", n), &n, |b, &n| {
            b.iter(|| black_box(&CURVES[1]).split(n))
        });
    }
}

criterion_group!(benches, single_curve, compatible_curves, split);
criterion_main!(benches);
