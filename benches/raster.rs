use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lattice::{
    bezier::{evaluate, subdivide},
    rasterizer::{rasterize_circle, rasterize_line},
    Camera, ControlPolygon,
};
use std::time::Duration;
use vek::*;

fn lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    for &len in &[10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| rasterize_line(-len, -len / 3, len, len / 3, 0.01))
        });
    }
    group.finish();
}

fn circles(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");
    for &radius in &[10u32, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| rasterize_circle(radius, 0.01))
        });
    }
    group.finish();
}

fn curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("bezier");
    for &degree in &[3usize, 10, 20] {
        let points: Vec<Vec2<f32>> = (0..=degree)
            .map(|i| {
                let a = i as f32 / degree as f32 * core::f32::consts::PI;
                Vec2::new(a.cos(), a.sin())
            })
            .collect();
        let poly = ControlPolygon::from(points.clone());

        group.bench_with_input(BenchmarkId::new("bernstein", degree), &points, |b, points| {
            b.iter(|| evaluate(points, 0.37))
        });
        group.bench_with_input(BenchmarkId::new("de_casteljau", degree), &points, |b, points| {
            b.iter(|| subdivide(points, 0.37))
        });
        group.bench_with_input(BenchmarkId::new("samples_100", degree), &poly, |b, poly| {
            b.iter(|| poly.samples(100).map(|s| s.count()))
        });
    }
    group.finish();
}

fn camera(c: &mut Criterion) {
    let mut camera = Camera::at(Vec3::new(0.0, 0.0, 10.0));
    c.bench_function("camera_look_and_view", |b| {
        b.iter(|| {
            camera.look(3.0, -1.5);
            camera.view_matrix()
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .warm_up_time(Duration::from_millis(1000));
    targets = lines, circles, curves, camera
}

criterion_main!(benches);
