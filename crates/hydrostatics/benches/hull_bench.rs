//! Criterion benchmarks for the hull aggregator and flotation solver.
//! Focus sizes: station counts in {5, 21, 51, 101}.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hydrostatics::cfg::HydroCfg;
use hydrostatics::flotation;
use hydrostatics::frame::Frame;
use hydrostatics::geometry::Point2;
use hydrostatics::hull;

fn half_circle_frame(x: f64) -> Frame {
    let n = 41;
    let yz: Vec<Point2> = (0..n)
        .map(|i| {
            let t = std::f64::consts::PI * i as f64 / (n - 1) as f64;
            Point2::new(t.sin(), 1.0 - t.cos())
        })
        .collect();
    Frame::new(x, yz)
}

fn cylinder(n_frames: usize, length: f64) -> Vec<Frame> {
    (0..n_frames)
        .map(|i| half_circle_frame(length * i as f64 / (n_frames - 1) as f64))
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[5usize, 21, 51, 101] {
        let frames = cylinder(n, 10.0);
        group.bench_with_input(BenchmarkId::new("displacement", n), &frames, |b, frames| {
            b.iter(|| black_box(hull::displacement(frames, 1.0, None, false)))
        });
        group.bench_with_input(BenchmarkId::new("lcb", n), &frames, |b, frames| {
            b.iter(|| black_box(hull::lcb(frames, 1.0, None)))
        });
        let cfg = HydroCfg::default();
        group.bench_with_input(BenchmarkId::new("kb", n), &frames, |b, frames| {
            b.iter(|| black_box(hull::kb(frames, 1.0, None, &cfg)))
        });
    }
    group.finish();
}

fn bench_flotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("flotation");
    for &n in &[5usize, 21, 51] {
        let half = cylinder(n, 10.0);
        let full = flotation::mirror_to_full(&half);
        let cfg = HydroCfg::default();
        let (target_disp, target_lcb, _, _) = flotation::submerge(&full, 1.0, 0.0);
        group.bench_with_input(BenchmarkId::new("float_frames", n), &full, |b, full| {
            b.iter(|| black_box(flotation::float_frames(full, target_disp, target_lcb, &cfg)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_flotation);
criterion_main!(benches);
