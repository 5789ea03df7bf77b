use criterion::{Criterion, criterion_group, criterion_main};
use gearmap_rs::api::{HeatmapEngine, HeatmapEngineConfig};
use gearmap_rs::core::{RatioGrid, Viewport, parse_tooth_counts};
use gearmap_rs::render::NullRenderer;
use std::hint::black_box;

const FRONT_INPUT: &str = "30, 36, 42, 50";
const REAR_INPUT: &str = "10, 11, 12, 13, 14, 15, 17, 19, 21, 24, 28, 33";

fn bench_parse_tooth_counts(c: &mut Criterion) {
    c.bench_function("parse_tooth_counts_12", |b| {
        b.iter(|| parse_tooth_counts(black_box(REAR_INPUT)))
    });
}

fn bench_ratio_grid_build_4x12(c: &mut Criterion) {
    let front = parse_tooth_counts(FRONT_INPUT);
    let rear = parse_tooth_counts(REAR_INPUT);

    c.bench_function("ratio_grid_build_4x12", |b| {
        b.iter(|| RatioGrid::build(black_box(&front), black_box(&rear)))
    });
}

fn bench_build_render_frame_4x12(c: &mut Criterion) {
    let config = HeatmapEngineConfig::new(Viewport::new(1280, 720))
        .with_front_input(FRONT_INPUT)
        .with_rear_input(REAR_INPUT);
    let engine = HeatmapEngine::new(NullRenderer::default(), config).expect("engine init");

    c.bench_function("build_render_frame_4x12", |b| {
        b.iter(|| engine.build_render_frame().expect("build frame"))
    });
}

fn bench_input_change_recompute(c: &mut Criterion) {
    let config = HeatmapEngineConfig::new(Viewport::new(1280, 720));
    let mut engine = HeatmapEngine::new(NullRenderer::default(), config).expect("engine init");

    c.bench_function("input_change_recompute", |b| {
        b.iter(|| engine.set_rear_input(black_box(REAR_INPUT)))
    });
}

criterion_group!(
    benches,
    bench_parse_tooth_counts,
    bench_ratio_grid_build_4x12,
    bench_build_render_frame_4x12,
    bench_input_change_recompute
);
criterion_main!(benches);
