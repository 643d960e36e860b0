//! Benchmarks for metaball field evaluation.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use metaballs::{
    animation::frame_metaballs,
    compute::{PixelBuffer, render_field_into, render_field_sequential},
    schema::AnimationConfig,
};

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for size in [100, 200, 400, 800] {
        let config = AnimationConfig::with_size(size, size);
        let metaballs = frame_metaballs(&config.metaballs, 0.5);
        let mut buffer = PixelBuffer::new(size, size);

        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, _| {
            b.iter(|| render_field_into(black_box(&mut buffer), black_box(&metaballs)))
        });

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, _| {
            b.iter(|| render_field_sequential(black_box(&mut buffer), black_box(&metaballs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame);
criterion_main!(benches);
