use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pixelflow::prelude::*;

fn gradient(width: usize, height: usize) -> Vec<Pixel> {
    (0..width * height)
        .map(|i| Pixel::new((i % 256) as u8, (i / 3 % 256) as u8, (i / 7 % 256) as u8, 255))
        .collect()
}

fn bench_process(c: &mut Criterion) {
    let registry = FilterRegistry::with_defaults();
    let pipeline = registry
        .pipeline(["Balance", "More Red", "50% Brighter", "BW"])
        .expect("default filters are registered");

    let sequential = ImageProcessor::with_options(ProcessorOptions::new().with_parallel(false));
    let parallel = ImageProcessor::new();

    let mut group = c.benchmark_group("process");
    for side in [256usize, 1024] {
        let image = gradient(side, side);
        group.bench_with_input(BenchmarkId::new("sequential", side), &image, |b, image| {
            b.iter(|| sequential.process(black_box(image), side, side, &pipeline))
        });
        group.bench_with_input(BenchmarkId::new("parallel", side), &image, |b, image| {
            b.iter(|| parallel.process(black_box(image), side, side, &pipeline))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
