//! Rendering throughput for synthetic chunks.
//!
//! Run with: cargo bench -p robloxcs-bench
//! Results saved to: target/criterion/

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use robloxcs_bench::synthetic_chunk;
use robloxcs_render::render;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for functions in [1, 10, 100, 1000] {
        let chunk = synthetic_chunk(functions);

        group.throughput(Throughput::Elements(functions as u64));
        group.bench_with_input(BenchmarkId::new("chunk", functions), &chunk, |b, chunk| {
            b.iter(|| render(black_box(chunk)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
