//! Deep clone and structural comparison of large trees.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use robloxcs_ast::StructureEq;
use robloxcs_bench::synthetic_chunk;

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");

    for functions in [10, 100, 1000] {
        let chunk = synthetic_chunk(functions);

        group.bench_with_input(BenchmarkId::new("clone", functions), &chunk, |b, chunk| {
            b.iter(|| black_box(chunk).clone());
        });
        group.bench_with_input(
            BenchmarkId::new("structure_eq", functions),
            &chunk,
            |b, chunk| {
                let other = chunk.clone();
                b.iter(|| black_box(chunk).structure_eq(&other));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_clone);
criterion_main!(benches);
