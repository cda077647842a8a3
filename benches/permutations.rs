use criterion::{black_box, criterion_group, criterion_main, Criterion};
use combilab::combinatorics::{dedup_permutations, generate_unique_permutations};
use combilab::graph::{exact_vertex_cover, generators, greedy_vertex_cover};

fn bench_permutations(c: &mut Criterion) {
    let elements = [1, 1, 2, 2, 3, 3, 4];

    c.bench_function("unique_permutations_backtracking", |b| {
        b.iter(|| generate_unique_permutations(black_box(&elements)))
    });
    c.bench_function("unique_permutations_dedup", |b| {
        b.iter(|| dedup_permutations(black_box(&elements)))
    });
}

fn bench_vertex_cover(c: &mut Criterion) {
    let graph = generators::cycle(14);

    c.bench_function("vertex_cover_exact", |b| {
        b.iter(|| exact_vertex_cover(black_box(&graph)))
    });
    c.bench_function("vertex_cover_greedy", |b| {
        b.iter(|| greedy_vertex_cover(black_box(&graph)))
    });
}

criterion_group!(benches, bench_permutations, bench_vertex_cover);
criterion_main!(benches);
