//! Benchmarks for the shortest-path engine
//!
//! Measures Dijkstra runs on random instances of growing size and density,
//! plus the cost of rebuilding path reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use waypoint::graph::Graph;
use waypoint::harness::{random_graph, Density};
use waypoint::shortest_path::{ShortestPathEngine, SourceReport};

/// Create a reproducible random instance
fn create_instance(vertices: usize, density: i64) -> Graph {
    let mut rng = StdRng::seed_from_u64(vertices as u64 ^ density as u64);
    random_graph(vertices, Density::clamped(density), &mut rng)
        .expect("generated edges are in range")
}

/// Benchmark a full single-source run at fixed density
fn bench_dijkstra_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_size");

    for size in [100, 250, 500, 1000].iter() {
        let graph = create_instance(*size, 10);

        group.bench_with_input(BenchmarkId::new("vertices", size), &graph, |b, g| {
            b.iter(|| black_box(ShortestPathEngine::new(g).dijkstra(0)));
        });
    }

    group.finish();
}

/// Benchmark a full single-source run at fixed size
fn bench_dijkstra_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_density");

    for density in [1, 10, 50, 100].iter() {
        let graph = create_instance(300, *density);

        group.bench_with_input(BenchmarkId::new("percent", density), &graph, |b, g| {
            b.iter(|| black_box(ShortestPathEngine::new(g).dijkstra(0)));
        });
    }

    group.finish();
}

/// Benchmark report reconstruction from a finished run
fn bench_source_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("source_report");

    for size in [100, 500, 1000].iter() {
        let graph = create_instance(*size, 5);
        let paths = ShortestPathEngine::new(&graph)
            .dijkstra(0)
            .expect("source 0 exists");

        group.bench_with_input(BenchmarkId::new("vertices", size), &paths, |b, p| {
            b.iter(|| black_box(SourceReport::from_paths(p)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dijkstra_size,
    bench_dijkstra_density,
    bench_source_report
);
criterion_main!(benches);
