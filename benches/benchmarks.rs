//! Criterion benchmarks for graphwalk.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use graphwalk::{connected_components, BreadthFirstIter, DepthFirstIter, UndirectedGraph};

/// Random graph with `n` vertices and roughly `n * edges_per_vertex` edges.
fn make_random_graph(n: u32, edges_per_vertex: u32) -> UndirectedGraph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = UndirectedGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for a in 0..n {
        for _ in 0..edges_per_vertex {
            let b = rng.gen_range(0..n);
            graph.add_edge(a, b);
        }
    }
    // Tie everything into one component so traversal covers all vertices.
    for v in 1..n {
        graph.add_edge(v - 1, v);
    }
    graph
}

/// Chain graph: worst case for DFS frame depth.
fn make_chain(n: u32) -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for v in 1..n {
        graph.add_edge(v - 1, v);
    }
    graph
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("build_10k_vertices_30k_edges", |b| {
        b.iter(|| black_box(make_random_graph(10_000, 3)))
    });
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 3);
    c.bench_function("bfs_drain_10k", |b| {
        b.iter(|| {
            let count = BreadthFirstIter::new(&graph, &0).unwrap().count();
            black_box(count)
        })
    });
}

fn bench_dfs(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 3);
    c.bench_function("dfs_drain_10k", |b| {
        b.iter(|| {
            let count = DepthFirstIter::new(&graph, &0).unwrap().count();
            black_box(count)
        })
    });

    let chain = make_chain(100_000);
    c.bench_function("dfs_drain_chain_100k", |b| {
        b.iter(|| {
            let count = DepthFirstIter::new(&chain, &0).unwrap().count();
            black_box(count)
        })
    });
}

fn bench_components(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 1);
    c.bench_function("connected_components_10k", |b| {
        b.iter(|| black_box(connected_components(&graph).len()))
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_bfs,
    bench_dfs,
    bench_components
);
criterion_main!(benches);
