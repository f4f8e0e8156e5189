//! Criterion benchmarks for adjgraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use adjgraph::graph::Graph;
use adjgraph::types::NodeId;

/// Build a random graph with roughly `edges_per_node` edges per vertex.
fn make_graph(node_count: usize, edges_per_node: usize) -> (Graph<usize>, Vec<NodeId>) {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::with_capacity(node_count);
    let ids: Vec<NodeId> = (0..node_count).map(|i| graph.create_node(i)).collect();
    graph.add_vertices(ids.iter().copied());

    for &id in &ids {
        for _ in 0..edges_per_node {
            let target = ids[rng.gen_range(0..node_count)];
            graph.add_edge(id, target);
        }
    }

    (graph, ids)
}

fn bench_add_edge(c: &mut Criterion) {
    let (mut graph, ids) = make_graph(10_000, 3);

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = ids[rng.gen_range(0..ids.len())];
            let tgt = ids[rng.gen_range(0..ids.len())];
            graph.add_edge(src, tgt);
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    c.bench_function("remove_vertex_1k", |b| {
        b.iter_with_setup(
            || make_graph(1_000, 3),
            |(mut graph, ids)| {
                graph.remove_vertex(ids[0]);
                graph
            },
        )
    });
}

fn bench_dfs(c: &mut Criterion) {
    let (graph, ids) = make_graph(100_000, 3);

    c.bench_function("dfs_100k", |b| {
        b.iter(|| black_box(graph.depth_first_search_nodes(ids[0])))
    });
}

fn bench_bfs(c: &mut Criterion) {
    let (graph, ids) = make_graph(100_000, 3);

    c.bench_function("bfs_100k", |b| {
        b.iter(|| black_box(graph.breadth_first_search_nodes(ids[0])))
    });
}

fn bench_bfs_shortest(c: &mut Criterion) {
    let (graph, ids) = make_graph(10_000, 3);

    c.bench_function("bfs_shortest_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let end = ids[rng.gen_range(0..ids.len())];
            black_box(graph.bfs_shortest_nodes(ids[0], end))
        })
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_remove_vertex,
    bench_dfs,
    bench_bfs,
    bench_bfs_shortest
);
criterion_main!(benches);
