//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use graphs::{DirectedGraph, Edge, UndirectedGraph};
use rand::prelude::*;

/// The path to a file in the `tests/data` directory.
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

/// A connected undirected graph with `n` vertices and `m` random edges on top
/// of a random spanning path. Costs are drawn from `1..=max_cost`.
pub fn random_connected(n: usize, m: usize, max_cost: u32, seed: u64) -> UndirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut order = (0..n).collect::<Vec<_>>();
    order.shuffle(&mut rng);

    let mut graph = UndirectedGraph::with_capacity(n);
    for pair in order.windows(2) {
        graph.add_edge(Edge::new(pair[0], pair[1], rng.gen_range(1..=max_cost)));
    }
    for _ in 0..m {
        let (a, b) = (rng.gen_range(0..n), rng.gen_range(0..n));
        graph.add_edge(Edge::new(a, b, rng.gen_range(1..=max_cost)));
    }
    graph
}

/// A directed graph with `n` vertices, all present, and `m` random edges.
pub fn random_directed(n: usize, m: usize, max_cost: u32, seed: u64) -> DirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for _ in 0..m {
        let (a, b) = (rng.gen_range(0..n), rng.gen_range(0..n));
        graph.add_edge(Edge::new(a, b, rng.gen_range(1..=max_cost)));
    }
    graph
}

/// Shortest distances by repeated relaxation of every edge.
pub fn bellman_ford(graph: &DirectedGraph<u32>, source: usize) -> Vec<Option<u32>> {
    let mut distances = vec![None; graph.vertex_capacity()];
    if !graph.has_vertex(source) {
        return distances;
    }
    distances[source] = Some(0);

    for _ in 0..graph.vertex_count() {
        for edge in graph.edges() {
            if let Some(d) = distances[edge.source()] {
                let candidate = d + edge.cost();
                if distances[edge.target()].map_or(true, |current| candidate < current) {
                    distances[edge.target()] = Some(candidate);
                }
            }
        }
    }
    distances
}

/// Sorts each component and then the list of components.
pub fn canonical(mut components: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    for c in &mut components {
        c.sort_unstable();
    }
    components.sort();
    components
}
