//! Random graphs for the benchmarks.

#![allow(dead_code)]

use graphs::{DirectedGraph, Edge, UndirectedGraph};
use rand::prelude::*;

/// A connected undirected graph with `n` vertices and about `degree * n / 2`
/// edges with costs in `1..=100`.
pub fn undirected(n: usize, degree: usize, seed: u64) -> UndirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UndirectedGraph::with_capacity(n);
    for v in 1..n {
        graph.add_edge(Edge::new(rng.gen_range(0..v), v, rng.gen_range(1..=100)));
    }
    for _ in 0..(n * degree.saturating_sub(2) / 2) {
        let (a, b) = (rng.gen_range(0..n), rng.gen_range(0..n));
        if a != b {
            graph.add_edge(Edge::new(a, b, rng.gen_range(1..=100)));
        }
    }
    graph
}

/// A directed graph with `n` vertices and `degree * n` edges with costs in
/// `1..=100`.
pub fn directed(n: usize, degree: usize, seed: u64) -> DirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for _ in 0..(n * degree) {
        let (a, b) = (rng.gen_range(0..n), rng.gen_range(0..n));
        graph.add_edge(Edge::new(a, b, rng.gen_range(1..=100)));
    }
    graph
}
