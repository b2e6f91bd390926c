//! Tests on single-source shortest paths.

use graphs::{algorithms, io, DirectedGraph};
use test_case::test_case;

mod common;

#[test]
fn small() -> Result<(), String> {
    let graph: DirectedGraph<u32> = io::read_weighted_adjacency(common::data_path("dijkstra_1.txt"))?;
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(algorithms::dijkstra(&graph, 0), vec![Some(0), Some(3), Some(3), Some(5)]);
    assert_eq!(algorithms::dijkstra(&graph, 2), vec![None, None, Some(0), Some(3)]);
    Ok(())
}

#[test]
fn ring_with_isolated_vertex() -> Result<(), String> {
    let graph: DirectedGraph<u32> = io::read_weighted_adjacency(common::data_path("dijkstra_2.txt"))?;
    assert_eq!(graph.vertex_count(), 10);

    let distances = algorithms::dijkstra(&graph, 0);
    assert_eq!(
        distances,
        vec![
            Some(0),
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(4),
            Some(3),
            Some(2),
            Some(7),
            None
        ]
    );
    Ok(())
}

#[test_case(20, 60, 1 ; "small")]
#[test_case(100, 500, 2 ; "medium")]
#[test_case(200, 250, 3 ; "sparse")]
fn agrees_with_relaxation(n: usize, m: usize, seed: u64) {
    let graph = common::random_directed(n, m, 50, seed);
    for source in [0, n / 2, n - 1] {
        assert_eq!(algorithms::dijkstra(&graph, source), common::bellman_ford(&graph, source));
    }
}
