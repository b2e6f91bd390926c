//! Tests on Karger's minimum cut.

use graphs::{algorithms, io, UndirectedGraph};
use test_case::test_case;

mod common;

#[test_case("min_cut_triangles.txt", 6, 8, 2, 40 ; "two triangles")]
#[test_case("min_cut_cliques.txt", 10, 23, 3, 400 ; "two cliques")]
fn fixtures(name: &str, n: usize, m: usize, cut_size: usize, repetitions: usize) -> Result<(), String> {
    let graph: UndirectedGraph<u32> = io::read_adjacency(common::data_path(name))?;
    assert_eq!(graph.vertex_count(), n);
    assert_eq!(graph.edge_count(), m);

    let cut = algorithms::minimum_cut(&graph, Some(repetitions), Some(42))?;
    assert_eq!(cut.vertex_count(), 2);
    assert_eq!(cut.edge_count(), cut_size);

    let par_cut = algorithms::par_minimum_cut(&graph, Some(repetitions), Some(42))?;
    assert_eq!(par_cut.edge_count(), cut_size);
    assert_eq!(
        par_cut.vertex_indices().collect::<Vec<_>>(),
        cut.vertex_indices().collect::<Vec<_>>()
    );

    // The input is left untouched.
    assert_eq!(graph.edge_count(), m);
    Ok(())
}

#[test]
fn default_repetitions() -> Result<(), String> {
    let graph: UndirectedGraph<u32> = io::read_adjacency(common::data_path("min_cut_triangles.txt"))?;
    let cut = algorithms::minimum_cut(&graph, None, Some(0))?;
    assert_eq!(cut.edge_count(), 2);
    Ok(())
}

#[test]
fn best_of_trials() -> Result<(), String> {
    let graph = common::random_connected(30, 60, 5, 11);
    let trial = algorithms::contract_randomly(&graph, Some(11));
    let best = algorithms::minimum_cut(&graph, Some(50), Some(11))?;
    assert!(best.edge_count() <= trial.edge_count());
    assert_eq!(best.vertex_count(), 2);
    Ok(())
}

#[test_case(12, 30, 3 ; "small")]
#[test_case(20, 45, 7 ; "medium")]
#[test_case(30, 90, 13 ; "dense")]
fn more_trials_never_worse(n: usize, m: usize, seed: u64) -> Result<(), String> {
    let graph = common::random_connected(n, m, 1, seed);

    let mut previous = usize::MAX;
    for repetitions in [1, 2, 4, 8, 16, 32, 64] {
        let cut = algorithms::minimum_cut(&graph, Some(repetitions), Some(seed))?;
        assert!(cut.edge_count() <= previous);
        previous = cut.edge_count();

        let par_cut = algorithms::par_minimum_cut(&graph, Some(repetitions), Some(seed))?;
        assert_eq!(par_cut.edge_count(), cut.edge_count());
        assert_eq!(
            par_cut.vertex_indices().collect::<Vec<_>>(),
            cut.vertex_indices().collect::<Vec<_>>()
        );
    }
    Ok(())
}
