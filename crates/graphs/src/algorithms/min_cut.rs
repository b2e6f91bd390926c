//! Karger's randomized contraction algorithm for the minimum cut.

use distances::Number;
use rand::prelude::*;
use rayon::prelude::*;

use crate::{EdgeKind, Graph};

/// Estimates the minimum cut of a `Graph` by repeated random contraction.
///
/// Each trial contracts a copy of the `Graph`, choosing uniformly among the
/// remaining `Edge`s, until two vertices remain. The `Edge`s left between
/// them form a cut. The trial with the fewest remaining `Edge`s is returned.
///
/// # Arguments
///
/// * `graph`: The `Graph` to cut. It is not modified.
/// * `repetitions`: The number of trials. Defaults to twice the number of
///   vertices.
/// * `seed`: The seed for the random number generators. Trial `i` is seeded
///   with `seed + i`, so seeded runs are reproducible.
///
/// # Returns
///
/// The contracted `Graph` of the best trial. Its `edge_count` is the size of
/// the cut.
///
/// # Errors
///
/// * If the `Graph` has fewer than two vertices.
/// * If `repetitions` is zero.
pub fn minimum_cut<K: EdgeKind, U: Number>(
    graph: &Graph<K, U>,
    repetitions: Option<usize>,
    seed: Option<u64>,
) -> Result<Graph<K, U>, String> {
    let repetitions = check_cut(graph, repetitions)?;

    let mut best: Option<Graph<K, U>> = None;
    for i in 0..repetitions {
        let cut = contract_randomly(graph, trial_seed(seed, i));
        if i % 100 == 0 {
            ftlog::debug!("Min-cut trial {}/{repetitions} found a cut of size {}", i + 1, cut.edge_count());
        }
        best = match best {
            Some(b) if b.edge_count() <= cut.edge_count() => Some(b),
            _ => Some(cut),
        };
    }

    best.ok_or_else(|| "No trials were run.".to_string())
}

/// Parallelized version of `minimum_cut`.
///
/// Trials are seeded exactly as in `minimum_cut`, and ties are broken in
/// favor of the earliest trial, so both return the same cut for the same
/// seed.
///
/// # Errors
///
/// See `minimum_cut`.
pub fn par_minimum_cut<K: EdgeKind, U: Number>(
    graph: &Graph<K, U>,
    repetitions: Option<usize>,
    seed: Option<u64>,
) -> Result<Graph<K, U>, String> {
    let repetitions = check_cut(graph, repetitions)?;

    (0..repetitions)
        .into_par_iter()
        .map(|i| contract_randomly(graph, trial_seed(seed, i)))
        .min_by_key(Graph::edge_count)
        .ok_or_else(|| "No trials were run.".to_string())
}

/// Validates the inputs of a minimum cut and resolves the number of trials.
fn check_cut<K: EdgeKind, U: Number>(graph: &Graph<K, U>, repetitions: Option<usize>) -> Result<usize, String> {
    if graph.vertex_count() < 2 {
        return Err(format!(
            "A cut needs at least two vertices but the graph has {}.",
            graph.vertex_count()
        ));
    }
    let repetitions = repetitions.unwrap_or_else(|| 2 * graph.vertex_count());
    if repetitions == 0 {
        return Err("The number of repetitions must be positive.".to_string());
    }
    ftlog::info!(
        "Running {repetitions} min-cut trials on a graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(repetitions)
}

/// The seed for trial `i`.
fn trial_seed(seed: Option<u64>, i: usize) -> Option<u64> {
    seed.map(|s| s.wrapping_add(i.as_u64()))
}

/// Runs a single trial of random contraction on a copy of `graph`.
///
/// Contraction stops at two vertices, or earlier if no `Edge`s remain, in
/// which case the `Graph` was disconnected and the cut is empty.
pub fn contract_randomly<K: EdgeKind, U: Number>(graph: &Graph<K, U>, seed: Option<u64>) -> Graph<K, U> {
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let mut working = graph.clone();
    while working.vertex_count() > 2 && working.edge_count() > 0 {
        let position = rng.gen_range(0..working.edge_count());
        let edge = *working
            .edge_at(position)
            .unwrap_or_else(|| unreachable!("Positions below the edge count are always live."));
        working.contract_edge(&edge);
    }

    working
}

#[cfg(test)]
mod tests {
    use crate::{Edge, UndirectedGraph};

    use super::{contract_randomly, minimum_cut, par_minimum_cut};

    fn square() -> UndirectedGraph<u32> {
        // A 4-cycle with one chord: min cut is 2.
        [Edge::unit(0, 1), Edge::unit(1, 2), Edge::unit(2, 3), Edge::unit(3, 0), Edge::unit(0, 2)]
            .into_iter()
            .collect()
    }

    #[test]
    fn single_trial() {
        let g = square();
        let cut = contract_randomly(&g, Some(42));
        assert_eq!(cut.vertex_count(), 2);
        assert!(cut.edge_count() >= 2);
        assert!(cut.edges().all(|e| !e.is_circular()));
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn reproducible() -> Result<(), String> {
        let g = square();
        let a = minimum_cut(&g, Some(30), Some(7))?;
        let b = par_minimum_cut(&g, Some(30), Some(7))?;
        assert_eq!(a.edge_count(), 2);
        assert_eq!(a.edge_count(), b.edge_count());
        assert_eq!(a.vertex_indices().collect::<Vec<_>>(), b.vertex_indices().collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn invalid() {
        let single: UndirectedGraph<u32> = [Edge::unit(0, 0)].into_iter().collect();
        assert!(minimum_cut(&single, None, None).is_err());
        assert!(minimum_cut(&square(), Some(0), None).is_err());
    }

    #[test]
    fn disconnected() -> Result<(), String> {
        let g: UndirectedGraph<u32> = [Edge::unit(0, 1), Edge::unit(1, 2), Edge::unit(3, 4)].into_iter().collect();
        let cut = minimum_cut(&g, None, Some(1))?;
        assert_eq!(cut.edge_count(), 0);
        Ok(())
    }
}
