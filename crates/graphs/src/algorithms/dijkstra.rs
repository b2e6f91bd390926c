//! Single-source shortest paths by Dijkstra's algorithm.

use distances::Number;
use priority_queue::PriorityQueue;

use crate::{utils::RevNumber, EdgeKind, Graph};

/// Finds the shortest distance from `source` to every vertex.
///
/// Costs must be non-negative. For a directed `Graph`, `Edge`s are followed
/// from source to target.
///
/// # Returns
///
/// The distance to each vertex slot, indexed by vertex. Absent and
/// unreachable vertices have no distance. If `source` is absent, every
/// distance is `None`. Distances saturate at `U::MAX` instead of
/// overflowing.
#[must_use]
pub fn dijkstra<K: EdgeKind, U: Number>(graph: &Graph<K, U>, source: usize) -> Vec<Option<U>> {
    let mut distances = vec![None; graph.vertex_capacity()];
    if !graph.has_vertex(source) {
        return distances;
    }

    let mut settled = vec![false; graph.vertex_capacity()];
    let mut frontier = PriorityQueue::new();
    distances[source] = Some(U::ZERO);
    frontier.push(source, RevNumber(U::ZERO));

    while let Some((u, RevNumber(d))) = frontier.pop() {
        settled[u] = true;
        for (w, edge) in graph.out_edges(u) {
            if settled[w] {
                continue;
            }
            let candidate = saturating_add(d, edge.cost());
            let improved = match distances[w] {
                Some(current) => candidate < current,
                None => true,
            };
            if improved {
                distances[w] = Some(candidate);
                frontier.push(w, RevNumber(candidate));
            }
        }
    }

    ftlog::debug!(
        "Dijkstra from {source} reached {} of {} vertices",
        settled.iter().filter(|&&s| s).count(),
        graph.vertex_count()
    );
    distances
}

/// `a + b` for a non-negative `b`, clamped to `U::MAX`.
fn saturating_add<U: Number>(a: U, b: U) -> U {
    if a > U::MAX - b {
        U::MAX
    } else {
        a + b
    }
}
