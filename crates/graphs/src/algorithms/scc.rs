//! Strongly connected components by Kosaraju's two-pass algorithm.

use distances::Number;

use crate::{search::GraphSearch, DirectedGraph};

/// Finds the strongly connected components of a directed `Graph`.
///
/// The first pass runs depth-first searches over the reversed `Graph` and
/// records the order in which vertices finish. The second pass searches the
/// original `Graph` from each vertex in reverse finishing order, and each
/// search that visits anything yields one component.
///
/// # Returns
///
/// The components, each as the list of its vertices in the order the second
/// pass visited them. Every present vertex belongs to exactly one component.
#[must_use]
pub fn strongly_connected_components<U: Number>(graph: &DirectedGraph<U>) -> Vec<Vec<usize>> {
    let reversed = graph.reversed();
    let order = reverse_post_order(&reversed);

    let mut dfs = GraphSearch::depth_first(graph);
    let components = order
        .into_iter()
        .filter_map(|v| {
            let component = dfs.search(v);
            if component.is_empty() {
                None
            } else {
                Some(component.to_vec())
            }
        })
        .collect::<Vec<_>>();

    ftlog::debug!(
        "Found {} strongly connected components among {} vertices",
        components.len(),
        graph.vertex_count()
    );
    components
}

/// The sizes of the `n` largest components, in non-increasing order, padded
/// with zeros if there are fewer than `n` components.
#[must_use]
pub fn largest_component_sizes(components: &[Vec<usize>], n: usize) -> Vec<usize> {
    let mut sizes = components.iter().map(Vec::len).collect::<Vec<_>>();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.resize(n, 0);
    sizes
}

/// The vertices of `graph` in reverse order of finishing, over depth-first
/// searches started from each vertex in increasing index order.
fn reverse_post_order<U: Number>(graph: &DirectedGraph<U>) -> Vec<usize> {
    let mut dfs = GraphSearch::depth_first(graph);
    let mut finished = Vec::with_capacity(graph.vertex_count());
    for v in graph.vertex_indices() {
        dfs.search(v);
        finished.extend_from_slice(dfs.post_order());
    }
    finished.reverse();
    finished
}
