//! Minimum spanning trees by Kruskal's and Prim's algorithms.

use distances::Number;
use priority_queue::PriorityQueue;

use crate::{
    utils::{sort_by_cost, RevNumber},
    EdgeId, Graph, UndirectedGraph, UnionFind,
};

/// Finds a minimum spanning tree with Kruskal's algorithm.
///
/// `Edge`s are considered in non-decreasing order of cost, with ties kept in
/// the order they are stored in the `Graph`, and each `Edge` joining two
/// different components is kept. The search stops once `vertex_count - 1`
/// `Edge`s have been kept.
///
/// # Returns
///
/// A new `Graph` with every vertex of `graph` and the kept `Edge`s. If
/// `graph` is disconnected, this is a minimum spanning forest.
#[must_use]
pub fn kruskal_mst<U: Number>(graph: &UndirectedGraph<U>) -> UndirectedGraph<U> {
    let mut edges = graph.edges().copied().collect::<Vec<_>>();
    sort_by_cost(&mut edges);

    let mut components = UnionFind::new(graph.vertex_capacity());
    let mut tree = spanning_vertices(graph);
    let target = graph.vertex_count().saturating_sub(1);
    for edge in edges {
        if components.union_count() >= target {
            break;
        }
        let [a, b] = edge.endpoints();
        if components.union(a, b) {
            tree.add_edge(edge);
        }
    }

    ftlog::debug!(
        "Kruskal kept {} edges with total cost {}",
        tree.edge_count(),
        tree.total_edge_cost()
    );
    tree
}

/// Finds a minimum spanning tree with Prim's algorithm.
///
/// The tree is grown from the smallest vertex index, repeatedly adding the
/// cheapest `Edge` which leaves it. Only the component of that vertex is
/// spanned.
///
/// # Returns
///
/// A new `Graph` with every vertex of `graph` and the `Edge`s of the tree.
#[must_use]
pub fn prim_mst<U: Number>(graph: &UndirectedGraph<U>) -> UndirectedGraph<U> {
    let mut tree = spanning_vertices(graph);
    let Some(root) = graph.vertex_indices().next() else {
        return tree;
    };

    let mut in_tree = vec![false; graph.vertex_capacity()];
    let mut frontier = PriorityQueue::new();
    grow(graph, root, &mut in_tree, &mut frontier);

    while let Some((id, _)) = frontier.pop() {
        let edge = graph
            .edge(id)
            .unwrap_or_else(|| unreachable!("Identifiers come from the graph itself."));
        let [a, b] = edge.endpoints();
        let next = match (in_tree[a], in_tree[b]) {
            (true, false) => b,
            (false, true) => a,
            _ => continue,
        };
        tree.add_edge(*edge);
        grow(graph, next, &mut in_tree, &mut frontier);
    }

    ftlog::debug!(
        "Prim kept {} edges with total cost {}",
        tree.edge_count(),
        tree.total_edge_cost()
    );
    tree
}

/// Adds `v` to the tree and queues the `Edge`s leaving the tree from `v`.
fn grow<U: Number>(
    graph: &UndirectedGraph<U>,
    v: usize,
    in_tree: &mut [bool],
    frontier: &mut PriorityQueue<EdgeId, RevNumber<U>>,
) {
    in_tree[v] = true;
    for (id, edge) in graph.incident_edges(v) {
        if !in_tree[edge.other(v)] {
            frontier.push(id, RevNumber(edge.cost()));
        }
    }
}

/// An empty `Graph` with the same vertices as `graph`.
fn spanning_vertices<U: Number>(graph: &UndirectedGraph<U>) -> UndirectedGraph<U> {
    let mut tree = Graph::with_capacity(graph.vertex_capacity());
    for v in graph.vertex_indices() {
        tree.add_vertex(v);
    }
    tree
}
