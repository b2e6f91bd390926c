//! Stack-based traversals of a `Graph` which remember visited vertices.
//!
//! A `GraphSearch` keeps its visited set across calls to `search`, so a
//! series of searches from different start vertices partitions the `Graph`
//! into the regions newly reached by each search. This is what the two
//! passes of Kosaraju's algorithm rely on.

use distances::Number;

use crate::{EdgeKind, Graph};

/// The order in which a `GraphSearch` admits the neighbors of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// All unvisited neighbors of the vertex on top of the stack are marked
    /// visited and pushed at once. The vertex is finished when it has no
    /// unvisited neighbors left.
    ///
    /// This reaches the same vertices as a depth-first search, but the
    /// finishing order is not a depth-first post-order.
    Order,
    /// Only the first unvisited neighbor of the vertex on top of the stack is
    /// admitted, which gives a genuine depth-first search and post-order.
    #[default]
    PostOrder,
}

/// A vertex on the stack and its neighbors still to be considered.
struct Frame {
    /// The vertex.
    vertex: usize,
    /// Its neighbors, as given by `Graph::connected_vertices`.
    neighbors: Vec<usize>,
    /// The index of the next neighbor to consider.
    cursor: usize,
}

/// A reusable traversal over a borrowed `Graph`.
pub struct GraphSearch<'a, K: EdgeKind, U: Number> {
    /// The `Graph` being searched.
    graph: &'a Graph<K, U>,
    /// How neighbors are admitted.
    traversal: Traversal,
    /// Whether each vertex slot has been visited by any search so far.
    visited: Vec<bool>,
    /// Vertices in the order they were visited by the last search.
    order: Vec<usize>,
    /// Vertices in the order they were finished by the last search.
    post_order: Vec<usize>,
}

impl<'a, K: EdgeKind, U: Number> GraphSearch<'a, K, U> {
    /// Creates a search over `graph` with nothing visited.
    #[must_use]
    pub fn new(graph: &'a Graph<K, U>, traversal: Traversal) -> Self {
        Self {
            graph,
            traversal,
            visited: vec![false; graph.vertex_capacity()],
            order: Vec::new(),
            post_order: Vec::new(),
        }
    }

    /// Creates a depth-first search over `graph`.
    #[must_use]
    pub fn depth_first(graph: &'a Graph<K, U>) -> Self {
        Self::new(graph, Traversal::PostOrder)
    }

    /// Searches from `start`, visiting every vertex reachable from it that no
    /// earlier search has visited.
    ///
    /// If `start` is absent or was already visited, nothing is visited.
    ///
    /// # Returns
    ///
    /// The newly visited vertices, in the order they were visited.
    pub fn search(&mut self, start: usize) -> &[usize] {
        self.order.clear();
        self.post_order.clear();

        if !self.graph.has_vertex(start) || self.visited[start] {
            return &self.order;
        }

        let mut stack = vec![self.visit(start)];
        while let Some(frame) = stack.last_mut() {
            let next = match self.traversal {
                Traversal::Order => {
                    let unvisited = frame
                        .neighbors
                        .iter()
                        .copied()
                        .filter(|&w| !self.visited[w])
                        .collect::<Vec<_>>();
                    if unvisited.is_empty() {
                        None
                    } else {
                        Some(unvisited)
                    }
                }
                Traversal::PostOrder => {
                    while frame.cursor < frame.neighbors.len() && self.visited[frame.neighbors[frame.cursor]] {
                        frame.cursor += 1;
                    }
                    frame.neighbors.get(frame.cursor).map(|&w| vec![w])
                }
            };

            if let Some(admitted) = next {
                for w in admitted {
                    let frame = self.visit(w);
                    stack.push(frame);
                }
            } else if let Some(finished) = stack.pop() {
                self.post_order.push(finished.vertex);
            }
        }

        &self.order
    }

    /// Marks `v` as visited and prepares its stack frame.
    fn visit(&mut self, v: usize) -> Frame {
        self.visited[v] = true;
        self.order.push(v);
        Frame {
            vertex: v,
            neighbors: self.graph.connected_vertices(v),
            cursor: 0,
        }
    }

    /// The vertices visited by the last search, in the order they were visited.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The vertices visited by the last search, in the order they were
    /// finished.
    #[must_use]
    pub fn post_order(&self) -> &[usize] {
        &self.post_order
    }

    /// Whether `v` was visited by any search so far.
    #[must_use]
    pub fn is_visited(&self, v: usize) -> bool {
        self.visited.get(v).copied().unwrap_or(false)
    }

    /// The `Traversal` of this search.
    #[must_use]
    pub const fn traversal(&self) -> Traversal {
        self.traversal
    }
}

/// The vertices reachable from `start`, including itself, in the order a
/// depth-first search visits them.
#[must_use]
pub fn reachable<K: EdgeKind, U: Number>(graph: &Graph<K, U>, start: usize) -> Vec<usize> {
    GraphSearch::depth_first(graph).search(start).to_vec()
}

#[cfg(test)]
mod tests {
    use crate::{DirectedGraph, Edge, UndirectedGraph};

    use super::{reachable, GraphSearch, Traversal};

    fn chain() -> DirectedGraph<u32> {
        // 0 -> 1 -> 2, 0 -> 2, 3 -> 0
        [Edge::new(0, 1, 1), Edge::new(0, 2, 1), Edge::new(1, 2, 1), Edge::new(3, 0, 1)].into_iter().collect()
    }

    #[test]
    fn post_order() {
        let g = chain();
        let mut dfs = GraphSearch::depth_first(&g);

        assert_eq!(dfs.search(0), &[0, 1, 2]);
        assert_eq!(dfs.post_order(), &[2, 1, 0]);

        // Already visited.
        assert!(dfs.search(1).is_empty());
        assert!(dfs.post_order().is_empty());

        assert_eq!(dfs.search(3), &[3]);
        assert_eq!(dfs.post_order(), &[3]);
        assert!((0..4).all(|v| dfs.is_visited(v)));

        // Absent.
        assert!(dfs.search(9).is_empty());
    }

    #[test]
    fn eager_order() {
        let g = chain();
        let mut search = GraphSearch::new(&g, Traversal::Order);
        assert_eq!(search.traversal(), Traversal::Order);

        let mut order = search.search(0).to_vec();
        assert_eq!(order[0], 0);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(search.post_order().last(), Some(&0));
    }

    #[test]
    fn undirected() {
        let g: UndirectedGraph<u32> = [Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(3, 4, 1)].into_iter().collect();

        let mut nearby = reachable(&g, 2);
        nearby.sort_unstable();
        assert_eq!(nearby, vec![0, 1, 2]);
        assert_eq!(reachable(&g, 4), vec![4, 3]);
    }
}
