//! A `Graph` over integer-labelled vertices, supporting edge contraction.

use core::marker::PhantomData;
use std::collections::HashSet;

use distances::Number;
use serde::{Deserialize, Serialize};

use super::edge::{Directed, Edge, EdgeKind, Undirected};

/// The identifier of an `Edge` slot in a `Graph`.
///
/// Identifiers are only meaningful for the `Graph` that issued them and may
/// be reused after the `Edge` they referred to is removed.
pub type EdgeId = usize;

/// A `Graph` whose `Edge`s run from source to target.
pub type DirectedGraph<U> = Graph<Directed, U>;

/// A `Graph` whose `Edge`s may be traversed from either endpoint.
pub type UndirectedGraph<U> = Graph<Undirected, U>;

/// A vertex in a `Graph` and the `Edge`s incident on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// Identifiers of the incident `Edge`s, in insertion order.
    edges: Vec<EdgeId>,
}

impl Vertex {
    /// The identifiers of the `Edge`s incident on this vertex.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// The number of `Edge`s incident on this vertex.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// A `Graph` of vertices labelled by dense indices and `Edge`s with costs.
///
/// Vertex slots may be empty. A slot is filled when an `Edge` touching it is
/// added, and emptied when the vertex is removed or contracted away.
///
/// `Edge`s live in an arena. Each vertex holds the identifiers of its
/// incident `Edge`s, so removing an `Edge` only touches its endpoints. A
/// directed `Edge` is registered with both its source and its target, so it
/// can be found and removed from either side.
///
/// # Type Parameters
///
/// * `K`: The kind of `Edge`s, `Directed` or `Undirected`.
/// * `U`: The type of the `Edge` costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<K: EdgeKind, U: Number> {
    /// The vertex slots.
    vertices: Vec<Option<Vertex>>,
    /// The `Edge` arena.
    slots: Vec<Option<Edge<U>>>,
    /// Empty slots in the arena, available for reuse.
    free: Vec<EdgeId>,
    /// The identifiers of live `Edge`s, in no particular order.
    live: Vec<EdgeId>,
    /// The position of each live `Edge` in `live`.
    positions: Vec<usize>,
    /// The number of filled vertex slots.
    vertex_count: usize,
    /// The sum of the costs of all live `Edge`s.
    total_edge_cost: U,
    /// The kind of the `Edge`s.
    kind: PhantomData<K>,
}

impl<K: EdgeKind, U: Number> Default for Graph<K, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EdgeKind, U: Number> Graph<K, U> {
    /// Creates an empty `Graph`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            slots: Vec::new(),
            free: Vec::new(),
            live: Vec::new(),
            positions: Vec::new(),
            vertex_count: 0,
            total_edge_cost: U::ZERO,
            kind: PhantomData,
        }
    }

    /// Creates a `Graph` with `capacity` empty vertex slots.
    ///
    /// Adding an `Edge` beyond the capacity grows the `Graph`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut graph = Self::new();
        graph.vertices.resize_with(capacity, || None);
        graph
    }

    /// The number of vertices present in the `Graph`.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The number of vertex slots, present or not.
    ///
    /// Every vertex index in the `Graph` is smaller than this.
    #[must_use]
    pub fn vertex_capacity(&self) -> usize {
        self.vertices.len()
    }

    /// The number of `Edge`s in the `Graph`, counting parallel `Edge`s and
    /// self-loops.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.live.len()
    }

    /// The sum of the costs of all `Edge`s in the `Graph`.
    #[must_use]
    pub const fn total_edge_cost(&self) -> U {
        self.total_edge_cost
    }

    /// Whether the `Graph` has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Whether the vertex `v` is present.
    #[must_use]
    pub fn has_vertex(&self, v: usize) -> bool {
        self.vertex(v).is_some()
    }

    /// The vertex `v`, if present.
    #[must_use]
    pub fn vertex(&self, v: usize) -> Option<&Vertex> {
        self.vertices.get(v).and_then(Option::as_ref)
    }

    /// The indices of the present vertices, in increasing order.
    pub fn vertex_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().enumerate().filter_map(|(v, slot)| slot.as_ref().map(|_| v))
    }

    /// The `Edge` with the given identifier, if it is live.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<U>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// The `Edge` at the given position among the live `Edge`s.
    ///
    /// Positions run from `0` to `edge_count() - 1`. This allows sampling an
    /// `Edge` uniformly at random.
    #[must_use]
    pub fn edge_at(&self, position: usize) -> Option<&Edge<U>> {
        self.live.get(position).and_then(|&id| self.edge(id))
    }

    /// All `Edge`s in the `Graph`, each exactly once.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<U>> + '_ {
        self.live.iter().filter_map(|&id| self.edge(id))
    }

    /// The `Edge`s incident on `v`, with their identifiers, in insertion order.
    ///
    /// For a directed `Graph` this includes both outgoing and incoming `Edge`s.
    pub fn incident_edges(&self, v: usize) -> impl Iterator<Item = (EdgeId, &Edge<U>)> + '_ {
        self.vertex(v)
            .into_iter()
            .flat_map(|vertex| vertex.edges.iter())
            .filter_map(|&id| self.edge(id).map(|e| (id, e)))
    }

    /// The `Edge`s which may be traversed starting at `v`, paired with the
    /// vertex they lead to.
    pub fn out_edges(&self, v: usize) -> impl Iterator<Item = (usize, &Edge<U>)> + '_ {
        self.incident_edges(v)
            .filter(move |(_, e)| K::leaves(e, v))
            .map(move |(_, e)| (e.other(v), e))
    }

    /// The distinct vertices reachable from `v` over a single `Edge`, in the
    /// order their first connecting `Edge` was added.
    ///
    /// For a directed `Graph`, only outgoing `Edge`s are followed. An absent
    /// vertex has no neighbors.
    #[must_use]
    pub fn connected_vertices(&self, v: usize) -> Vec<usize> {
        let mut seen = HashSet::new();
        self.out_edges(v).map(|(w, _)| w).filter(|&w| seen.insert(w)).collect()
    }

    /// Adds the vertex `v` if it is not already present.
    ///
    /// Returns whether the vertex was added.
    pub fn add_vertex(&mut self, v: usize) -> bool {
        let present = self.has_vertex(v);
        self.fill(v);
        !present
    }

    /// Fills the slot for `v` if it is empty, growing the `Graph` as needed.
    fn fill(&mut self, v: usize) -> &mut Vertex {
        if v >= self.vertices.len() {
            self.vertices.resize_with(v + 1, || None);
        }
        let slot = &mut self.vertices[v];
        if slot.is_none() {
            self.vertex_count += 1;
        }
        slot.get_or_insert_with(Vertex::default)
    }

    /// Adds an `Edge`, creating its endpoints if they are absent.
    ///
    /// Parallel `Edge`s and self-loops are allowed.
    ///
    /// # Returns
    ///
    /// The identifier of the new `Edge`.
    pub fn add_edge(&mut self, edge: Edge<U>) -> EdgeId {
        let id = if let Some(id) = self.free.pop() {
            self.slots[id] = Some(edge);
            id
        } else {
            self.slots.push(Some(edge));
            self.positions.push(0);
            self.slots.len() - 1
        };
        self.positions[id] = self.live.len();
        self.live.push(id);
        self.total_edge_cost += edge.cost();

        let [a, b] = edge.endpoints();
        self.fill(a).edges.push(id);
        if b != a {
            self.fill(b).edges.push(id);
        }

        id
    }

    /// Finds the first `Edge` equal to `edge` among those incident on its
    /// first endpoint.
    fn find_edge(&self, edge: &Edge<U>) -> Option<EdgeId> {
        self.vertex(edge.either())?
            .edges
            .iter()
            .copied()
            .find(|&id| self.edge(id) == Some(edge))
    }

    /// Removes one `Edge` equal to `edge`.
    ///
    /// Equality considers the endpoints, in order, and the cost. Among
    /// several equal `Edge`s, the one added first is removed.
    ///
    /// Returns whether an `Edge` was removed.
    pub fn remove_edge(&mut self, edge: &Edge<U>) -> bool {
        self.find_edge(edge).map(|id| self.take_edge(id)).is_some()
    }

    /// Removes the `Edge` with the given identifier, if it is live.
    pub fn remove_edge_by_id(&mut self, id: EdgeId) -> Option<Edge<U>> {
        self.edge(id).is_some().then(|| self.take_edge(id))
    }

    /// Removes a live `Edge` from the arena and from its endpoints.
    fn take_edge(&mut self, id: EdgeId) -> Edge<U> {
        let edge = self.slots[id]
            .take()
            .unwrap_or_else(|| unreachable!("Only live edges are taken."));

        let position = self.positions[id];
        self.live.swap_remove(position);
        if let Some(&moved) = self.live.get(position) {
            self.positions[moved] = position;
        }
        self.free.push(id);

        for v in edge.endpoints() {
            if let Some(Some(vertex)) = self.vertices.get_mut(v) {
                vertex.edges.retain(|&e| e != id);
            }
        }
        self.total_edge_cost -= edge.cost();

        edge
    }

    /// Removes the vertex `v` and every `Edge` incident on it.
    ///
    /// Returns whether the vertex was present.
    pub fn remove_vertex(&mut self, v: usize) -> bool {
        let Some(vertex) = self.vertices.get_mut(v).and_then(Option::take) else {
            return false;
        };
        for id in vertex.edges {
            // A self-loop is registered once, but guard against double removal.
            if self.edge(id).is_some() {
                self.take_edge(id);
            }
        }
        self.vertex_count -= 1;
        true
    }

    /// Contracts an `Edge`, merging its second endpoint into its first.
    ///
    /// Every copy of `edge` and of its reverse is removed. The remaining
    /// `Edge`s incident on the second endpoint are moved to the first, in
    /// both directions for a directed `Graph`, and the second endpoint is
    /// removed. Parallel `Edge`s with other costs between the two endpoints
    /// become self-loops on the merged vertex.
    ///
    /// Contracting a self-loop removes its copies and nothing else.
    ///
    /// Returns `false`, without changing the `Graph`, if either endpoint is
    /// absent.
    pub fn contract_edge(&mut self, edge: &Edge<U>) -> bool {
        let [keep, gone] = edge.endpoints();
        if !(self.has_vertex(keep) && self.has_vertex(gone)) {
            return false;
        }

        let reverse = edge.reverse();
        while self.remove_edge(edge) {}
        while self.remove_edge(&reverse) {}

        if keep == gone {
            return true;
        }

        let incident = self.vertex(gone).map(|v| v.edges.clone()).unwrap_or_default();
        for id in incident {
            let moved = self.take_edge(id).rehome(gone, keep);
            self.add_edge(moved);
        }
        self.remove_vertex(gone);

        true
    }

    /// Reverses every `Edge` in place.
    pub fn reverse(&mut self) {
        for edge in self.slots.iter_mut().flatten() {
            *edge = edge.reverse();
        }
    }

    /// Returns a copy of the `Graph` with every `Edge` reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut graph = self.clone();
        graph.reverse();
        graph
    }
}

impl<K: EdgeKind, U: Number> FromIterator<Edge<U>> for Graph<K, U> {
    fn from_iter<I: IntoIterator<Item = Edge<U>>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

impl<K: EdgeKind, U: Number> Extend<Edge<U>> for Graph<K, U> {
    fn extend<I: IntoIterator<Item = Edge<U>>>(&mut self, edges: I) {
        for edge in edges {
            self.add_edge(edge);
        }
    }
}

impl<K: EdgeKind, U: Number> core::fmt::Display for Graph<K, U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Graph with {} vertices, {} edges and total cost {}",
            self.vertex_count,
            self.edge_count(),
            self.total_edge_cost
        )?;
        let mut ids = self.live.clone();
        ids.sort_unstable();
        for edge in ids.into_iter().filter_map(|id| self.edge(id)) {
            writeln!(f, "{}", edge.render::<K>())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{DirectedGraph, Edge, UndirectedGraph};

    fn triangle() -> UndirectedGraph<u32> {
        [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 0, 3)].into_iter().collect()
    }

    #[test]
    fn build() {
        let g = triangle();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.total_edge_cost(), 6);
        assert_eq!(g.connected_vertices(0), vec![1, 2]);
        assert_eq!(g.vertex_indices().collect::<Vec<_>>(), vec![0, 1, 2]);

        let g = UndirectedGraph::<u32>::with_capacity(4);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.vertex_capacity(), 4);
        assert!(g.is_empty());
    }

    #[test]
    fn remove() {
        let mut g = triangle();
        g.add_edge(Edge::new(0, 1, 1));

        assert!(!g.remove_edge(&Edge::new(0, 1, 7)));
        assert!(!g.remove_edge(&Edge::new(1, 0, 1)));
        assert!(g.remove_edge(&Edge::new(0, 1, 1)));
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.total_edge_cost(), 6);
        assert!(g.remove_edge(&Edge::new(0, 1, 1)));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.connected_vertices(0), vec![2]);

        assert!(g.remove_vertex(2));
        assert!(!g.remove_vertex(2));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.total_edge_cost(), 0);
    }

    #[test]
    fn contract() {
        let mut g = triangle();
        g.add_edge(Edge::new(1, 0, 1));
        g.add_edge(Edge::new(0, 1, 9));

        assert!(g.contract_edge(&Edge::new(0, 1, 1)));
        assert_eq!(g.vertex_count(), 2);
        assert!(!g.has_vertex(1));
        // The differently priced parallel edge remains as a self-loop.
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.total_edge_cost(), 14);
        assert!(g.edges().all(|e| !e.contains(1)));
        assert_eq!(g.edges().filter(|e| e.is_circular()).count(), 1);

        assert!(g.contract_edge(&Edge::new(0, 0, 9)));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 2);

        assert!(!g.contract_edge(&Edge::new(0, 1, 1)));
    }

    #[test]
    fn directed() {
        let mut g: DirectedGraph<u32> = [Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(3, 1, 1)].into_iter().collect();

        assert_eq!(g.connected_vertices(1), vec![2]);
        assert!(g.connected_vertices(2).is_empty());
        assert_eq!(g.incident_edges(1).count(), 3);

        let r = g.reversed();
        assert_eq!(r.connected_vertices(1), vec![0, 3]);
        assert_eq!(r.total_edge_cost(), g.total_edge_cost());

        // Incoming edges of the removed endpoint are kept.
        assert!(g.contract_edge(&Edge::new(0, 1, 1)));
        assert_eq!(g.connected_vertices(0), vec![2]);
        assert_eq!(g.connected_vertices(3), vec![0]);
    }

    #[test]
    fn reuse_slots() {
        let mut g = triangle();
        let first = g.edge_count();
        assert!(g.remove_edge(&Edge::new(1, 2, 2)));
        let id = g.add_edge(Edge::new(1, 2, 5));
        assert!(id < first);
        assert_eq!(g.edge(id), Some(&Edge::new(1, 2, 5)));
        assert!(g.remove_edge_by_id(id).is_some());
        assert!(g.remove_edge_by_id(id).is_none());
        assert!((0..g.edge_count()).all(|i| g.edge_at(i).is_some()));
    }

    #[test]
    fn display() {
        let g = triangle();
        let text = g.to_string();
        assert!(text.starts_with("Graph with 3 vertices, 3 edges and total cost 6"));
        assert!(text.contains("1 -- 2; cost = 1"));
        assert!(text.contains("3 -- 1; cost = 3"));
    }
}
