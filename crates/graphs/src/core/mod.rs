//! The core structs for graphs: `Edge`s, `Graph`s and disjoint sets.

pub mod edge;
pub mod graph;
mod k_cluster;
mod union_find;

pub use edge::{Directed, Edge, EdgeKind, Undirected};
pub use graph::{DirectedGraph, EdgeId, Graph, UndirectedGraph, Vertex};
pub use k_cluster::KCluster;
pub use union_find::UnionFind;
