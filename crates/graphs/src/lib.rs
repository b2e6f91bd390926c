#![doc = include_str!("../README.md")]

pub mod algorithms;
mod core;
pub mod io;
pub mod search;
pub mod utils;

pub use crate::core::{
    edge, graph, Directed, DirectedGraph, Edge, EdgeId, EdgeKind, Graph, KCluster, Undirected, UndirectedGraph,
    UnionFind, Vertex,
};
pub use search::{GraphSearch, Traversal};

/// The current version of the crate.
pub const VERSION: &str = "0.3.0";
