//! Algorithms over `Graph`s.

mod clustering;
mod dijkstra;
mod min_cut;
mod mst;
mod scc;

pub use clustering::{hamming_clusters, k_cluster};
pub use dijkstra::dijkstra;
pub use min_cut::{contract_randomly, minimum_cut, par_minimum_cut};
pub use mst::{kruskal_mst, prim_mst};
pub use scc::{largest_component_sizes, strongly_connected_components};
