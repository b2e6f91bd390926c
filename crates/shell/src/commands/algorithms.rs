//! Subcommands over the `graphs` crate.

use std::path::Path;

use graphs::{algorithms, io};

use crate::{
    report::{Outcome, Report},
    utils::vertex_index,
};

/// Finds a minimum cut of the graph in an adjacency-list file.
pub fn min_cut(inp_path: &Path, repetitions: Option<usize>, parallel: bool, seed: Option<u64>) -> Result<Report, String> {
    let graph = io::read_adjacency::<u32, _>(inp_path)?;
    ftlog::info!("Read {graph}");

    let cut = if parallel {
        algorithms::par_minimum_cut(&graph, repetitions, seed)?
    } else {
        algorithms::minimum_cut(&graph, repetitions, seed)?
    };
    let outcome = Outcome::MinCut {
        cut_size: cut.edge_count(),
        survivors: cut.vertex_indices().map(|v| v + 1).collect(),
    };
    Ok(Report::new("min-cut", inp_path, seed, outcome))
}

/// Finds a minimum spanning tree of the graph in a weighted edge-list file.
pub fn mst(inp_path: &Path, prim: bool) -> Result<Report, String> {
    let graph = io::read_weighted_edges::<i64, _>(inp_path)?;
    let tree = if prim {
        algorithms::prim_mst(&graph)
    } else {
        algorithms::kruskal_mst(&graph)
    };
    let outcome = Outcome::SpanningTree {
        edge_count: tree.edge_count(),
        total_cost: tree.total_edge_cost(),
    };
    let name = if prim { "mst (prim)" } else { "mst (kruskal)" };
    Ok(Report::new(name, inp_path, None, outcome))
}

/// Finds the strongly connected components of the graph in an edge-pairs file.
pub fn scc(inp_path: &Path, top: usize) -> Result<Report, String> {
    let graph = io::read_edge_pairs::<u32, _>(inp_path)?;
    let components = algorithms::strongly_connected_components(&graph);
    let outcome = Outcome::Components {
        count: components.len(),
        largest: algorithms::largest_component_sizes(&components, top),
    };
    Ok(Report::new("scc", inp_path, None, outcome))
}

/// Finds the shortest-path distances in the graph in a weighted adjacency-list file.
pub fn dijkstra(inp_path: &Path, source: usize, targets: &[usize]) -> Result<Report, String> {
    let graph = io::read_weighted_adjacency::<i64, _>(inp_path)?;
    let distances = algorithms::dijkstra(&graph, vertex_index(source)?);

    let distances = if targets.is_empty() {
        graph
            .vertex_indices()
            .map(|v| (v + 1, distances[v]))
            .collect::<Vec<_>>()
    } else {
        targets
            .iter()
            .map(|&t| Ok((t, distances.get(vertex_index(t)?).copied().flatten())))
            .collect::<Result<Vec<_>, String>>()?
    };
    Ok(Report::new("dijkstra", inp_path, None, Outcome::ShortestPaths { source, distances }))
}

/// Finds a max-spacing clustering of the graph in a weighted edge-list file.
pub fn cluster(inp_path: &Path, k: usize) -> Result<Report, String> {
    let graph = io::read_weighted_edges::<i64, _>(inp_path)?;
    let clustering = algorithms::k_cluster(&graph, k);
    let outcome = Outcome::Clustering {
        k: clustering.cluster_count(),
        spacing: clustering.spacing(),
    };
    Ok(Report::new("cluster", inp_path, None, outcome))
}

/// Clusters the bit-string labels in a labels file.
pub fn hamming_cluster(inp_path: &Path, min_spacing: usize) -> Result<Report, String> {
    let (labels, bits) = io::read_binary_labels(inp_path)?;
    let clusters = algorithms::hamming_clusters(&labels, bits, min_spacing)?;
    let outcome = Outcome::HammingClustering {
        min_spacing,
        cluster_count: clusters.set_count(),
    };
    Ok(Report::new("hamming-cluster", inp_path, None, outcome))
}
