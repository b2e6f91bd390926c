//! Max-spacing clustering of graph vertices and of binary labels.

use std::collections::HashMap;

use distances::Number;

use crate::{utils::sort_by_cost, KCluster, UndirectedGraph, UnionFind};

/// Clusters the vertices of a `Graph` into `k` clusters of maximum spacing.
///
/// This runs Kruskal's algorithm over a `KCluster` and stops at the first
/// `Edge` joining two distinct clusters after only `k` remain. The cost of
/// that `Edge` is the spacing.
///
/// Every vertex slot of the `Graph` is an element, so the indices of the
/// clusters are the vertex indices. Empty slots are placeholders and do not
/// count as clusters.
///
/// # Returns
///
/// The `KCluster`. Its spacing is `None` if the `Graph` has no `Edge` between
/// distinct clusters once `k` clusters remain.
#[must_use]
pub fn k_cluster<U: Number>(graph: &UndirectedGraph<U>, k: usize) -> KCluster<U> {
    let mut edges = graph.edges().copied().collect::<Vec<_>>();
    sort_by_cost(&mut edges);

    let holes = (0..graph.vertex_capacity()).filter(|&v| !graph.has_vertex(v)).collect();
    let mut clusters = KCluster::with_absent(graph.vertex_capacity(), k, holes);
    for edge in edges {
        let [a, b] = edge.endpoints();
        if clusters.connected(a, b) {
            continue;
        }
        if clusters.spacing().is_some() {
            break;
        }
        clusters.union(a, b, edge.cost());
    }

    ftlog::debug!(
        "Clustered {} vertices into {} clusters with spacing {:?}",
        graph.vertex_count(),
        clusters.cluster_count(),
        clusters.spacing()
    );
    clusters
}

/// Clusters binary labels so that labels within `min_spacing - 1` bit flips
/// of each other end up in the same cluster.
///
/// Labels at Hamming distance below `min_spacing` are linked, and clusters
/// are the connected components of those links. The result is the largest
/// number of clusters whose spacing is at least `min_spacing`.
///
/// Duplicate labels are collapsed into a single element before clustering.
///
/// # Arguments
///
/// * `labels`: The labels, each using the lowest `bit_length` bits.
/// * `bit_length`: The number of bits in each label. At most 32.
/// * `min_spacing`: The smallest Hamming distance allowed between clusters.
///
/// # Returns
///
/// A `UnionFind` over the distinct labels, in order of first appearance.
///
/// # Errors
///
/// * If `bit_length` is larger than 32.
/// * If `min_spacing` is zero.
/// * If a label does not fit in `bit_length` bits.
pub fn hamming_clusters(labels: &[u32], bit_length: usize, min_spacing: usize) -> Result<UnionFind, String> {
    if bit_length > 32 {
        return Err(format!("Labels may have at most 32 bits but {bit_length} were requested."));
    }
    if min_spacing == 0 {
        return Err("The minimum spacing must be positive.".to_string());
    }
    if bit_length < 32 {
        if let Some(label) = labels.iter().find(|&&l| l >> bit_length != 0) {
            return Err(format!("Label {label:b} does not fit in {bit_length} bits."));
        }
    }

    let mut index = HashMap::new();
    let mut distinct = Vec::new();
    for &label in labels {
        index.entry(label).or_insert_with(|| {
            distinct.push(label);
            distinct.len() - 1
        });
    }

    let masks = flip_masks(bit_length, min_spacing - 1);
    let mut sets = UnionFind::new(distinct.len());
    for (i, &label) in distinct.iter().enumerate() {
        for &mask in &masks {
            if let Some(&j) = index.get(&(label ^ mask)) {
                sets.union(i, j);
            }
        }
    }

    ftlog::info!(
        "Clustered {} distinct labels into {} clusters with spacing at least {min_spacing}",
        distinct.len(),
        sets.set_count()
    );
    Ok(sets)
}

/// All non-zero masks over `bit_length` bits with at most `max_flips` bits set.
fn flip_masks(bit_length: usize, max_flips: usize) -> Vec<u32> {
    let mut masks = Vec::new();
    // Each entry is a mask and the lowest bit it may still set.
    let mut layer = vec![(0_u32, 0_usize)];
    for _ in 0..max_flips.min(bit_length) {
        layer = layer
            .into_iter()
            .flat_map(|(mask, low)| (low..bit_length).map(move |b| (mask | (1 << b), b + 1)))
            .collect();
        masks.extend(layer.iter().map(|&(mask, _)| mask));
    }
    masks
}
