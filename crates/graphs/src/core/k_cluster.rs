//! A `UnionFind` that stops merging once a target number of clusters remains.

use distances::Number;
use serde::{Deserialize, Serialize};

use super::UnionFind;

/// Clusters of elements which are merged until only `target` clusters remain.
///
/// Once the target is reached, the next attempted merge is refused and its
/// distance is recorded as the spacing of the clustering. When pairs are
/// offered in non-decreasing order of distance, as in Kruskal's algorithm,
/// the spacing is the smallest distance between two distinct clusters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KCluster<U: Number> {
    /// The underlying disjoint sets.
    sets: UnionFind,
    /// The number of clusters at which merging stops.
    target: usize,
    /// The distance of the first refused merge.
    spacing: Option<U>,
    /// Elements that stand for nothing, in increasing order. They are never
    /// merged and are not counted as clusters.
    absent: Vec<usize>,
}

impl<U: Number> KCluster<U> {
    /// Creates `n` singleton clusters which will be merged down to `target`.
    #[must_use]
    pub fn new(n: usize, target: usize) -> Self {
        Self::with_absent(n, target, Vec::new())
    }

    /// Creates `n` elements of which those in `absent` are placeholders.
    ///
    /// Placeholders are left out of `cluster_count` and `clusters`, so a
    /// sparse set of labels can be clustered without relabelling it. They
    /// must never be offered to `union`.
    #[must_use]
    pub fn with_absent(n: usize, target: usize, mut absent: Vec<usize>) -> Self {
        absent.sort_unstable();
        absent.dedup();
        Self {
            sets: UnionFind::new(n),
            target,
            spacing: None,
            absent,
        }
    }

    /// Offers to merge the clusters of `a` and `b`, which are `distance` apart.
    ///
    /// While more than `target` clusters remain, this merges as
    /// `UnionFind::union` does. Afterwards nothing is merged, and the first
    /// offered `distance` is recorded as the spacing.
    ///
    /// Returns whether two clusters were merged.
    pub fn union(&mut self, a: usize, b: usize, distance: U) -> bool {
        if self.cluster_count() > self.target {
            self.sets.union(a, b)
        } else {
            if self.spacing.is_none() {
                self.spacing = Some(distance);
            }
            false
        }
    }

    /// Finds the representative of the cluster containing `a`.
    pub fn find(&mut self, a: usize) -> usize {
        self.sets.find(a)
    }

    /// Whether `a` and `b` are in the same cluster.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.sets.connected(a, b)
    }

    /// The number of clusters.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.sets.set_count() - self.absent.len()
    }

    /// The number of clusters at which merging stops.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// The spacing of the clustering, once a merge has been refused.
    #[must_use]
    pub const fn spacing(&self) -> Option<U> {
        self.spacing
    }

    /// The underlying disjoint sets.
    #[must_use]
    pub const fn sets(&self) -> &UnionFind {
        &self.sets
    }

    /// The members of each cluster, as in `UnionFind::sets`, without the
    /// placeholders.
    pub fn clusters(&mut self) -> Vec<Vec<usize>> {
        let absent = &self.absent;
        self.sets
            .sets()
            .into_iter()
            .filter(|set| !matches!(set.as_slice(), [v] if absent.binary_search(v).is_ok()))
            .collect()
    }
}
