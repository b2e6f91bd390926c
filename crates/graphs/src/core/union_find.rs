//! A disjoint-set forest over the elements `0..n`.

use serde::{Deserialize, Serialize};

/// A disjoint-set forest with union by rank and path halving.
///
/// Ranks start at one. When two roots are joined, the root with the smaller
/// rank is placed under the other and the surviving root's rank grows by the
/// rank of the absorbed root. On ties, the second root is placed under the
/// first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionFind {
    /// The parent of each element. Roots are their own parent.
    parent: Vec<usize>,
    /// The rank of each root. Only meaningful for roots.
    rank: Vec<usize>,
    /// The number of successful unions.
    union_count: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![1; n],
            union_count: 0,
        }
    }

    /// The number of elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.parent.len()
    }

    /// The number of successful unions so far.
    #[must_use]
    pub const fn union_count(&self) -> usize {
        self.union_count
    }

    /// The number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.element_count() - self.union_count
    }

    /// Finds the root of the set containing `a`.
    ///
    /// Every element visited on the way is re-pointed directly at the root.
    ///
    /// # Panics
    ///
    /// If `a` is not smaller than the number of elements.
    pub fn find(&mut self, a: usize) -> usize {
        let mut root = a;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = a;
        while self.parent[current] != root {
            current = core::mem::replace(&mut self.parent[current], root);
        }
        root
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }

        let (root, child) = if self.rank[ra] < self.rank[rb] { (rb, ra) } else { (ra, rb) };
        self.parent[child] = root;
        self.rank[root] += self.rank[child];
        self.union_count += 1;

        true
    }

    /// Groups the elements by the set they belong to.
    ///
    /// Sets are ordered by their smallest element, and elements within a set
    /// are in increasing order.
    pub fn sets(&mut self) -> Vec<Vec<usize>> {
        let mut index_of_root = vec![usize::MAX; self.element_count()];
        let mut sets: Vec<Vec<usize>> = Vec::with_capacity(self.set_count());
        for a in 0..self.element_count() {
            let root = self.find(a);
            if index_of_root[root] == usize::MAX {
                index_of_root[root] = sets.len();
                sets.push(Vec::new());
            }
            sets[index_of_root[root]].push(a);
        }
        sets
    }
}
