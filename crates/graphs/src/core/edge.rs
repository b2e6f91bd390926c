//! An `Edge` connects two vertices of a `Graph` and carries a cost.
//!
//! The same `Edge` value is used for directed and undirected graphs. What
//! differs between the two is captured by the `EdgeKind` of the `Graph` that
//! holds the `Edge`.

use core::fmt::Debug;

use distances::Number;
use serde::{Deserialize, Serialize};

/// The kind of `Edge`s held by a `Graph`.
///
/// The kind decides from which endpoints an `Edge` may be traversed and how
/// it is rendered. It is a zero-sized marker and carries no data.
pub trait EdgeKind: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Whether `Edge`s of this kind may only be traversed from their source
    /// to their target.
    const DIRECTED: bool;

    /// The separator used between the endpoints when rendering an `Edge`.
    const ARROW: &'static str;

    /// Whether `edge` may be traversed starting at vertex `v`.
    #[must_use]
    fn leaves<U: Number>(edge: &Edge<U>, v: usize) -> bool {
        if Self::DIRECTED {
            edge.source() == v
        } else {
            edge.contains(v)
        }
    }
}

/// `Edge`s that run from a source to a target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directed;

impl EdgeKind for Directed {
    const DIRECTED: bool = true;
    const ARROW: &'static str = "->";
}

/// `Edge`s that may be traversed from either endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Undirected;

impl EdgeKind for Undirected {
    const DIRECTED: bool = false;
    const ARROW: &'static str = "--";
}

/// An immutable connection between two vertices with a cost.
///
/// Two `Edge`s are equal if they have the same endpoints, in the same order,
/// and the same cost. Parallel `Edge`s with equal costs are therefore
/// indistinguishable from each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<U: Number> {
    /// The source of a directed `Edge`, or the "either" endpoint of an
    /// undirected one.
    left: usize,
    /// The target of a directed `Edge`, or the "other" endpoint of an
    /// undirected one.
    right: usize,
    /// The cost of traversing the `Edge`.
    cost: U,
}

impl<U: Number> Edge<U> {
    /// Creates a new `Edge` from `left` to `right` with the given `cost`.
    ///
    /// # Arguments
    ///
    /// * `left`: The source (directed) or either endpoint (undirected).
    /// * `right`: The target (directed) or other endpoint (undirected).
    /// * `cost`: The cost of the `Edge`.
    pub const fn new(left: usize, right: usize, cost: U) -> Self {
        Self { left, right, cost }
    }

    /// Creates a new `Edge` with unit cost.
    pub fn unit(left: usize, right: usize) -> Self {
        Self::new(left, right, U::ONE)
    }

    /// The source vertex of a directed `Edge`.
    pub const fn source(&self) -> usize {
        self.left
    }

    /// The target vertex of a directed `Edge`.
    pub const fn target(&self) -> usize {
        self.right
    }

    /// One of the endpoints of an undirected `Edge`.
    pub const fn either(&self) -> usize {
        self.left
    }

    /// The endpoint of the `Edge` opposite to `v`.
    ///
    /// If `v` is not an endpoint, `either` is returned.
    pub const fn other(&self, v: usize) -> usize {
        if v == self.left {
            self.right
        } else {
            self.left
        }
    }

    /// Both endpoints, in order.
    pub const fn endpoints(&self) -> [usize; 2] {
        [self.left, self.right]
    }

    /// The cost of the `Edge`.
    pub const fn cost(&self) -> U {
        self.cost
    }

    /// Whether `v` is one of the endpoints of the `Edge`.
    pub const fn contains(&self, v: usize) -> bool {
        self.left == v || self.right == v
    }

    /// Whether the `Edge` runs from a vertex to itself.
    pub const fn is_circular(&self) -> bool {
        self.left == self.right
    }

    /// The same `Edge` with its endpoints swapped.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        Self::new(self.right, self.left, self.cost)
    }

    /// The same `Edge` with every endpoint equal to `from` replaced by `to`.
    ///
    /// The orientation of the `Edge` is preserved.
    #[must_use]
    pub const fn rehome(&self, from: usize, to: usize) -> Self {
        let left = if self.left == from { to } else { self.left };
        let right = if self.right == from { to } else { self.right };
        Self::new(left, right, self.cost)
    }

    /// Renders the `Edge` with 1-indexed endpoints, as in the input files.
    pub fn render<K: EdgeKind>(&self) -> String {
        format!("{} {} {}; cost = {}", self.left + 1, K::ARROW, self.right + 1, self.cost)
    }
}
