//! Utility functions and wrappers for ordering edge costs.

use core::cmp::Ordering;

use distances::Number;

use crate::Edge;

/// Compares two costs, ordering NAN values as greater than all others.
pub fn cmp_costs<U: Number>(l: &U, r: &U) -> Ordering {
    l.partial_cmp(r).unwrap_or(Ordering::Greater)
}

/// Sorts `Edge`s by non-decreasing cost.
///
/// The sort is stable, so `Edge`s with equal costs keep their relative order.
pub fn sort_by_cost<U: Number>(edges: &mut [Edge<U>]) {
    edges.sort_by(|l, r| cmp_costs(&l.cost(), &r.cost()));
}

/// A cost ordered from largest to smallest.
///
/// A max-priority queue keyed by `RevNumber` pops the cheapest item first.
#[derive(Debug, Clone, Copy)]
pub struct RevNumber<U: Number>(pub U);

impl<U: Number> PartialEq for RevNumber<U> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Number> Eq for RevNumber<U> {}

impl<U: Number> PartialOrd for RevNumber<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: Number> Ord for RevNumber<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_costs(&other.0, &self.0)
    }
}
