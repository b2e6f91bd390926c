//! The running median of a stream of values.

use std::{cmp::Reverse, collections::BinaryHeap};

/// Maintains the median of the values added so far.
///
/// The smaller half of the values sits in a max-heap and the larger half in
/// a min-heap. The lower half holds either as many values as the upper half
/// or one more, so its maximum is the lower median.
#[derive(Debug, Clone)]
pub struct MedianHeap<T: Ord> {
    /// The smaller half of the values.
    lower: BinaryHeap<T>,
    /// The larger half of the values.
    upper: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> Default for MedianHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MedianHeap<T> {
    /// Creates an empty `MedianHeap`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
        }
    }

    /// Adds a value.
    pub fn push(&mut self, value: T) {
        match self.lower.peek() {
            Some(top) if value > *top => self.upper.push(Reverse(value)),
            _ => self.lower.push(value),
        }

        if self.lower.len() > self.upper.len() + 1 {
            if let Some(top) = self.lower.pop() {
                self.upper.push(Reverse(top));
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(Reverse(bottom)) = self.upper.pop() {
                self.lower.push(bottom);
            }
        }
    }

    /// The lower median of the values added so far.
    ///
    /// With an even number of values, this is the smaller of the two middle
    /// values.
    #[must_use]
    pub fn median(&self) -> Option<&T> {
        self.lower.peek()
    }

    /// The number of values added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Whether no values have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

impl<T: Ord> Extend<T> for MedianHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }
}

/// The sum of the running medians after each value of `values` is added.
pub fn median_sum<I: IntoIterator<Item = u64>>(values: I) -> u64 {
    let mut heap = MedianHeap::new();
    let mut sum = 0;
    for value in values {
        heap.push(value);
        sum += heap.median().copied().unwrap_or_default();
    }
    sum
}
