//! Sorting algorithms which count the work they do.

/// How `quicksort` chooses the pivot of each partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// The first element.
    First,
    /// The last element.
    Last,
    /// The median of the first, middle and last elements.
    #[default]
    MedianOfThree,
}

impl PivotStrategy {
    /// Chooses the index of the pivot for `values[lo..=hi]`.
    fn choose<T: PartialOrd>(self, values: &[T], lo: usize, hi: usize) -> usize {
        match self {
            Self::First => lo,
            Self::Last => hi,
            Self::MedianOfThree => {
                let mid = lo + (hi - lo) / 2;
                let (a, b, c) = (&values[lo], &values[mid], &values[hi]);
                if (b <= a && a <= c) || (c <= a && a <= b) {
                    lo
                } else if (a <= c && c <= b) || (b <= c && c <= a) {
                    hi
                } else {
                    mid
                }
            }
        }
    }
}

/// Sorts `values` in place with quicksort.
///
/// Each partition of `k` elements is counted as `k - 1` comparisons, which
/// is the number of elements compared against the pivot.
///
/// # Returns
///
/// The total number of comparisons.
pub fn quicksort<T: PartialOrd>(values: &mut [T], strategy: PivotStrategy) -> usize {
    let mut comparisons = 0;
    // Ranges still to sort. Recursion depth is unbounded for sorted input
    // with a fixed pivot, so an explicit stack is used instead.
    let mut pending = vec![(0, values.len())];
    while let Some((lo, end)) = pending.pop() {
        if end <= lo + 1 {
            continue;
        }
        let hi = end - 1;
        comparisons += hi - lo;

        let pivot = partition(values, lo, hi, strategy.choose(values, lo, hi));
        pending.push((pivot + 1, end));
        pending.push((lo, pivot));
    }
    comparisons
}

/// Partitions `values[lo..=hi]` around the element at `pivot`.
///
/// Returns the final index of the pivot.
fn partition<T: PartialOrd>(values: &mut [T], lo: usize, hi: usize, pivot: usize) -> usize {
    values.swap(lo, pivot);
    let mut i = lo + 1;
    for j in (lo + 1)..=hi {
        if values[j] < values[lo] {
            values.swap(i, j);
            i += 1;
        }
    }
    values.swap(lo, i - 1);
    i - 1
}

/// Sorts `values` with a stable merge sort.
///
/// # Returns
///
/// The number of inversions in the input, i.e. the number of pairs `i < j`
/// with `values[i] > values[j]`.
pub fn merge_sort<T: PartialOrd + Clone>(values: &mut [T]) -> u64 {
    if values.len() < 2 {
        return 0;
    }
    let mid = values.len() / 2;
    let mut inversions = merge_sort(&mut values[..mid]) + merge_sort(&mut values[mid..]);

    let (left, right) = (values[..mid].to_vec(), values[mid..].to_vec());
    let (mut i, mut j) = (0, 0);
    for slot in values.iter_mut() {
        let take_left = j == right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
            inversions += (left.len() - i) as u64;
        }
    }
    inversions
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{merge_sort, quicksort, PivotStrategy};

    const TEN: [u32; 10] = [3, 9, 8, 4, 6, 10, 2, 5, 7, 1];

    #[test_case(PivotStrategy::First, 25 ; "first")]
    #[test_case(PivotStrategy::Last, 29 ; "last")]
    #[test_case(PivotStrategy::MedianOfThree, 21 ; "median of three")]
    fn comparisons(strategy: PivotStrategy, expected: usize) {
        let mut values = TEN;
        assert_eq!(quicksort(&mut values, strategy), expected);
        assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn degenerate() {
        let mut empty: [u32; 0] = [];
        assert_eq!(quicksort(&mut empty, PivotStrategy::First), 0);

        let mut single = [4];
        assert_eq!(quicksort(&mut single, PivotStrategy::Last), 0);

        let mut sorted = (0..100).collect::<Vec<_>>();
        assert_eq!(quicksort(&mut sorted, PivotStrategy::First), 99 * 100 / 2);

        let mut ties = [2, 1, 2, 1, 2];
        quicksort(&mut ties, PivotStrategy::MedianOfThree);
        assert_eq!(ties, [1, 1, 2, 2, 2]);
    }

    #[test_case(&[1, 3, 5, 2, 4, 6], 3 ; "few")]
    #[test_case(&[6, 5, 4, 3, 2, 1], 15 ; "reversed")]
    #[test_case(&TEN, 27 ; "ten")]
    #[test_case(&[], 0 ; "empty")]
    fn inversions(values: &[u32], expected: u64) {
        let mut values = values.to_vec();
        assert_eq!(merge_sort(&mut values), expected);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Ordered by `key` only, so equal keys reveal the order of `tag`s.
    #[derive(Debug, Clone)]
    struct Keyed {
        key: u32,
        tag: char,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    #[test]
    fn stable() {
        let mut values = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]
            .into_iter()
            .map(|(key, tag)| Keyed { key, tag })
            .collect::<Vec<_>>();

        assert_eq!(merge_sort(&mut values), 3);
        let tags = values.iter().map(|k| k.tag).collect::<String>();
        assert_eq!(tags, "bdac");
    }
}
