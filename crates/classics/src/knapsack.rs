//! The 0/1 knapsack problem.
//!
//! Items are `(value, weight)` pairs. Each item may be packed at most once,
//! and the total weight may not exceed the capacity.

use std::collections::HashMap;

/// An item with a value and a weight.
pub type Item = (u64, usize);

/// Finds the largest total value that fits within `capacity`.
///
/// This fills the full `(items + 1) x (capacity + 1)` table bottom-up, so
/// it suits small capacities.
#[must_use]
pub fn max_value(items: &[Item], capacity: usize) -> u64 {
    // Only the previous row of the table is needed at any time.
    let mut previous = vec![0; capacity + 1];
    let mut current = vec![0; capacity + 1];
    for &(value, weight) in items {
        for w in 0..=capacity {
            current[w] = if w >= weight {
                previous[w].max(previous[w - weight] + value)
            } else {
                previous[w]
            };
        }
        core::mem::swap(&mut previous, &mut current);
    }
    previous[capacity]
}

/// Sub-problems already solved by `max_value_memoized`, keyed by the number
/// of items considered and the remaining capacity.
#[derive(Debug, Default)]
pub struct Memo {
    /// The best value of each solved sub-problem.
    table: HashMap<(usize, usize), u64>,
}

impl Memo {
    /// The number of solved sub-problems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no sub-problem has been solved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Finds the largest total value that fits within `capacity`, solving only
/// the sub-problems that are reached from the full problem.
///
/// This suits large capacities with few items, where most cells of the
/// bottom-up table are never needed.
#[must_use]
pub fn max_value_memoized(items: &[Item], capacity: usize) -> u64 {
    let mut memo = Memo::default();
    let best = solve(items, items.len(), capacity, &mut memo);
    ftlog::debug!("Knapsack solved {} sub-problems for {} items", memo.len(), items.len());
    best
}

/// The best value using the first `count` items within `capacity`.
fn solve(items: &[Item], count: usize, capacity: usize, memo: &mut Memo) -> u64 {
    if count == 0 {
        return 0;
    }
    if let Some(&best) = memo.table.get(&(count, capacity)) {
        return best;
    }

    let (value, weight) = items[count - 1];
    let without = solve(items, count - 1, capacity, memo);
    let best = if weight <= capacity {
        without.max(value + solve(items, count - 1, capacity - weight, memo))
    } else {
        without
    };

    memo.table.insert((count, capacity), best);
    best
}

/// Parses a knapsack problem.
///
/// The first line holds the capacity and the number of items. Each
/// following line holds the value and weight of one item.
///
/// # Errors
///
/// * If a line is malformed.
/// * If the number of items does not match the header.
pub fn parse(text: &str) -> Result<(Vec<Item>, usize), String> {
    let mut lines = text.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());
    let (i, header) = lines.next().ok_or_else(|| "Missing header line.".to_string())?;
    let (capacity, count) = parse_pair::<usize, usize>(header, i + 1)?;

    let items = lines
        .map(|(i, line)| parse_pair::<u64, usize>(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;
    if items.len() != count {
        return Err(format!("Expected {count} items but found {}.", items.len()));
    }
    Ok((items, capacity))
}

/// Parses a line holding exactly two numbers.
fn parse_pair<A: core::str::FromStr, B: core::str::FromStr>(line: &str, number: usize) -> Result<(A, B), String> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let [a, b] = tokens.as_slice() else {
        return Err(format!("Line {number}: expected two numbers."));
    };
    let a = a.parse().map_err(|_| format!("Line {number}: invalid number {a:?}."))?;
    let b = b.parse().map_err(|_| format!("Line {number}: invalid number {b:?}."))?;
    Ok((a, b))
}
