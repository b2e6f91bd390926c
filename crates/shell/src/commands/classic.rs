//! Subcommands over the `classics` crate.

use std::path::Path;

use classics::{knapsack, median::median_sum, scheduling, sorting};

use crate::report::{Outcome, Report};

/// The pivot rules of quicksort.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Pivot {
    /// The first element.
    #[clap(name = "first")]
    First,
    /// The last element.
    #[clap(name = "last")]
    Last,
    /// The median of the first, middle and last elements.
    #[clap(name = "median-of-three")]
    MedianOfThree,
}

impl From<Pivot> for sorting::PivotStrategy {
    fn from(pivot: Pivot) -> Self {
        match pivot {
            Pivot::First => Self::First,
            Pivot::Last => Self::Last,
            Pivot::MedianOfThree => Self::MedianOfThree,
        }
    }
}

/// Reads a file to a string.
fn read(inp_path: &Path) -> Result<String, String> {
    std::fs::read_to_string(inp_path).map_err(|e| format!("Could not read {inp_path:?}: {e}"))
}

/// Parses one integer per non-empty line.
fn parse_numbers(text: &str) -> Result<Vec<u64>, String> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.trim()
                .parse()
                .map_err(|e| format!("Line {}: invalid number {line:?}: {e}", i + 1))
        })
        .collect()
}

/// Sorts the integers in a file, counting comparisons and inversions.
pub fn sort(inp_path: &Path, pivot: Pivot) -> Result<Report, String> {
    let values = parse_numbers(&read(inp_path)?)?;

    let mut quick = values.clone();
    let comparisons = sorting::quicksort(&mut quick, pivot.into());
    let mut merged = values;
    let inversions = sorting::merge_sort(&mut merged);

    let outcome = Outcome::Sorting { comparisons, inversions };
    Ok(Report::new("sort", inp_path, None, outcome))
}

/// Solves the knapsack problem in a file.
pub fn knapsack(inp_path: &Path, memoized: bool) -> Result<Report, String> {
    let (items, capacity) = knapsack::parse(&read(inp_path)?)?;
    let value = if memoized {
        knapsack::max_value_memoized(&items, capacity)
    } else {
        knapsack::max_value(&items, capacity)
    };
    Ok(Report::new("knapsack", inp_path, None, Outcome::Knapsack { capacity, value }))
}

/// Schedules the jobs in a file.
pub fn schedule(inp_path: &Path, difference: bool) -> Result<Report, String> {
    let mut jobs = scheduling::parse(&read(inp_path)?)?;
    let rule = if difference {
        scheduling::Rule::Difference
    } else {
        scheduling::Rule::Ratio
    };
    scheduling::schedule(&mut jobs, rule);

    let outcome = Outcome::Schedule {
        weighted_completion_time: scheduling::weighted_completion_time(&jobs),
    };
    Ok(Report::new("schedule", inp_path, None, outcome))
}

/// Sums the running medians of the integers in a file.
pub fn median(inp_path: &Path) -> Result<Report, String> {
    let values = parse_numbers(&read(inp_path)?)?;
    let outcome = Outcome::Medians { sum: median_sum(values) };
    Ok(Report::new("median", inp_path, None, outcome))
}
