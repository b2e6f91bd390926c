//! Greedy scheduling of weighted jobs on a single machine.
//!
//! Jobs run back to back. The completion time of a job is the sum of the
//! lengths of the jobs up to and including it, and a schedule is scored by
//! the sum of weight times completion time over all jobs.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A job with a weight (its importance) and a length (its duration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// The importance of the job.
    pub weight: i64,
    /// The time the job takes.
    pub length: i64,
}

impl Job {
    /// Creates a new `Job`.
    #[must_use]
    pub const fn new(weight: i64, length: i64) -> Self {
        Self { weight, length }
    }
}

impl core::fmt::Display for Job {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Job: weight = {}; length = {}", self.weight, self.length)
    }
}

/// The greedy rule used to order jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Decreasing `weight - length`, with ties broken by decreasing weight.
    ///
    /// This is not always optimal.
    Difference,
    /// Decreasing `weight / length`. This is always optimal.
    Ratio,
}

impl Rule {
    /// Compares two jobs; the job that should run first is `Less`.
    #[must_use]
    pub fn compare(self, a: &Job, b: &Job) -> Ordering {
        match self {
            Self::Difference => (b.weight - b.length)
                .cmp(&(a.weight - a.length))
                .then_with(|| b.weight.cmp(&a.weight)),
            // a.weight / a.length > b.weight / b.length, with positive lengths.
            Self::Ratio => (b.weight * a.length).cmp(&(a.weight * b.length)),
        }
    }
}

/// Orders `jobs` in place by `rule`, keeping equal jobs in their given order.
pub fn schedule(jobs: &mut [Job], rule: Rule) {
    jobs.sort_by(|a, b| rule.compare(a, b));
}

/// The sum of weight times completion time when `jobs` run in the given order.
#[must_use]
pub fn weighted_completion_time(jobs: &[Job]) -> i64 {
    let mut completion = 0;
    let mut total = 0;
    for job in jobs {
        completion += job.length;
        total += job.weight * completion;
        ftlog::trace!("{job} completes at {completion}; weighted sum {total}");
    }
    total
}

/// Parses a list of jobs.
///
/// The first line holds the number of jobs. Each following line holds the
/// weight and length of one job.
///
/// # Errors
///
/// * If a line is malformed.
/// * If a length is not positive.
/// * If the number of jobs does not match the header.
pub fn parse(text: &str) -> Result<Vec<Job>, String> {
    let mut lines = text.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());
    let (_, header) = lines.next().ok_or_else(|| "Missing header line.".to_string())?;
    let count = header
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("Invalid job count {header:?}: {e}"))?;

    let jobs = lines
        .map(|(i, line)| {
            let numbers = line
                .split_whitespace()
                .map(str::parse::<i64>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| format!("Line {}: {e}", i + 1))?;
            match numbers.as_slice() {
                &[weight, length] if length > 0 => Ok(Job::new(weight, length)),
                &[_, _] => Err(format!("Line {}: lengths must be positive.", i + 1)),
                _ => Err(format!("Line {}: expected a weight and a length.", i + 1)),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if jobs.len() != count {
        return Err(format!("Expected {count} jobs but found {}.", jobs.len()));
    }
    Ok(jobs)
}
