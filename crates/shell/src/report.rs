//! The result of one run of the CLI.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// What a subcommand found, along with what it ran on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The name of the subcommand.
    pub command: String,
    /// The input file.
    pub input: String,
    /// The random seed, if any was used.
    pub seed: Option<u64>,
    /// The headline result.
    pub outcome: Outcome,
}

/// The headline result of each subcommand.
///
/// Vertex labels are 1-indexed, as in the input files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The smallest cut found by Karger's algorithm.
    MinCut {
        /// The number of edges crossing the cut.
        cut_size: usize,
        /// The vertices that absorbed each side of the cut.
        survivors: Vec<usize>,
    },
    /// A minimum spanning tree.
    SpanningTree {
        /// The number of edges in the tree.
        edge_count: usize,
        /// The sum of the costs of the tree edges.
        total_cost: i64,
    },
    /// The strongly connected components.
    Components {
        /// The number of components.
        count: usize,
        /// The sizes of the largest components, in decreasing order.
        largest: Vec<usize>,
    },
    /// Shortest-path distances from one vertex.
    ShortestPaths {
        /// The source vertex.
        source: usize,
        /// The distance to each requested target, `None` if unreachable.
        distances: Vec<(usize, Option<i64>)>,
    },
    /// A max-spacing clustering of the vertices.
    Clustering {
        /// The number of clusters.
        k: usize,
        /// The smallest distance between two clusters.
        spacing: Option<i64>,
    },
    /// The clustering of bit-string labels.
    HammingClustering {
        /// The smallest spacing required between clusters.
        min_spacing: usize,
        /// The largest number of clusters with that spacing.
        cluster_count: usize,
    },
    /// Counting sorts of a list of numbers.
    Sorting {
        /// The comparisons made by quicksort.
        comparisons: usize,
        /// The inversions counted by merge sort.
        inversions: u64,
    },
    /// The best value of a knapsack.
    Knapsack {
        /// The capacity of the knapsack.
        capacity: usize,
        /// The largest total value that fits.
        value: u64,
    },
    /// A greedy job schedule.
    Schedule {
        /// The sum of weighted completion times.
        weighted_completion_time: i64,
    },
    /// The running medians of a stream.
    Medians {
        /// The sum of the medians after each value.
        sum: u64,
    },
}

impl Report {
    /// Creates a new `Report`.
    pub fn new<P: AsRef<Path>>(command: &str, input: P, seed: Option<u64>, outcome: Outcome) -> Self {
        Self {
            command: command.to_string(),
            input: input.as_ref().display().to_string(),
            seed,
            outcome,
        }
    }

    /// Writes the report to `path` in `bitcode` format.
    ///
    /// # Errors
    ///
    /// * If the report could not be encoded.
    /// * If the file could not be written.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let bytes = bitcode::serialize(self).map_err(|e| e.to_string())?;
        std::fs::write(path, bytes).map_err(|e| e.to_string())
    }
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} on {}: ", self.command, self.input)?;
        match &self.outcome {
            Outcome::MinCut { cut_size, survivors } => {
                write!(f, "cut size {cut_size} between vertices {survivors:?}")
            }
            Outcome::SpanningTree { edge_count, total_cost } => {
                write!(f, "tree with {edge_count} edges and total cost {total_cost}")
            }
            Outcome::Components { count, largest } => {
                let largest = largest.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{count} components, largest {}", largest.join(","))
            }
            Outcome::ShortestPaths { source, distances } => {
                let distances = distances
                    .iter()
                    .map(|(t, d)| d.map_or_else(|| format!("{t}: unreachable"), |d| format!("{t}: {d}")))
                    .collect::<Vec<_>>();
                write!(f, "from {source} [{}]", distances.join(", "))
            }
            Outcome::Clustering { k, spacing } => match spacing {
                Some(spacing) => write!(f, "{k} clusters with spacing {spacing}"),
                None => write!(f, "{k} clusters could not be separated"),
            },
            Outcome::HammingClustering {
                min_spacing,
                cluster_count,
            } => write!(f, "{cluster_count} clusters with spacing at least {min_spacing}"),
            Outcome::Sorting { comparisons, inversions } => {
                write!(f, "{comparisons} comparisons and {inversions} inversions")
            }
            Outcome::Knapsack { capacity, value } => write!(f, "value {value} within capacity {capacity}"),
            Outcome::Schedule {
                weighted_completion_time,
            } => write!(f, "weighted completion time {weighted_completion_time}"),
            Outcome::Medians { sum } => write!(f, "sum of medians {sum}"),
        }
    }
}
