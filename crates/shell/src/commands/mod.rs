//! The subcommands of the `graphs` CLI.

mod algorithms;
mod classic;

use std::path::PathBuf;

use clap::Subcommand;

use crate::report::Report;

/// The subcommands, one per algorithm.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Karger's randomized minimum cut of an undirected graph.
    MinCut {
        /// The path to the adjacency-list file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The number of contraction trials. Defaults to twice the number of vertices.
        #[arg(short('r'), long)]
        repetitions: Option<usize>,

        /// Whether to run the trials in parallel.
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
    /// A minimum spanning tree of an undirected graph.
    Mst {
        /// The path to the weighted edge-list file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// Whether to use Prim's algorithm instead of Kruskal's.
        #[arg(long, default_value_t = false)]
        prim: bool,
    },
    /// The strongly connected components of a directed graph.
    Scc {
        /// The path to the edge-pairs file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The number of largest component sizes to report.
        #[arg(short('t'), long, default_value_t = 5)]
        top: usize,
    },
    /// Shortest-path distances from one vertex of a directed graph.
    Dijkstra {
        /// The path to the weighted adjacency-list file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The 1-indexed source vertex.
        #[arg(short('s'), long, default_value_t = 1)]
        source: usize,

        /// The 1-indexed vertices whose distances to report. Defaults to all.
        #[arg(short('t'), long, value_delimiter = ',')]
        targets: Vec<usize>,
    },
    /// A max-spacing k-clustering of the vertices of an undirected graph.
    Cluster {
        /// The path to the weighted edge-list file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The number of clusters.
        #[arg(short('k'), long, default_value_t = 4)]
        k: usize,
    },
    /// Clustering of bit-string labels by Hamming distance.
    HammingCluster {
        /// The path to the labels file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The smallest Hamming distance allowed between clusters.
        #[arg(short('m'), long, default_value_t = 3)]
        min_spacing: usize,
    },
    /// Quicksort and merge sort of a list of integers, one per line.
    Sort {
        /// The path to the numbers file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// How quicksort chooses its pivots.
        #[arg(short('p'), long, default_value = "median-of-three")]
        pivot: classic::Pivot,
    },
    /// The best value of a 0/1 knapsack.
    Knapsack {
        /// The path to the knapsack file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// Whether to solve only the reachable sub-problems.
        #[arg(long, default_value_t = false)]
        memoized: bool,
    },
    /// Greedy scheduling of weighted jobs.
    Schedule {
        /// The path to the jobs file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// Whether to order jobs by `weight - length` instead of `weight / length`.
        #[arg(long, default_value_t = false)]
        difference: bool,
    },
    /// The sum of the running medians of a list of integers, one per line.
    Median {
        /// The path to the numbers file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,
    },
}

impl Commands {
    /// Runs the subcommand.
    ///
    /// # Errors
    ///
    /// * If the input could not be read.
    /// * If the algorithm rejects its input.
    pub fn run(self, seed: Option<u64>) -> Result<Report, String> {
        match self {
            Self::MinCut {
                inp_path,
                repetitions,
                parallel,
            } => algorithms::min_cut(&inp_path, repetitions, parallel, seed),
            Self::Mst { inp_path, prim } => algorithms::mst(&inp_path, prim),
            Self::Scc { inp_path, top } => algorithms::scc(&inp_path, top),
            Self::Dijkstra {
                inp_path,
                source,
                targets,
            } => algorithms::dijkstra(&inp_path, source, &targets),
            Self::Cluster { inp_path, k } => algorithms::cluster(&inp_path, k),
            Self::HammingCluster { inp_path, min_spacing } => algorithms::hamming_cluster(&inp_path, min_spacing),
            Self::Sort { inp_path, pivot } => classic::sort(&inp_path, pivot),
            Self::Knapsack { inp_path, memoized } => classic::knapsack(&inp_path, memoized),
            Self::Schedule { inp_path, difference } => classic::schedule(&inp_path, difference),
            Self::Median { inp_path } => classic::median(&inp_path),
        }
    }
}
