#![doc = include_str!("../README.md")]

pub mod hamming;
pub mod knapsack;
pub mod median;
pub mod scheduling;
pub mod sorting;

/// The current version of the crate.
pub const VERSION: &str = "0.3.0";
