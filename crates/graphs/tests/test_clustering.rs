//! Tests on clustering binary labels by Hamming distance.

use graphs::{algorithms, io};
use rand::prelude::*;
use test_case::test_case;

mod common;

#[test_case(1, 7 ; "identity")]
#[test_case(2, 3 ; "one flip")]
#[test_case(3, 2 ; "two flips")]
#[test_case(4, 1 ; "three flips")]
#[test_case(6, 1 ; "all")]
fn fixture(min_spacing: usize, expected: usize) -> Result<(), String> {
    let (labels, bits) = io::read_binary_labels(common::data_path("labels.txt"))?;
    assert_eq!(labels.len(), 8);
    assert_eq!(bits, 5);

    let clusters = algorithms::hamming_clusters(&labels, bits, min_spacing)?;
    assert_eq!(clusters.element_count(), 7);
    assert_eq!(clusters.set_count(), expected);
    Ok(())
}

#[test_case(12, 200, 3, 1 ; "sparse")]
#[test_case(10, 300, 2, 2 ; "dense")]
fn agrees_with_pairwise(bits: usize, n: usize, min_spacing: usize, seed: u64) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels = (0..n).map(|_| rng.gen_range(0..(1_u32 << bits))).collect::<Vec<_>>();

    let mut clusters = algorithms::hamming_clusters(&labels, bits, min_spacing)?;

    let mut distinct = labels.clone();
    distinct.sort_unstable();
    distinct.dedup();

    // Count components of the "closer than min_spacing" relation directly.
    let mut pairwise = graphs::UnionFind::new(distinct.len());
    for i in 0..distinct.len() {
        for j in (i + 1)..distinct.len() {
            if ((distinct[i] ^ distinct[j]).count_ones() as usize) < min_spacing {
                pairwise.union(i, j);
            }
        }
    }
    assert_eq!(clusters.set_count(), pairwise.set_count());
    assert_eq!(clusters.sets().len(), pairwise.set_count());
    Ok(())
}
