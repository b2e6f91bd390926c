use criterion::*;

use graphs::algorithms::{k_cluster, kruskal_mst, prim_mst};

mod utils;

fn spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning-trees");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for n in [1_000, 10_000, 100_000] {
        let graph = utils::undirected(n, 6, n as u64);

        group.bench_with_input(BenchmarkId::new("kruskal", n), &n, |b, _| {
            b.iter_with_large_drop(|| black_box(kruskal_mst(&graph)))
        });
        group.bench_with_input(BenchmarkId::new("prim", n), &n, |b, _| {
            b.iter_with_large_drop(|| black_box(prim_mst(&graph)))
        });
        group.bench_with_input(BenchmarkId::new("k-cluster", n), &n, |b, _| {
            b.iter_with_large_drop(|| black_box(k_cluster(&graph, 4)))
        });
    }
    group.finish();
}

criterion_group!(benches, spanning_trees);
criterion_main!(benches);
