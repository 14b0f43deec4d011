#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{measurement, *};

use rand::prelude::*;

use sparse_distances::{
    kernels::{sparsity_aware_dist2_f64, sparsity_aware_dist_f64},
    vectors::{sparsity_aware_dist, sparsity_aware_dist2},
};

/// Generates a pair of random vote vectors with NaN at roughly a third of
/// the positions.
fn gen_votes(dimensionality: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    (0..2)
        .map(|_| {
            (0..dimensionality)
                .map(|_| {
                    if rng.gen_bool(0.3) {
                        f64::NAN
                    } else {
                        f64::from(rng.gen_range(0_u8..=5))
                    }
                })
                .collect()
        })
        .collect()
}

fn bench_one<'a>(
    group: &mut BenchmarkGroup<'a, measurement::WallTime>,
    id: BenchmarkId,
    x: &[f64],
    y: &[f64],
    metric: fn(&[f64], &[f64]) -> f64,
) {
    group.bench_with_input(id, &x.len(), |b, _| {
        b.iter_with_large_drop(|| black_box(metric(x, y)))
    });
}

fn big_votes(c: &mut Criterion) {
    let mut group = c.benchmark_group("SparseVotes");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    #[allow(clippy::type_complexity)]
    let metrics: &[(&str, fn(&[f64], &[f64]) -> f64, fn(&[f64], &[f64]) -> f64)] = &[
        ("NanSentinel", sparsity_aware_dist, sparsity_aware_dist_f64),
        ("ZeroSentinel", sparsity_aware_dist2, sparsity_aware_dist2_f64),
    ];

    for d in 3..=7 {
        let dimensionality = 10_u32.pow(d) as usize;
        let data = gen_votes(
            dimensionality,
            &mut rand::rngs::StdRng::seed_from_u64(u64::from(d)),
        );

        for &(name, metric, metric_f64) in metrics {
            let name_gen = format!("{name}-generic");
            let id = BenchmarkId::new(name_gen, dimensionality);
            bench_one(&mut group, id, &data[0], &data[1], metric);

            let name_f64 = format!("{name}-f64");
            let id = BenchmarkId::new(name_f64, dimensionality);
            bench_one(&mut group, id, &data[0], &data[1], metric_f64);
        }
    }
    group.finish();
}

criterion_group!(benches, big_votes);
criterion_main!(benches);
