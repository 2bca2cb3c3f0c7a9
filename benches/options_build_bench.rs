use criterion::{Criterion, criterion_group, criterion_main};
use iwi_chart::api::{BarChartBuilder, ChartVariant};
use iwi_chart::core::{AveragingStrategy, DataTable, VillageRecord, compute_averages};
use std::hint::black_box;

fn generated_table(entities: usize, samples: usize) -> DataTable {
    (0..entities)
        .map(|e| {
            let data = (0..samples)
                .map(|i| ((e * 31 + i * 7) % 100) as f64)
                .collect();
            VillageRecord::new(format!("Village {e}"), data)
        })
        .collect()
}

fn bench_compute_averages_10k(c: &mut Criterion) {
    let table = generated_table(5, 10_000);

    c.bench_function("compute_averages_simple_mean_10k", |b| {
        b.iter(|| {
            let _ = compute_averages(black_box(&table), AveragingStrategy::SimpleMean);
        })
    });
    c.bench_function("compute_averages_channel_pair_10k", |b| {
        b.iter(|| {
            let _ = compute_averages(black_box(&table), AveragingStrategy::ChannelPair);
        })
    });
}

fn bench_build_and_serialize_options(c: &mut Criterion) {
    let table = generated_table(5, 1_000);

    c.bench_function("build_stacked_options_json", |b| {
        b.iter(|| {
            let options = BarChartBuilder::for_variant(black_box(&table), ChartVariant::Stacked)
                .build();
            let _ = options.to_json_pretty().expect("serialize options");
        })
    });
}

criterion_group!(
    benches,
    bench_compute_averages_10k,
    bench_build_and_serialize_options
);
criterion_main!(benches);
