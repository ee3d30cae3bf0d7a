use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use maintenance_index::MaintenanceIndex;
use std::collections::BTreeMap;

const N: usize = 10_000;

// ─── Helper functions to generate date sequences ────────────────────────────

fn date(day: u64) -> String {
    format!("{:04}-{:02}-{:02}", 2000 + day / 372, day / 31 % 12 + 1, day % 31 + 1)
}

fn ordered_dates(n: usize) -> Vec<String> {
    (0..n as u64).map(date).collect()
}

fn reverse_ordered_dates(n: usize) -> Vec<String> {
    (0..n as u64).rev().map(date).collect()
}

fn random_dates(n: usize) -> Vec<String> {
    // Simple LCG so every run sees the same sequence.
    let mut x: u64 = 12345;
    (0..n)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            date((x >> 33) % 200_000)
        })
        .collect()
}

fn index_of(dates: &[String]) -> MaintenanceIndex {
    let mut index = MaintenanceIndex::new();
    for date in dates {
        let _ = index.insert(date.as_str(), "service", 1.0);
    }
    index
}

fn map_of(dates: &[String]) -> BTreeMap<String, (String, f64)> {
    dates.iter().map(|date| (date.clone(), ("service".to_string(), 1.0))).collect()
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    let sequences = [
        ("ordered", ordered_dates(N)),
        ("reverse", reverse_ordered_dates(N)),
        ("random", random_dates(N)),
    ];
    let mut group = c.benchmark_group("insert");

    for (name, dates) in &sequences {
        group.bench_function(BenchmarkId::new("MaintenanceIndex", name), |b| {
            b.iter(|| index_of(dates));
        });

        group.bench_function(BenchmarkId::new("BTreeMap", name), |b| {
            b.iter(|| map_of(dates));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let dates = random_dates(N);
    let index = index_of(&dates);
    let map = map_of(&dates);

    let mut group = c.benchmark_group("search_random");

    group.bench_function(BenchmarkId::new("MaintenanceIndex", N), |b| {
        b.iter(|| {
            let mut total = 0.0;
            for date in &dates {
                if let Some(record) = index.search(date) {
                    total += record.cost();
                }
            }
            total
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut total = 0.0;
            for date in &dates {
                if let Some((_, cost)) = map.get(date) {
                    total += cost;
                }
            }
            total
        });
    });

    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let dates = random_dates(N);
    let mut group = c.benchmark_group("delete_random");

    group.bench_function(BenchmarkId::new("MaintenanceIndex", N), |b| {
        b.iter_batched(
            || index_of(&dates),
            |mut index| {
                for date in &dates {
                    let _ = index.delete(date);
                }
                index
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || map_of(&dates),
            |mut map| {
                for date in &dates {
                    map.remove(date);
                }
                map
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(index_benches, bench_insert, bench_search, bench_delete);

criterion_main!(index_benches);
