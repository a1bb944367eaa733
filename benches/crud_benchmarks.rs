use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rbstat_tree::OrderedTree;
use std::collections::BTreeMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn key_patterns() -> [(&'static str, Vec<i64>); 3] {
    [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ]
}

// ─── CRUD Benchmarks ────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    for (pattern, keys) in key_patterns() {
        let mut group = c.benchmark_group(format!("insert_{pattern}"));

        group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
            b.iter(|| {
                let mut tree = OrderedTree::new();
                for &k in &keys {
                    tree.insert(k, k);
                }
                tree
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.finish();
    }
}

fn bench_get(c: &mut Criterion) {
    for (pattern, keys) in key_patterns() {
        let tree: OrderedTree<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

        let mut group = c.benchmark_group(format!("get_{pattern}"));

        group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for k in &keys {
                    sum = sum.wrapping_add(*tree.get(k).unwrap());
                }
                sum
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for k in &keys {
                    sum = sum.wrapping_add(*map.get(k).unwrap());
                }
                sum
            });
        });

        group.finish();
    }
}

fn bench_delete(c: &mut Criterion) {
    for (pattern, keys) in key_patterns() {
        let mut group = c.benchmark_group(format!("delete_{pattern}"));

        group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
            b.iter_batched(
                || keys.iter().map(|&k| (k, k)).collect::<OrderedTree<i64, i64>>(),
                |mut tree| {
                    for k in &keys {
                        tree.delete(k);
                    }
                    tree
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter_batched(
                || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
                |mut map| {
                    for k in &keys {
                        map.remove(k);
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

// ─── Order-statistic Benchmarks ─────────────────────────────────────────────

fn bench_rank_kth(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: OrderedTree<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("order_statistics");

    group.bench_function(BenchmarkId::new("rank", N), |b| {
        b.iter(|| keys.iter().map(|k| tree.rank(k)).sum::<usize>());
    });

    group.bench_function(BenchmarkId::new("kth", N), |b| {
        b.iter(|| (0..tree.len()).filter_map(|i| tree.kth(i).map(|n| *n.key())).fold(0i64, i64::wrapping_add));
    });

    group.bench_function(BenchmarkId::new("range", N), |b| {
        b.iter(|| tree.range(0..i64::MAX / 2).count());
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(crud_benches, bench_insert, bench_get, bench_delete);

criterion_group!(order_statistic_benches, bench_rank_kth);

criterion_main!(crud_benches, order_statistic_benches);
