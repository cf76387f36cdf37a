use chain_collections::capacity::{Capacity, PRIMES};
use chain_collections::ChainedHashMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(seed: u64, n: usize) -> (ChainedHashMap<String, u64>, Vec<String>) {
    let mut m = ChainedHashMap::new();
    let keys: Vec<String> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        m.insert(k.clone(), i as u64);
    }
    (m, keys)
}

// Entry counts that land just past each growth threshold, so the last
// insert of every batch pays for one full relink.
fn bench_insert_across_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained::insert_through_growth");
    let mut step = Capacity::initial();
    while let Some(next) = step.next() {
        let n = (step.buckets() as f64 * 0.75) as usize + 1;
        group.bench_with_input(BenchmarkId::from_parameter(next.buckets()), &n, |b, &n| {
            b.iter_batched(
                ChainedHashMap::<u64, u64>::new,
                |mut m| {
                    for (i, x) in lcg(1).take(n).enumerate() {
                        m.insert(x, i as u64);
                    }
                    black_box(m)
                },
                BatchSize::SmallInput,
            )
        });
        if next.buckets() >= PRIMES[6] {
            break;
        }
        step = next;
    }
    group.finish();
}

fn bench_insert_fresh_100k(c: &mut Criterion) {
    c.bench_function("chained::insert_fresh_100k", |b| {
        b.iter_batched(
            ChainedHashMap::<String, u64>::new,
            |mut m| {
                for (i, x) in lcg(1).take(100_000).enumerate() {
                    m.insert(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_replace_100k(c: &mut Criterion) {
    c.bench_function("chained::replace_existing_100k", |b| {
        b.iter_batched(
            || filled(2, 100_000),
            |(mut m, keys)| {
                for k in keys {
                    m.insert(k, 0);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit_10k(c: &mut Criterion) {
    c.bench_function("chained::get_hit_10k_on_100k", |b| {
        let (m, keys) = filled(7, 100_000);
        let n = keys.len();
        let mut s = 0x9e3779b97f4a7c15u64;
        let queries: Vec<String> = (0..10_000)
            .map(|_| {
                s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                keys[(s as usize) % n].clone()
            })
            .collect();
        b.iter(|| {
            for k in &queries {
                black_box(m.get(k));
            }
        })
    });
}

fn bench_get_miss_10k(c: &mut Criterion) {
    c.bench_function("chained::get_miss_10k_on_100k", |b| {
        let (m, _) = filled(11, 100_000);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            for _ in 0..10_000 {
                let k = key(miss.next().unwrap());
                black_box(m.get(&k));
            }
        })
    });
}

fn bench_remove_all_100k(c: &mut Criterion) {
    c.bench_function("chained::remove_all_100k", |b| {
        b.iter_batched(
            || filled(5, 100_000),
            |(mut m, keys)| {
                for k in &keys {
                    black_box(m.remove(k));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_iter_and_diagnostics(c: &mut Criterion) {
    let (m, _) = filled(999, 100_000);
    c.bench_function("chained::iter_all_100k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for (_k, v) in m.iter() {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        })
    });
    c.bench_function("chained::max_chain_length_100k", |b| {
        b.iter(|| black_box(m.max_chain_length()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_across_growth, bench_insert_fresh_100k, bench_replace_100k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_get_hit_10k,
              bench_get_miss_10k,
              bench_remove_all_100k,
              bench_iter_and_diagnostics
}
criterion_main!(benches_insert, benches_ops);
