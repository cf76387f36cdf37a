use chain_collections::{ArrayList, LinkedList, Sequence};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn filled<L: Sequence<u64> + Default>(n: u64) -> L {
    let mut l = L::default();
    for i in 0..n {
        l.push(i);
    }
    l
}

fn bench_push_10k(c: &mut Criterion) {
    c.bench_function("array_list::push_10k", |b| {
        b.iter(|| black_box(filled::<ArrayList<u64>>(10_000)))
    });
    c.bench_function("linked_list::push_10k", |b| {
        b.iter(|| black_box(filled::<LinkedList<u64>>(10_000)))
    });
}

// Front inserts shift every element of the array list but only relink the
// head of the linked list.
fn bench_insert_front_2k(c: &mut Criterion) {
    c.bench_function("array_list::insert_front_2k", |b| {
        b.iter_batched(
            ArrayList::<u64>::new,
            |mut l| {
                for i in 0..2_000 {
                    l.insert(0, i).unwrap();
                }
                black_box(l)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("linked_list::insert_front_2k", |b| {
        b.iter_batched(
            LinkedList::<u64>::new,
            |mut l| {
                for i in 0..2_000 {
                    l.insert(0, i).unwrap();
                }
                black_box(l)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_reverse_10k(c: &mut Criterion) {
    c.bench_function("array_list::reverse_10k", |b| {
        b.iter_batched(
            || filled::<ArrayList<u64>>(10_000),
            |mut l| {
                l.reverse();
                black_box(l)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("linked_list::reverse_10k", |b| {
        b.iter_batched(
            || filled::<LinkedList<u64>>(10_000),
            |mut l| {
                l.reverse();
                black_box(l)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_push_10k, bench_insert_front_2k, bench_reverse_10k
}
criterion_main!(benches);
