use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dh_hashtable::HashTable;
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

fn bench_insert_fresh_100k(c: &mut Criterion) {
    let keys: Vec<String> = lcg(1).take(100_000).map(key).collect();
    c.bench_function("table::insert_fresh_100k", |b| {
        b.iter_batched(
            HashTable::new,
            |mut t| {
                for k in &keys {
                    t.insert(k, k);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_after_churn_10k(c: &mut Criterion) {
    // Insert into a table littered with tombstones from deleted keys.
    c.bench_function("table::insert_after_churn_10k", |b| {
        b.iter_batched(
            || {
                let mut t = HashTable::new();
                let old: Vec<String> = lcg(2).take(20_000).map(key).collect();
                for k in &old {
                    t.insert(k, "v");
                }
                for k in old.iter().step_by(2) {
                    t.delete(k);
                }
                let fresh: Vec<String> = lcg(3).take(10_000).map(key).collect();
                (t, fresh)
            },
            |(mut t, fresh)| {
                for k in &fresh {
                    t.insert(k, "v");
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_search_hit_10k(c: &mut Criterion) {
    c.bench_function("table::search_hit_10k_on_100k", |b| {
        let mut t = HashTable::new();
        let keys: Vec<_> = lcg(7).take(100_000).map(key).collect();
        for k in &keys {
            t.insert(k, k);
        }
        // Precompute 10k random query keys using LCG
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
                black_box(t.search(k));
            }
        })
    });
}

fn bench_search_miss_10k(c: &mut Criterion) {
    c.bench_function("table::search_miss_10k_on_100k", |b| {
        let mut t = HashTable::new();
        for k in lcg(11).take(100_000).map(key) {
            t.insert(&k, "v");
        }
        let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(key).collect();
        b.iter(|| {
            for k in &misses {
                black_box(t.search(k));
            }
        })
    });
}

fn bench_delete_all_100k(c: &mut Criterion) {
    // Drains a full table, crossing every shrink boundary on the way down.
    c.bench_function("table::delete_all_100k", |b| {
        b.iter_batched(
            || {
                let mut t = HashTable::new();
                let keys: Vec<String> = lcg(5).take(100_000).map(key).collect();
                for k in &keys {
                    t.insert(k, "v");
                }
                (t, keys)
            },
            |(mut t, keys)| {
                for k in &keys {
                    t.delete(k);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
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
    targets = bench_insert_fresh_100k, bench_insert_after_churn_10k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_search_hit_10k,
              bench_search_miss_10k,
              bench_delete_all_100k
}
criterion_main!(benches_insert, benches_ops);
