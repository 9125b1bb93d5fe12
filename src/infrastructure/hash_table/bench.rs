use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use chaintable::{HashKind, SharedTable, Table, TableConfig};

const OPERATIONS: usize = 10_000;
const THREAD_COUNT: usize = 8;

fn keys() -> Vec<String> {
    (0..OPERATIONS).map(|i| format!("key-{}", i)).collect()
}

// Insert, read back and remove every key, per hash function
pub fn bench_single_threaded_table(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("SingleThreaded");

    for kind in [HashKind::Positional, HashKind::Fnv1a, HashKind::Xxh64, HashKind::Crc32] {
        group.bench_with_input(BenchmarkId::new("Table", format!("{:?}", kind)), &kind, |b, &kind| {
            b.iter(|| {
                let mut table = Table::with_config(TableConfig::with_capacity(1).hash(kind)).unwrap();
                for key in &keys {
                    table.insert(key, "test_value").unwrap();
                }
                for key in &keys {
                    assert!(table.fetch(black_box(key)).is_some());
                }
                for key in &keys {
                    table.remove(key);
                }
            });
        });
    }

    group.bench_function("StdHashMap", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for key in &keys {
                map.insert(key.clone(), "test_value".to_string());
            }
            for key in &keys {
                assert!(map.get(black_box(key)).is_some());
            }
            for key in &keys {
                map.remove(key);
            }
        });
    });

    group.finish();
}

// Growth cost: start from a single bucket versus a pre-sized table
pub fn bench_growth(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("Growth");

    for capacity in [1, OPERATIONS / 15 + 1] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            b.iter(|| {
                let mut table = Table::create(capacity).unwrap();
                for key in &keys {
                    table.insert(key, "v").unwrap();
                }
                table
            });
        });
    }

    group.finish();
}

pub fn bench_concurrent_insertions(c: &mut Criterion) {
    let mut group = c.benchmark_group("ConcurrentInsertions");

    group.bench_function("SharedTable", |b| {
        b.iter(|| {
            let table = Arc::new(SharedTable::create(16).unwrap());

            let handles: Vec<_> = (0..THREAD_COUNT)
                .map(|thread_id| {
                    let table = table.clone();
                    thread::spawn(move || {
                        for i in 0..OPERATIONS / THREAD_COUNT {
                            let key = format!("{}-{}", thread_id, i);
                            table.insert(&key, "test_value").unwrap();
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_single_threaded_table, bench_growth, bench_concurrent_insertions);
criterion_main!(benches);
