use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use chaintable::infrastructure::hash::{crc32_hash, fnv1a_hash, positional_hash, xxh64_hash};

// Generate a random string of specified length
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

fn bench_string_length(c: &mut Criterion, group_name: &str, length: usize) {
    let s = generate_random_string(length);

    let mut group = c.benchmark_group(group_name);

    group.bench_function("positional_hash", |b| b.iter(|| positional_hash(black_box(&s))));
    group.bench_function("fnv1a_hash", |b| b.iter(|| fnv1a_hash(black_box(&s))));
    group.bench_function("xxh64_hash", |b| b.iter(|| xxh64_hash(black_box(&s))));
    group.bench_function("crc32_hash", |b| b.iter(|| crc32_hash(black_box(&s))));

    group.finish();
}

pub fn bench_short_strings(c: &mut Criterion) {
    bench_string_length(c, "ShortStrings", 10);
}

pub fn bench_medium_strings(c: &mut Criterion) {
    bench_string_length(c, "MediumStrings", 100);
}

pub fn bench_long_strings(c: &mut Criterion) {
    bench_string_length(c, "LongStrings", 1000);
}

criterion_group!(benches, bench_short_strings, bench_medium_strings, bench_long_strings);
criterion_main!(benches);
