//! Linear scan against the fixed hash table, on synthetic text.
//!
//! The linear scan is quadratic in the number of distinct tokens: the vocabulary sizes below are kept small enough
//! for it to finish in reasonable time.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tokfreq::{DEFAULT_CAPACITY, FixedHashTable, LinearMap, hash::djb2, tally};

criterion_main!(strategies, hashing);

criterion_group!(strategies, count_linear, count_hashed);
criterion_group!(hashing, hash_tokens);

const WORDS: usize = 20_000;

/// `WORDS` tokens drawn from a vocabulary of `vocabulary` distinct words, skewed towards the first ones.
fn text(vocabulary: usize) -> Vec<u8> {
    let mut text = Vec::new();
    let mut state = 0x2545_f491_u64;
    for _ in 0..WORDS {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let word = (state as usize % vocabulary) * (state as usize % 7 + 1) / 7;
        text.extend_from_slice(format!("word{word} ").as_bytes());
    }
    text
}

fn count_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");
    group.throughput(Throughput::Elements(WORDS as u64));

    for vocabulary in [100, 1_000, 5_000] {
        let text = text(vocabulary);
        group.bench_with_input(BenchmarkId::from_parameter(vocabulary), &text, |b, text| {
            b.iter(|| {
                let mut map = LinearMap::new();
                black_box(tally(&mut map, text).unwrap())
            })
        });
    }
    group.finish();
}

fn count_hashed(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_table");
    group.throughput(Throughput::Elements(WORDS as u64));

    for vocabulary in [100, 1_000, 5_000] {
        let text = text(vocabulary);
        group.bench_with_input(BenchmarkId::from_parameter(vocabulary), &text, |b, text| {
            b.iter(|| {
                //  Allocation of the slots is part of the measure, as it is in the binary.
                let mut table = FixedHashTable::new(DEFAULT_CAPACITY).unwrap();
                black_box(tally(&mut table, text).unwrap())
            })
        });
    }
    group.finish();
}

fn hash_tokens(c: &mut Criterion) {
    let text = text(1_000);
    let tokens: Vec<&[u8]> = tokfreq::tokenizer::tokens(&text).collect();

    c.bench_function("djb2", |b| {
        b.iter(|| tokens.iter().fold(0u32, |acc, token| acc ^ djb2(black_box(token))))
    });
}
