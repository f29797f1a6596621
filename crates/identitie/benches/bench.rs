use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use identitie::{
    HashArray, Radix64, decode, decode_hash, encode, encode_hash, encode_hash_to_buf,
    encode_to_buf,
};
use rand::Rng;

// Number of values processed per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn random_values() -> Vec<u64> {
    let mut rng = rand::rng();
    (0..TOTAL_IDS).map(|_| rng.random()).collect()
}

/// Runs `f` over every input inside one benchmark iteration.
fn bench_over<I>(c: &mut Criterion, group_name: &str, inputs: &[I], f: impl Fn(&I)) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{}", TOTAL_IDS), |b| {
        b.iter(|| {
            for input in inputs {
                f(black_box(input));
            }
        });
    });

    group.finish();
}

// --- Fixed-length ---

fn benchmark_hash_encode_to_buf(c: &mut Criterion) {
    let values = random_values();
    bench_over(c, "hash/encode_to_buf", &values, |&v| {
        let mut buf = HashArray::default();
        encode_hash_to_buf(v, &mut buf);
        black_box(buf);
    });
}

fn benchmark_hash_encode(c: &mut Criterion) {
    let values = random_values();
    bench_over(c, "hash/encode", &values, |&v| {
        black_box(encode_hash(v));
    });
}

fn benchmark_hash_decode(c: &mut Criterion) {
    let encoded: Vec<String> = random_values().into_iter().map(encode_hash).collect();
    bench_over(c, "hash/decode", &encoded, |s| {
        black_box(decode_hash(s).unwrap());
    });
}

// --- Variable-length ---

fn benchmark_number_encode_to_buf(c: &mut Criterion) {
    let values = random_values();
    bench_over(c, "number/encode_to_buf", &values, |&v| {
        let mut buf = <u64 as Radix64>::DigitArray::default();
        black_box(encode_to_buf(v, &mut buf).unwrap());
        black_box(buf);
    });
}

fn benchmark_number_encode(c: &mut Criterion) {
    let values = random_values();
    bench_over(c, "number/encode", &values, |&v| {
        black_box(encode(v).unwrap());
    });
}

fn benchmark_number_decode(c: &mut Criterion) {
    let encoded: Vec<String> = random_values()
        .into_iter()
        .map(|v| encode(v).unwrap())
        .collect();
    bench_over(c, "number/decode", &encoded, |s| {
        black_box(decode::<u64>(s).unwrap());
    });
}

fn benchmark_number_u128_roundtrip(c: &mut Criterion) {
    let mut rng = rand::rng();
    let values: Vec<u128> = (0..TOTAL_IDS).map(|_| rng.random()).collect();
    bench_over(c, "number/u128/roundtrip", &values, |&v| {
        let s = encode(v).unwrap();
        black_box(decode::<u128>(&s).unwrap());
    });
}

criterion_group!(
    benches,
    // Fixed-length
    benchmark_hash_encode_to_buf,
    benchmark_hash_encode,
    benchmark_hash_decode,
    // Variable-length
    benchmark_number_encode_to_buf,
    benchmark_number_encode,
    benchmark_number_decode,
    benchmark_number_u128_roundtrip,
);
criterion_main!(benches);
