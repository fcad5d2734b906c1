use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ffuzzy::{compare_digest, score_strings, Digest};
use rand::prelude::*;

fn random_block(rng: &mut impl Rng, len: usize) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0, ALPHABET.len())] as char)
        .collect()
}

fn random_digest(rng: &mut impl Rng, block_size: u64) -> Digest {
    let s1 = random_block(rng, 32);
    let s2 = random_block(rng, 32);
    Digest::parse(&format!("{}:{}:{}", block_size, s1, s2)).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xF0F0_F0F0);

    let short1 = random_block(&mut rng, 16);
    let short2 = random_block(&mut rng, 16);
    c.bench_function("score_strings short", |b| {
        b.iter(|| score_strings(black_box(short1.as_bytes()), black_box(short2.as_bytes()), 3))
    });

    let long1 = random_block(&mut rng, 64);
    let long2 = random_block(&mut rng, 64);
    c.bench_function("score_strings full length", |b| {
        b.iter(|| score_strings(black_box(long1.as_bytes()), black_box(long2.as_bytes()), 3072))
    });

    let mut group = c.benchmark_group("compare_digest");

    let a = random_digest(&mut rng, 3072);
    let b_digest = random_digest(&mut rng, 3072);
    group.bench_function("equal block sizes", |b| {
        b.iter(|| compare_digest(black_box(&a), black_box(&b_digest)))
    });

    let near = random_digest(&mut rng, 6144);
    group.bench_function("near block sizes", |b| {
        b.iter(|| compare_digest(black_box(&a), black_box(&near)))
    });

    let far = random_digest(&mut rng, 49152);
    group.bench_function("far block sizes (early exit)", |b| {
        b.iter(|| compare_digest(black_box(&a), black_box(&far)))
    });

    group.bench_function("identical digests (fast path)", |b| {
        b.iter(|| compare_digest(black_box(&a), black_box(&a)))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
