//! Benchmarks for the PEM → PKCS#3 → key generation pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dstuffer_common::Stuffer;
use dstuffer_kem::pkcs3_to_dh_params;
use dstuffer_rand::DeterministicEntropy;
use dstuffer_tests::fixtures::DHPARAMS_PEM;
use dstuffer_utils::dhparams_from_pem;

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    group.bench_function("pem_to_der", |b| {
        b.iter(|| {
            let mut input = Stuffer::with_data(black_box(DHPARAMS_PEM.as_bytes()));
            let mut der = Stuffer::growable_alloc(0);
            dhparams_from_pem(&mut input, &mut der).unwrap();
            der
        });
    });

    group.bench_function("pem_to_params", |b| {
        b.iter(|| {
            let mut input = Stuffer::with_data(black_box(DHPARAMS_PEM.as_bytes()));
            let mut der = Stuffer::growable_alloc(0);
            dhparams_from_pem(&mut input, &mut der).unwrap();
            pkcs3_to_dh_params(&mut der).unwrap()
        });
    });

    let mut input = Stuffer::with_data(DHPARAMS_PEM.as_bytes());
    let mut der = Stuffer::growable_alloc(0);
    dhparams_from_pem(&mut input, &mut der).unwrap();
    let params = pkcs3_to_dh_params(&mut der).unwrap();
    let mut entropy = DeterministicEntropy::from_u64(42);

    group.sample_size(10);
    group.bench_function("keygen_2048", |b| {
        b.iter(|| params.generate_keypair(&mut entropy).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
