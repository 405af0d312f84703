//! benches/kdf.rs
//! Derivation cost across cost factors.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scrypt_kdf_rs::{derive, Params};
use std::hint::black_box;
use std::time::Duration;

fn derive_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    // Faster runs for the slow high-cost benches
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(10);

    for &log_n in &[10u8, 12, 14, 15] {
        let params = Params::new(log_n, 8, 1);
        let id = BenchmarkId::new("log_n", log_n);
        group.bench_with_input(id, &params, |b, &params| {
            b.iter(|| {
                let record = derive(black_box(b"benchmark-password"), params).unwrap();
                black_box(record);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, derive_benches);
criterion_main!(benches);
