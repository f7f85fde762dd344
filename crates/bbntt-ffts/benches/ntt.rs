use bbntt_ffts::{
    coset::coset_lde,
    ntt::{forward_ntt_in_place, inverse_ntt_in_place},
    BabyBear as F,
};
use bbntt_params::DomainParameters;
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

#[inline]
fn det_vec(n: usize, seed: u64) -> Vec<F> {
    let (mut a, c, m) = (
        1664525u64.wrapping_mul(seed).wrapping_add(1013904223),
        1013904223u64,
        1u64 << 32,
    );
    (0..n)
        .map(|i| {
            a = a.wrapping_mul(1664525).wrapping_add(c) % m;
            F::from_canonical((a ^ (i as u64).wrapping_mul(0x9E37_79B9)) as u32)
        })
        .collect()
}

fn bench_ntt(c: &mut Criterion) {
    let params = DomainParameters::global().expect("published parameters validate");
    let mut group = c.benchmark_group("ntt_babybear_pow2");
    for &k in &[14u32, 16, 18] {
        let n = 1usize << k;
        group.throughput(Throughput::Elements(n as u64));

        // Base coefficients (deterministic, stable across runs).
        let base = det_vec(n, 2024);

        // Forward NTT
        group.bench_function(BenchmarkId::new("forward_ntt_in_place", format!("2^{k}")), |b| {
            b.iter_batched(
                || black_box(base.clone()),
                |mut v| {
                    forward_ntt_in_place(params, black_box(&mut v)).expect("ntt");
                    black_box(v);
                },
                BatchSize::LargeInput,
            )
        });

        // Precompute forward evals for inverse NTT bench.
        let mut evals = base.clone();
        forward_ntt_in_place(params, &mut evals).expect("ntt");

        // Inverse NTT
        group.bench_function(BenchmarkId::new("inverse_ntt_in_place", format!("2^{k}")), |b| {
            b.iter_batched(
                || black_box(evals.clone()),
                |mut v| {
                    inverse_ntt_in_place(params, black_box(&mut v)).expect("intt");
                    black_box(v);
                },
                BatchSize::LargeInput,
            )
        });

        // Coset LDE with the table's generator as shift.
        group.bench_function(BenchmarkId::new("coset_lde", format!("2^{k}")), |b| {
            b.iter_batched(
                || black_box(base.clone()),
                |coeffs| {
                    black_box(coset_lde(params, black_box(&coeffs), k).expect("lde"));
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ntt);
criterion_main!(benches);
