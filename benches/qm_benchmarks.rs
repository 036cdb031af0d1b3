//! Benchmark suite for Quine-McCluskey minimization
//!
//! Minimizes randomly generated covers at a range of input widths. Instances
//! are produced by the crate's own generator with fixed seeds, so runs are
//! comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qm_logic::{generator, Minimizable};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED: u64 = 0x5EED;

fn bench_minimize_by_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");

    for num_inputs in [4usize, 6, 8] {
        let mut rng = StdRng::seed_from_u64(SEED);
        let cover = generator::generate_instance(num_inputs, 1, &mut rng);

        group.throughput(Throughput::Elements(cover.num_terms() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_inputs),
            &cover,
            |b, cover| {
                b.iter(|| black_box(cover).minimize().unwrap());
            },
        );
    }

    group.finish();
}

fn bench_prime_implicants_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_implicants");

    for num_inputs in [4usize, 6, 8] {
        let mut rng = StdRng::seed_from_u64(SEED);
        let cover = generator::generate_instance(num_inputs, 1, &mut rng);
        let minterms = cover.term_set();
        let config = qm_logic::MinimizerConfig::default();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_inputs),
            &minterms,
            |b, minterms| {
                b.iter(|| qm_logic::qm::prime_implicants(black_box(minterms), &config).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_minimize_by_width, bench_prime_implicants_only);
criterion_main!(benches);
