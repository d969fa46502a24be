use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tablefill::{prelude::*, random::generate_random_dfa_sized};

fn minimize_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("table-filling");
    for size in [8, 32, 128] {
        let mut rng = fastrand::Rng::with_seed(size as u64);
        let dfa = generate_random_dfa_sized(&mut rng, 2, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dfa, |b, dfa| {
            b.iter(|| MinDFA::new(black_box(dfa)).run().unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, minimize_random);
criterion_main!(benches);
