//! Criterion benchmark comparing the Kleene closure engine's cost across
//! graph size and edge density.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use palma::prelude::{DenseMatrix, SemiringKind, all_pairs_paths};

struct XorShift64(u64);

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0xdead_beef } else { seed })
    }

    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

/// Generates an `n x n` MinPlus matrix with `density` fraction of
/// off-diagonal edges set to a small positive weight.
fn random_min_plus_matrix(seed: u64, n: usize, density: f64) -> DenseMatrix<'static> {
    let mut rng = XorShift64::new(seed);
    let s = SemiringKind::MinPlus;
    let mut m = DenseMatrix::create_zero(n, n, s).unwrap();
    for i in 0..n {
        m.set(i, i, 0);
    }
    let target_edges = ((n * n) as f64 * density) as usize;
    for _ in 0..target_edges {
        let i = (rng.next() % n as u64) as usize;
        let j = (rng.next() % n as u64) as usize;
        if i != j {
            let weight = (rng.next() % 50 + 1) as i32;
            m.set(i, j, weight);
        }
    }
    m
}

fn bench_closure_by_size_and_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure_by_size_and_density");

    for &n in &[16usize, 32, 64] {
        for &density in &[0.05f64, 0.20] {
            let m = random_min_plus_matrix(7 + n as u64, n, density);
            let label = format!("n={n}_d={density:.2}");
            group.bench_with_input(BenchmarkId::new("all_pairs_paths", &label), &m, |b, m| {
                b.iter(|| black_box(all_pairs_paths(black_box(m)).unwrap()));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_closure_by_size_and_density);
criterion_main!(benches);
