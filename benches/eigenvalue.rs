//! Criterion benchmark for Karp's maximum-cycle-mean algorithm across
//! graph size and edge density.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use palma::prelude::{DenseMatrix, SemiringKind, eigenvalue};

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

fn random_max_plus_matrix(seed: u64, n: usize, density: f64) -> DenseMatrix<'static> {
    let mut rng = XorShift64::new(seed);
    let s = SemiringKind::MaxPlus;
    let mut m = DenseMatrix::create_zero(n, n, s).unwrap();
    let target_edges = ((n * n) as f64 * density) as usize;
    for _ in 0..target_edges {
        let i = (rng.next() % n as u64) as usize;
        let j = (rng.next() % n as u64) as usize;
        let weight = (rng.next() % 20) as i32 - 5;
        m.set(i, j, weight);
    }
    m
}

fn bench_eigenvalue_by_size_and_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("eigenvalue_by_size_and_density");

    for &n in &[16usize, 32, 64] {
        for &density in &[0.05f64, 0.20] {
            let m = random_max_plus_matrix(11 + n as u64, n, density);
            let label = format!("n={n}_d={density:.2}");
            group.bench_with_input(BenchmarkId::new("eigenvalue", &label), &m, |b, m| {
                b.iter(|| black_box(eigenvalue(black_box(m)).unwrap()));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_eigenvalue_by_size_and_density);
criterion_main!(benches);
