//! Fuzzing submodule checking that `A** == A*` for arbitrary square
//! matrices, regardless of semiring.

use honggfuzz::fuzz;
use palma::prelude::{DenseMatrix, SparseMatrix, closure};

fn main() {
    loop {
        fuzz!(|csr: SparseMatrix| {
            let n = csr.rows().min(csr.cols());
            if n == 0 {
                return;
            }
            let semiring = csr.semiring();
            let mut square = DenseMatrix::create_zero(n, n, semiring).unwrap();
            for (row, col, value) in csr.iter() {
                if row < n && col < n {
                    square.set(row, col, value);
                }
            }

            let once = closure(&square).unwrap();
            let twice = closure(&once).unwrap();
            for (i, j, v) in once.iter() {
                assert_eq!(twice.get(i, j), v, "closure is not idempotent at ({i},{j})");
            }
        });
    }
}
