//! Fuzzing submodule on the `SparseMatrix` struct.

use honggfuzz::fuzz;
use palma::prelude::SparseMatrix;

fn main() {
    loop {
        fuzz!(|csr: SparseMatrix| {
            csr.check_invariants().expect("arbitrary-generated CSR must stay well-formed");
        });
    }
}
