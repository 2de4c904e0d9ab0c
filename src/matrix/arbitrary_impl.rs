//! Implementation of the `Arbitrary` trait for [`SparseMatrix`], used by
//! the fuzz targets to generate structurally valid CSR matrices straight
//! from raw bytes.

use alloc::vec::Vec;

use arbitrary::{Arbitrary, Unstructured};

use super::SparseMatrix;
use crate::scalar::Scalar;
use crate::semiring::SemiringKind;

/// Shapes generated by fuzzing are kept small: a large `rows`/`cols` pair
/// would spend the fuzzer's entropy budget on padding rather than on
/// exercising the CSR insertion logic.
const MAX_DIM: usize = 32;

impl<'a> Arbitrary<'a> for SparseMatrix {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let rows = u.int_in_range(1..=MAX_DIM)?;
        let cols = u.int_in_range(1..=MAX_DIM)?;
        let semiring = SemiringKind::arbitrary(u)?;
        let edges: Vec<(usize, usize, Scalar)> = Vec::arbitrary(u)?;

        let mut m = SparseMatrix::create(rows, cols, edges.len(), semiring);
        for (row, col, value) in edges {
            m.set(row % rows, col % cols, value);
        }
        m.compress();
        Ok(m)
    }
}
