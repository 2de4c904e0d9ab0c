//! Submodule providing the core algebra: element-wise
//! addition, matrix-vector and matrix-matrix multiplication (dense and
//! sparse), exponentiation, fixed-point iteration, and the dot product.

use alloc::vec;
use alloc::vec::Vec;

use crate::errors::{PalmaError, Result};
use crate::matrix::{DenseMatrix, SparseMatrix};
use crate::scalar::Scalar;
use crate::semiring::SemiringKind;

fn require_same_shape(a_rows: usize, a_cols: usize, b_rows: usize, b_cols: usize) -> Result<()> {
    if a_rows != b_rows || a_cols != b_cols {
        return Err(PalmaError::InvalidDimensions("operand shapes do not match"));
    }
    Ok(())
}

fn require_same_semiring(a: SemiringKind, b: SemiringKind) -> Result<()> {
    if a != b {
        return Err(PalmaError::InvalidArgument("operands must share a semiring"));
    }
    Ok(())
}

/// Computes `C = A ⊕ B` element-wise.
///
/// # Errors
///
/// Returns [`PalmaError::InvalidDimensions`] if `a` and `b` differ in
/// shape, or [`PalmaError::InvalidArgument`] if they are defined over
/// different semirings.
pub fn add_dense(a: &DenseMatrix<'_>, b: &DenseMatrix<'_>) -> Result<DenseMatrix<'static>> {
    require_same_shape(a.rows(), a.cols(), b.rows(), b.cols())?;
    require_same_semiring(a.semiring(), b.semiring())?;
    let s = a.semiring();
    let mut out = DenseMatrix::create_zero(a.rows(), a.cols(), s)?;
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            out.set(i, j, s.add(a.get(i, j), b.get(i, j)));
        }
    }
    Ok(out)
}

/// Computes `y = A ⊗ x`: for each row `i`, `y[i] = ⊕_j (A[i,j] ⊗ x[j])`.
///
/// `y` must already have length `a.rows()`; this is the in-place variant
/// of matrix-vector multiplication (spec.md §4.4).
///
/// # Errors
///
/// Returns [`PalmaError::InvalidDimensions`] if `x.len() != a.cols()` or
/// `y.len() != a.rows()`.
pub fn matvec_dense(a: &DenseMatrix<'_>, x: &[Scalar], y: &mut [Scalar]) -> Result<()> {
    if x.len() != a.cols() {
        return Err(PalmaError::InvalidDimensions("x.len() must equal a.cols()"));
    }
    if y.len() != a.rows() {
        return Err(PalmaError::InvalidDimensions("y.len() must equal a.rows()"));
    }
    let s = a.semiring();
    for i in 0..a.rows() {
        let mut acc = s.zero();
        for j in 0..a.cols() {
            acc = s.add(acc, s.mul(a.get(i, j), x[j]));
        }
        y[i] = acc;
    }
    Ok(())
}

/// Computes `y = A ⊗ x` for a sparse `A`, visiting only stored entries.
///
/// # Errors
///
/// Returns [`PalmaError::InvalidDimensions`] if `x.len() != a.cols()` or
/// `y.len() != a.rows()`.
pub fn matvec_sparse(a: &SparseMatrix, x: &[Scalar], y: &mut [Scalar]) -> Result<()> {
    if x.len() != a.cols() {
        return Err(PalmaError::InvalidDimensions("x.len() must equal a.cols()"));
    }
    if y.len() != a.rows() {
        return Err(PalmaError::InvalidDimensions("y.len() must equal a.rows()"));
    }
    let s = a.semiring();
    y.fill(s.zero());
    for (i, j, v) in a.iter() {
        y[i] = s.add(y[i], s.mul(v, x[j]));
    }
    Ok(())
}

/// Allocating dense matrix multiply: `C = A ⊗ B`, `A: m x n`, `B: n x p`,
/// `C: m x p`. Row order does not affect the result: every semiring's
/// `⊕` is commutative, associative and idempotent.
///
/// # Errors
///
/// Returns [`PalmaError::InvalidDimensions`] if `a.cols() != b.rows()`,
/// or [`PalmaError::InvalidArgument`] if the operands use different
/// semirings.
pub fn matmul_dense(a: &DenseMatrix<'_>, b: &DenseMatrix<'_>) -> Result<DenseMatrix<'static>> {
    if a.cols() != b.rows() {
        return Err(PalmaError::InvalidDimensions("a.cols() must equal b.rows()"));
    }
    require_same_semiring(a.semiring(), b.semiring())?;
    let s = a.semiring();
    let mut out = DenseMatrix::create_zero(a.rows(), b.cols(), s)?;
    matmul_dense_into(a, b, &mut out)?;
    Ok(out)
}

/// In-place dense matrix multiply into a pre-allocated, correctly
/// dimensioned `out`.
///
/// # Errors
///
/// Returns [`PalmaError::InvalidDimensions`] if the shapes are not
/// `A: m x n`, `B: n x p`, `out: m x p`.
#[cfg(not(feature = "parallel"))]
pub fn matmul_dense_into(a: &DenseMatrix<'_>, b: &DenseMatrix<'_>, out: &mut DenseMatrix<'_>) -> Result<()> {
    if a.cols() != b.rows() || out.rows() != a.rows() || out.cols() != b.cols() {
        return Err(PalmaError::InvalidDimensions("matmul shape mismatch"));
    }
    let s = a.semiring();
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut acc = s.zero();
            for k in 0..a.cols() {
                acc = s.add(acc, s.mul(a.get(i, k), b.get(k, j)));
            }
            out.set(i, j, acc);
        }
    }
    Ok(())
}

/// In-place dense matrix multiply, row-parallel over `A`'s rows.
///
/// Safe to parallelise because `⊕`/`⊗` are deterministic and
/// associative/commutative/idempotent: splitting work by row changes
/// neither which reductions happen nor their result (spec.md §5).
///
/// # Errors
///
/// Returns [`PalmaError::InvalidDimensions`] if the shapes are not
/// `A: m x n`, `B: n x p`, `out: m x p`.
#[cfg(feature = "parallel")]
pub fn matmul_dense_into(a: &DenseMatrix<'_>, b: &DenseMatrix<'_>, out: &mut DenseMatrix<'_>) -> Result<()> {
    use rayon::prelude::*;

    if a.cols() != b.rows() || out.rows() != a.rows() || out.cols() != b.cols() {
        return Err(PalmaError::InvalidDimensions("matmul shape mismatch"));
    }
    let s = a.semiring();
    let rows: Vec<Vec<Scalar>> = (0..a.rows())
        .into_par_iter()
        .map(|i| {
            (0..b.cols())
                .map(|j| {
                    let mut acc = s.zero();
                    for k in 0..a.cols() {
                        acc = s.add(acc, s.mul(a.get(i, k), b.get(k, j)));
                    }
                    acc
                })
                .collect()
        })
        .collect();
    for (i, row) in rows.into_iter().enumerate() {
        for (j, v) in row.into_iter().enumerate() {
            out.set(i, j, v);
        }
    }
    Ok(())
}

/// Sparse matrix multiply by row-wise expand-accumulate: for each row of
/// `A`, a dense length-`p` accumulator is filled from the matching rows
/// of `B` and then swept for non-ε entries (spec.md §4.4).
///
/// # Errors
///
/// Returns [`PalmaError::InvalidDimensions`] if `a.cols() != b.rows()`,
/// or [`PalmaError::InvalidArgument`] if the operands use different
/// semirings.
pub fn matmul_sparse(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    if a.cols() != b.rows() {
        return Err(PalmaError::InvalidDimensions("a.cols() must equal b.rows()"));
    }
    require_same_semiring(a.semiring(), b.semiring())?;
    let s = a.semiring();
    let p = b.cols();
    let mut out = SparseMatrix::create(a.rows(), p, a.nnz(), s);
    let mut accumulator = vec![s.zero(); p];
    for i in 0..a.rows() {
        for (k, a_ik) in a.row_iter(i) {
            for (j, b_kj) in b.row_iter(k) {
                accumulator[j] = s.add(accumulator[j], s.mul(a_ik, b_kj));
            }
        }
        for (j, acc) in accumulator.iter_mut().enumerate() {
            if !s.is_zero(*acc) {
                out.set(i, j, *acc);
            }
            *acc = s.zero();
        }
    }
    Ok(out)
}

/// Computes `A^n` by binary (square-and-multiply) exponentiation.
/// `A^0` is the identity matrix.
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square.
pub fn power_dense(a: &DenseMatrix<'_>, n: u32) -> Result<DenseMatrix<'static>> {
    if a.rows() != a.cols() {
        return Err(PalmaError::NotSquare { rows: a.rows(), cols: a.cols() });
    }
    let s = a.semiring();
    if n == 0 {
        return DenseMatrix::create_identity(a.rows(), s);
    }
    let mut result = DenseMatrix::create_identity(a.rows(), s)?;
    let mut base = a.to_owned_matrix();
    let mut exp = n;
    while exp > 0 {
        if exp & 1 == 1 {
            result = matmul_dense(&result, &base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = matmul_dense(&base, &base)?;
        }
    }
    Ok(result)
}

/// Repeatedly overwrites `x` with `A ⊗ x`, `k` times.
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square, or
/// [`PalmaError::InvalidDimensions`] if `x.len() != a.rows()`.
pub fn iterate_dense(a: &DenseMatrix<'_>, x: &mut [Scalar], k: usize) -> Result<()> {
    if a.rows() != a.cols() {
        return Err(PalmaError::NotSquare { rows: a.rows(), cols: a.cols() });
    }
    if x.len() != a.rows() {
        return Err(PalmaError::InvalidDimensions("x.len() must equal a.rows()"));
    }
    let mut scratch = vec![0; x.len()];
    for _ in 0..k {
        matvec_dense(a, x, &mut scratch)?;
        x.copy_from_slice(&scratch);
    }
    Ok(())
}

/// Computes `⊕_i (x[i] ⊗ y[i])`.
///
/// # Errors
///
/// Returns [`PalmaError::InvalidDimensions`] if `x.len() != y.len()`.
pub fn dot(x: &[Scalar], y: &[Scalar], semiring: SemiringKind) -> Result<Scalar> {
    if x.len() != y.len() {
        return Err(PalmaError::InvalidDimensions("x and y must have equal length"));
    }
    let mut acc = semiring.zero();
    for (a, b) in x.iter().zip(y.iter()) {
        acc = semiring.add(acc, semiring.mul(*a, *b));
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::{add_dense, dot, iterate_dense, matmul_dense, matvec_dense, matvec_sparse, power_dense};
    use crate::matrix::{DenseMatrix, SparseMatrix};
    use crate::semiring::SemiringKind;

    fn sample_min_plus() -> DenseMatrix<'static> {
        // n=4, edges (0->1)=5, (1->2)=3, (2->3)=2, diagonal=0, others = +inf.
        let s = SemiringKind::MinPlus;
        let mut m = DenseMatrix::create_zero(4, 4, s).unwrap();
        for i in 0..4 {
            m.set(i, i, 0);
        }
        m.set(0, 1, 5);
        m.set(1, 2, 3);
        m.set(2, 3, 2);
        m
    }

    #[test]
    fn add_is_elementwise_and_idempotent_on_equal_operands() {
        let m = sample_min_plus();
        let sum = add_dense(&m, &m).unwrap();
        for (i, j, v) in m.iter() {
            assert_eq!(sum.get(i, j), v);
        }
    }

    #[test]
    fn matvec_dense_and_sparse_cross_validate() {
        let dense = sample_min_plus();
        let sparse = SparseMatrix::from_dense(&dense, SemiringKind::MinPlus);
        let x = vec![0, i32::MAX, i32::MAX, i32::MAX];
        let mut y_dense = vec![0; 4];
        let mut y_sparse = vec![0; 4];
        matvec_dense(&dense, &x, &mut y_dense).unwrap();
        matvec_sparse(&sparse, &x, &mut y_sparse).unwrap();
        assert_eq!(y_dense, y_sparse);
    }

    #[test]
    fn matmul_then_identity_is_noop() {
        let m = sample_min_plus();
        let id = DenseMatrix::create_identity(4, SemiringKind::MinPlus).unwrap();
        let product = matmul_dense(&m, &id).unwrap();
        for (i, j, v) in m.iter() {
            assert_eq!(product.get(i, j), v);
        }
    }

    #[test]
    fn power_zero_is_identity() {
        let m = sample_min_plus();
        let p0 = power_dense(&m, 0).unwrap();
        let id = DenseMatrix::create_identity(4, SemiringKind::MinPlus).unwrap();
        for (i, j, v) in id.iter() {
            assert_eq!(p0.get(i, j), v);
        }
    }

    #[test]
    fn iterate_matches_scenario_a_shortest_path() {
        let m = sample_min_plus();
        let mut x = vec![i32::MAX; 4];
        x[0] = 0;
        iterate_dense(&m, &mut x, 3).unwrap();
        assert_eq!(x[3], 10);
    }

    #[test]
    fn dot_over_boolean_is_or_of_ands() {
        let x = [1, 0, 1];
        let y = [0, 0, 1];
        assert_eq!(dot(&x, &y, SemiringKind::Boolean).unwrap(), 1);
    }
}
