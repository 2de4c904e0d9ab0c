//! Integration tests for dense/sparse matrix invariants (spec.md §8,
//! properties 6-9).

use palma::prelude::*;

// ============================================================================
// Property 6: clone is deep
// ============================================================================

#[test]
fn dense_clone_shares_no_storage() {
    let mut m = DenseMatrix::create_zero(3, 3, SemiringKind::MaxPlus).unwrap();
    m.set(1, 1, 42);
    let mut clone = m.clone();
    clone.set(1, 1, 7);
    assert_eq!(m.get(1, 1), 42);
    assert_eq!(clone.get(1, 1), 7);
}

#[test]
fn sparse_clone_shares_no_storage() {
    let mut s = SparseMatrix::create(2, 2, 0, SemiringKind::MaxPlus);
    s.set(0, 0, 5);
    let mut clone = s.clone();
    clone.set(0, 0, 9);
    assert_eq!(s.get(0, 0), 5);
    assert_eq!(clone.get(0, 0), 9);
}

// ============================================================================
// Property 7: dense <-> sparse round trip
// ============================================================================

#[test]
fn from_dense_then_to_dense_round_trips() {
    let mut dense = DenseMatrix::create_zero(3, 3, SemiringKind::MinPlus).unwrap();
    dense.set(0, 1, 4);
    dense.set(2, 0, 9);
    let sparse = SparseMatrix::from_dense(&dense, SemiringKind::MinPlus);
    let back = sparse.to_dense().unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(back.get(i, j), dense.get(i, j));
        }
    }
}

#[test]
fn to_dense_then_from_dense_round_trips() {
    let mut s = SparseMatrix::create(2, 2, 0, SemiringKind::Boolean);
    s.set(0, 0, 1);
    s.set(1, 1, 1);
    let dense = s.to_dense().unwrap();
    let back = SparseMatrix::from_dense(&dense, SemiringKind::Boolean);
    assert_eq!(back.nnz(), s.nnz());
    for i in 0..2 {
        for j in 0..2 {
            assert_eq!(back.get(i, j), s.get(i, j));
        }
    }
}

// ============================================================================
// Property 8: row_ptr[rows] == nnz, columns strictly ascend after `set`
// ============================================================================

#[test]
fn csr_invariants_survive_out_of_order_inserts() {
    let mut s = SparseMatrix::create(4, 4, 0, SemiringKind::MaxPlus);
    for (i, j, v) in [(2, 3, 1), (0, 0, 2), (2, 0, 3), (0, 3, 4), (2, 1, 5)] {
        s.set(i, j, v);
    }
    s.check_invariants().unwrap();
    assert_eq!(s.row_nnz(2), 3);
}

// ============================================================================
// Property 9: dense and sparse matvec cross-validate
// ============================================================================

#[test]
fn dense_and_sparse_matvec_agree() {
    let mut dense = DenseMatrix::create_zero(3, 3, SemiringKind::MinPlus).unwrap();
    dense.set(0, 0, 0);
    dense.set(1, 1, 0);
    dense.set(2, 2, 0);
    dense.set(0, 1, 2);
    dense.set(1, 2, 3);
    let sparse = SparseMatrix::from_dense(&dense, SemiringKind::MinPlus);

    let x = [0, POS_INF, POS_INF];
    let mut y_dense = [0; 3];
    let mut y_sparse = [0; 3];
    matvec_dense(&dense, &x, &mut y_dense).unwrap();
    matvec_sparse(&sparse, &x, &mut y_sparse).unwrap();
    assert_eq!(y_dense, y_sparse);
}
