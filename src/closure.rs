//! Submodule providing the Kleene closure engine and the
//! graph-facade specialisations layered on top of it (this is a
//! thin re-export of these in `crate::graph`).

use alloc::vec::Vec;

use crate::algebra::matmul_dense;
use crate::errors::{PalmaError, Result};
use crate::matrix::DenseMatrix;
use crate::scalar::{POS_INF, Scalar};
use crate::semiring::SemiringKind;

/// Computes `A* = I ⊕ A ⊕ A² ⊕ ...` under `a`'s own semiring.
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square.
pub fn closure(a: &DenseMatrix<'_>) -> Result<DenseMatrix<'static>> {
    closure_as(a, a.semiring())
}

/// Computes the Kleene closure of `a`'s values, but reinterpreted under
/// `semiring` rather than `a.semiring()`.
///
/// This is how the graph facade (spec.md §4.7) expresses bottleneck
/// paths: the same stored scalars, closed under `(max,min)` instead of
/// whatever semiring the matrix happens to be tagged with.
///
/// Converges in a single Floyd–Warshall-style triple loop: idempotent
/// semirings satisfy `A* = A*²`, so no outer fixed-point iteration is
/// needed (spec.md §4.5).
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square.
pub fn closure_as(a: &DenseMatrix<'_>, semiring: SemiringKind) -> Result<DenseMatrix<'static>> {
    if a.rows() != a.cols() {
        return Err(PalmaError::NotSquare { rows: a.rows(), cols: a.cols() });
    }
    let n = a.rows();
    let mut d = DenseMatrix::create_zero(n, n, semiring)?;
    for i in 0..n {
        for j in 0..n {
            d.set(i, j, a.get(i, j));
        }
    }
    for i in 0..n {
        let diag = semiring.add(d.get(i, i), semiring.one());
        d.set(i, i, diag);
    }
    for k in 0..n {
        for i in 0..n {
            let d_ik = d.get(i, k);
            if semiring.is_zero(d_ik) {
                continue;
            }
            for j in 0..n {
                let candidate = semiring.mul(d_ik, d.get(k, j));
                let updated = semiring.add(d.get(i, j), candidate);
                d.set(i, j, updated);
            }
        }
    }
    Ok(d)
}

/// Computes `A⊗A*`, the closure restricted to paths of length ≥ 1.
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square.
pub fn transitive_closure(a: &DenseMatrix<'_>) -> Result<DenseMatrix<'static>> {
    let star = closure(a)?;
    matmul_dense(a, &star)
}

/// Recodes `a` as a Boolean adjacency matrix (any non-ε, non-`+∞` value —
/// and every diagonal entry — becomes `1`; everything else becomes `0`)
/// and computes its Boolean closure: the reachability relation.
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square.
pub fn reachability(a: &DenseMatrix<'_>) -> Result<DenseMatrix<'static>> {
    if a.rows() != a.cols() {
        return Err(PalmaError::NotSquare { rows: a.rows(), cols: a.cols() });
    }
    let n = a.rows();
    let source = a.semiring();
    let mut boolean = DenseMatrix::create_zero(n, n, SemiringKind::Boolean)?;
    for i in 0..n {
        for j in 0..n {
            let v = a.get(i, j);
            let is_edge = i == j || (!source.is_zero(v) && v != POS_INF);
            boolean.set(i, j, Scalar::from(is_edge));
        }
    }
    closure(&boolean)
}

/// Computes bottleneck (max-min) paths: `a`'s stored values closed under
/// `(max,min)` regardless of `a`'s own semiring tag.
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square.
pub fn bottleneck_paths(a: &DenseMatrix<'_>) -> Result<DenseMatrix<'static>> {
    closure_as(a, SemiringKind::MaxMin)
}

/// Alias for [`closure`]: the all-pairs shortest/longest/bottleneck path
/// distances, depending on `a`'s semiring.
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square.
pub fn all_pairs_paths(a: &DenseMatrix<'_>) -> Result<DenseMatrix<'static>> {
    closure(a)
}

/// Single-source path distances: `out` is set to ε everywhere except
/// `out[src] = e`, then overwritten by `A ⊗ out` exactly `a.rows()`
/// times — sufficient whenever `a.rows()` bounds the longest acyclic
/// path (spec.md §4.5; see spec.md §9 for the ε-cycle caveat this does
/// not handle).
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square,
/// [`PalmaError::IndexOutOfBounds`] if `src >= a.rows()`, or
/// [`PalmaError::InvalidDimensions`] if `out.len() != a.rows()`.
pub fn single_source_paths(a: &DenseMatrix<'_>, src: usize, out: &mut [Scalar]) -> Result<()> {
    if a.rows() != a.cols() {
        return Err(PalmaError::NotSquare { rows: a.rows(), cols: a.cols() });
    }
    if src >= a.rows() {
        return Err(PalmaError::IndexOutOfBounds { row: src, col: 0, rows: a.rows(), cols: a.cols() });
    }
    if out.len() != a.rows() {
        return Err(PalmaError::InvalidDimensions("out.len() must equal a.rows()"));
    }
    let s = a.semiring();
    out.fill(s.zero());
    out[src] = s.one();
    crate::algebra::iterate_dense(a, out, a.rows())
}

#[cfg(test)]
mod tests {
    use super::{all_pairs_paths, bottleneck_paths, closure, reachability};
    use crate::matrix::DenseMatrix;
    use crate::scalar::{NEG_INF, POS_INF};
    use crate::semiring::SemiringKind;

    #[test]
    fn closure_is_idempotent() {
        let s = SemiringKind::MinPlus;
        let mut m = DenseMatrix::create_zero(3, 3, s).unwrap();
        m.set(0, 1, 2);
        m.set(1, 2, 3);
        let once = closure(&m).unwrap();
        let twice = closure(&once).unwrap();
        for (i, j, v) in once.iter() {
            assert_eq!(twice.get(i, j), v);
        }
    }

    #[test]
    fn scenario_a_min_plus_shortest_paths() {
        let s = SemiringKind::MinPlus;
        let mut m = DenseMatrix::create_zero(4, 4, s).unwrap();
        for i in 0..4 {
            m.set(i, i, 0);
        }
        m.set(0, 1, 5);
        m.set(1, 2, 3);
        m.set(2, 3, 2);
        let star = all_pairs_paths(&m).unwrap();
        assert_eq!(star.get(0, 3), 10);
        assert_eq!(star.get(3, 0), POS_INF);
    }

    #[test]
    fn scenario_e_bottleneck_paths() {
        let s = SemiringKind::MaxMin;
        let mut m = DenseMatrix::create_zero(3, 3, s).unwrap();
        for i in 0..3 {
            m.set(i, i, POS_INF);
        }
        m.set(0, 1, 100);
        m.set(1, 0, 100);
        m.set(1, 2, 20);
        m.set(2, 1, 20);
        m.set(0, 2, NEG_INF);
        m.set(2, 0, NEG_INF);
        let star = bottleneck_paths(&m).unwrap();
        assert_eq!(star.get(0, 2), 20);
    }

    #[test]
    fn scenario_f_reachability_is_upper_triangular_with_diagonal() {
        let s = SemiringKind::Boolean;
        let mut m = DenseMatrix::create_zero(4, 4, s).unwrap();
        m.set(0, 1, 1);
        m.set(1, 2, 1);
        m.set(2, 3, 1);
        let reach = reachability(&m).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                let expected = i <= j;
                assert_eq!(reach.get(i, j) != 0, expected, "mismatch at ({i},{j})");
            }
        }
    }
}
