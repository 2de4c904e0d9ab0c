//! Submodule providing the spectral engine: Karp's
//! maximum-cycle-mean algorithm, power-iteration eigenvector solving,
//! and critical-node identification.

use alloc::vec;
use alloc::vec::Vec;

use bitvec::vec::BitVec;

use crate::algebra::matvec_dense;
use crate::errors::{PalmaError, Result};
use crate::matrix::DenseMatrix;
use crate::scalar::{NEG_INF, Scalar};

/// Power iteration runs at most this many steps unless the caller
/// supplies a non-zero `max_iter` of their own.
pub const DEFAULT_MAX_ITER: usize = 1000;

/// [`critical_nodes`] treats a cycle as critical when its mean is within
/// this much of λ.
pub const DEFAULT_TOLERANCE: Scalar = 1;

/// The result of [`eigenvector`]: the last iterate, and whether it was
/// reached by genuine convergence (`x == A⊗x`, normalised) rather than
/// exhausting the iteration budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EigenvectorResult {
    /// The computed (or last-iterate) eigenvector.
    pub vector: Vec<Scalar>,
    /// Whether the iteration converged before the budget ran out.
    pub converged: bool,
}

/// Computes the maximum cycle mean (tropical eigenvalue) of `a` via
/// Karp's algorithm.
///
/// Builds `D[0..=n][0..n]` with `D[0][v] = e` and `D[k][v] = ⊕_u
/// (D[k-1][u] ⊗ A[u,v])`, then takes
/// `λ = max_v { min_{k in [0,n)} (D[n][v] - D[k][v]) / (n - k) }`,
/// skipping any `(v, k)` pair where the relevant `D` entry is ε. If
/// every `D[n][v]` is ε the graph is acyclic and `λ = -∞` is returned.
///
/// Division truncates toward zero, matching ordinary Rust integer
/// division semantics.
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square, or
/// [`PalmaError::Unsupported`] if `a`'s semiring is not one of
/// `MaxPlus`/`MinPlus`: a cycle mean is not well defined for the other
/// three semirings.
pub fn eigenvalue(a: &DenseMatrix<'_>) -> Result<Scalar> {
    if a.rows() != a.cols() {
        return Err(PalmaError::NotSquare { rows: a.rows(), cols: a.cols() });
    }
    let semiring = a.semiring();
    if !semiring.is_additive_tropical() {
        return Err(PalmaError::Unsupported(
            "eigenvalue is only defined for the MaxPlus and MinPlus semirings",
        ));
    }
    let n = a.rows();

    let mut d: Vec<Vec<Scalar>> = vec![vec![semiring.zero(); n]; n + 1];
    d[0].fill(semiring.one());
    for k in 1..=n {
        for v in 0..n {
            let mut acc = semiring.zero();
            for u in 0..n {
                acc = semiring.add(acc, semiring.mul(d[k - 1][u], a.get(u, v)));
            }
            d[k][v] = acc;
        }
    }

    let mut lambda: Option<Scalar> = None;
    for v in 0..n {
        if semiring.is_zero(d[n][v]) {
            continue;
        }
        let mut inner_min: Option<i64> = None;
        for (k, row) in d.iter().enumerate().take(n) {
            if semiring.is_zero(row[v]) {
                continue;
            }
            let diff = i64::from(d[n][v]) - i64::from(row[v]);
            let denom = (n - k) as i64;
            let quotient = diff / denom;
            inner_min = Some(match inner_min {
                None => quotient,
                Some(m) => m.min(quotient),
            });
        }
        if let Some(m) = inner_min {
            lambda = Some(match lambda {
                None => m as Scalar,
                Some(l) => l.max(m as Scalar),
            });
        }
    }
    Ok(lambda.unwrap_or(NEG_INF))
}

/// Solves for an eigenvector of `a` by power iteration, given a
/// precomputed eigenvalue `lambda` (see [`eigenvalue`]).
///
/// Starts from the all-e vector and repeats `y ← A⊗x`, normalising `y`
/// by subtracting `lambda` from every non-ε component when `a`'s
/// semiring is additive-tropical, until `y == x` or `max_iter` steps
/// have elapsed (`max_iter == 0` uses [`DEFAULT_MAX_ITER`]).
///
/// If `lambda` is `-∞` (the acyclic case), there is no eigenvector to
/// find: this returns an all-ε vector, unconverged.
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square.
pub fn eigenvector(a: &DenseMatrix<'_>, lambda: Scalar, max_iter: usize) -> Result<EigenvectorResult> {
    if a.rows() != a.cols() {
        return Err(PalmaError::NotSquare { rows: a.rows(), cols: a.cols() });
    }
    let s = a.semiring();
    let n = a.rows();
    if lambda == NEG_INF {
        return Ok(EigenvectorResult { vector: vec![s.zero(); n], converged: false });
    }
    let max_iter = if max_iter == 0 { DEFAULT_MAX_ITER } else { max_iter };
    let mut x = vec![s.one(); n];
    let mut y = vec![s.zero(); n];
    for _ in 0..max_iter {
        matvec_dense(a, &x, &mut y)?;
        if s.is_additive_tropical() {
            for yi in &mut y {
                if !s.is_zero(*yi) {
                    *yi = (i64::from(*yi) - i64::from(lambda)) as Scalar;
                }
            }
        }
        if y == x {
            return Ok(EigenvectorResult { vector: x, converged: true });
        }
        x.copy_from_slice(&y);
    }
    Ok(EigenvectorResult { vector: x, converged: false })
}

/// Marks which nodes of `a` sit on a cycle whose mean is strictly above
/// `lambda - tol`. Only self-loops and 2-cycles are detected, a known
/// limitation: longer critical cycles are not reported.
///
/// A cycle's arcs are read against `a.semiring()`'s own ε: an absent
/// self-loop or 2-cycle arc never contributes, whichever of `MaxPlus`/
/// `MinPlus` the matrix is tagged with.
///
/// # Errors
///
/// Returns [`PalmaError::NotSquare`] if `a` is not square.
pub fn critical_nodes(a: &DenseMatrix<'_>, lambda: Scalar, tol: Scalar) -> Result<BitVec> {
    if a.rows() != a.cols() {
        return Err(PalmaError::NotSquare { rows: a.rows(), cols: a.cols() });
    }
    let n = a.rows();
    let mut critical: BitVec = BitVec::repeat(false, n);
    if lambda == NEG_INF {
        return Ok(critical);
    }
    let semiring = a.semiring();
    let threshold = i64::from(lambda) - i64::from(tol);

    for i in 0..n {
        let self_loop = a.get(i, i);
        if !semiring.is_zero(self_loop) && i64::from(self_loop) > threshold {
            critical.set(i, true);
        }
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let forward = a.get(i, j);
            let backward = a.get(j, i);
            if semiring.is_zero(forward) || semiring.is_zero(backward) {
                continue;
            }
            let mean = (i64::from(forward) + i64::from(backward)) / 2;
            if mean > threshold {
                critical.set(i, true);
                critical.set(j, true);
            }
        }
    }
    Ok(critical)
}
