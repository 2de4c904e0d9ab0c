#![doc = include_str!("../README.md")]
#![cfg(feature = "alloc")]
extern crate alloc;

pub mod algebra;
pub mod closure;
pub mod errors;
pub mod graph;
pub mod matrix;
pub mod scalar;
pub mod scheduler;
pub mod semiring;
pub mod spectral;

/// Prelude module re-exporting the crate's most commonly used items.
pub mod prelude {
    pub use crate::algebra::{add_dense, dot, matmul_dense, matmul_sparse, matvec_dense, matvec_sparse};
    pub use crate::closure::{all_pairs_paths, bottleneck_paths, closure, reachability, single_source_paths};
    pub use crate::errors::{PalmaError, Result};
    pub use crate::matrix::{DenseMatrix, SparseMatrix};
    pub use crate::scalar::{NEG_INF, POS_INF, Scalar};
    pub use crate::scheduler::Scheduler;
    pub use crate::semiring::{BooleanSemiring, MaxMin, MaxPlus, MinMax, MinPlus, Semiring, SemiringKind};
    pub use crate::spectral::{EigenvectorResult, critical_nodes, eigenvalue, eigenvector};
}
