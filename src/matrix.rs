//! Submodule providing the dense (C2) and sparse (C3) matrix engines.

#[cfg(feature = "arbitrary")]
mod arbitrary_impl;
pub mod dense;
pub mod sparse;

pub use dense::DenseMatrix;
pub use sparse::SparseMatrix;
