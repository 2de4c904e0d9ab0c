//! Submodule defining the error taxonomy and failure model.

#[cfg(feature = "std")]
mod last_error;

#[cfg(feature = "std")]
pub use last_error::{clear_last_error, last_error, set_last_error};

/// The single enumerated error kind every fallible operation in this
/// crate reports, per spec.md §4.9.
///
/// Pure computations that return a value by an out-parameter (the
/// in-place algebra operations of C4) report this directly. Constructors
/// and other handle-returning operations instead return `None`/an
/// allocation failure and stash the kind in the thread-local
/// [`last_error`] slot (`std`-gated, see spec.md §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PalmaError {
    /// A required input handle was null/absent.
    #[error("null input")]
    NullInput,
    /// Dimensions were invalid for the requested operation (e.g. a
    /// dimension of zero, or mismatched operands for an element-wise op).
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(&'static str),
    /// The allocator could not satisfy a request.
    #[error("out of memory")]
    OutOfMemory,
    /// An argument was structurally valid but semantically unacceptable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// An operation that requires a square matrix was given a
    /// non-square one.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// The number of rows the operation was given.
        rows: usize,
        /// The number of columns the operation was given.
        cols: usize,
    },
    /// An iterative routine did not reach a fixed point within its
    /// iteration budget. Non-fatal: the last iterate is still valid
    /// output, per spec.md §7.
    #[error("did not converge within {max_iter} iterations")]
    NotConverged {
        /// The iteration budget that was exhausted.
        max_iter: usize,
    },
    /// A file could not be opened.
    #[error("failed to open file")]
    FileOpen,
    /// A file could not be read.
    #[error("failed to read file")]
    FileRead,
    /// A file could not be written.
    #[error("failed to write file")]
    FileWrite,
    /// A file's contents did not match the expected format.
    #[error("malformed file: {0}")]
    FileFormat(&'static str),
    /// An index was outside the valid range for the structure it
    /// addressed.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// The row index that was requested.
        row: usize,
        /// The column index that was requested.
        col: usize,
        /// The number of rows the structure actually has.
        rows: usize,
        /// The number of columns the structure actually has.
        cols: usize,
    },
    /// A sparse structure's CSR invariants were violated (out-of-order
    /// column indices, a malformed `row_ptr`, and so on).
    #[error("invalid sparse format: {0}")]
    InvalidSparseFormat(&'static str),
    /// The requested operation is not supported for the given semiring
    /// or configuration (e.g. `eigenvalue` on a non-tropical semiring).
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Convenience alias for `Result<T, PalmaError>`.
pub type Result<T> = core::result::Result<T, PalmaError>;
