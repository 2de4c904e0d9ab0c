//! Submodule providing the dense matrix type.

use alloc::vec;
use alloc::vec::Vec;

use crate::errors::{PalmaError, Result};
use crate::scalar::Scalar;
use crate::semiring::SemiringKind;

/// Rows are padded to a multiple of this many elements, matching
/// spec.md §3's "row-stride ≥ cols with 4-element alignment" so that a
/// future SIMD acceleration (spec.md §5: "optional ... vector-instruction
/// variants") can assume rows start on a 16-byte boundary relative to
/// the buffer origin.
const ROW_ALIGNMENT: usize = 4;

#[inline]
#[must_use]
fn aligned_stride(cols: usize) -> usize {
    cols.div_ceil(ROW_ALIGNMENT) * ROW_ALIGNMENT
}

/// Backing storage for a [`DenseMatrix`]: either an owned buffer, or a
/// borrow of someone else's buffer.
///
/// `Borrowed` is how [`DenseMatrix::wrap`] expresses spec.md §4.2's
/// "non-owning view" requirement: dropping a `DenseMatrix` whose storage
/// is `Borrowed` simply drops the borrow, never the underlying memory.
enum Storage<'a> {
    Owned(Vec<Scalar>),
    Borrowed(&'a mut [Scalar]),
}

impl Storage<'_> {
    #[inline]
    fn as_slice(&self) -> &[Scalar] {
        match self {
            Storage::Owned(v) => v,
            Storage::Borrowed(s) => s,
        }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Scalar] {
        match self {
            Storage::Owned(v) => v,
            Storage::Borrowed(s) => s,
        }
    }
}

/// A row-major dense matrix over a fixed [`SemiringKind`].
///
/// Element `(i, j)` lives at `buffer[i * stride + j]`; `stride >= cols`
/// leaves room for row padding (see [`ROW_ALIGNMENT`]). A `DenseMatrix`
/// constructed with [`DenseMatrix::wrap`] does not own its buffer: it
/// borrows it for the lifetime `'a`, and dropping the matrix never frees
/// that buffer, matching spec.md §4.2's `destroy` contract.
pub struct DenseMatrix<'a> {
    rows: usize,
    cols: usize,
    stride: usize,
    semiring: SemiringKind,
    storage: Storage<'a>,
}

impl<'a> DenseMatrix<'a> {
    /// Allocates a matrix of `rows x cols` with unspecified contents.
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::InvalidDimensions`] if either dimension is
    /// zero.
    pub fn create(rows: usize, cols: usize, semiring: SemiringKind) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(PalmaError::InvalidDimensions("rows and cols must be non-zero"));
        }
        let stride = aligned_stride(cols);
        Ok(Self {
            rows,
            cols,
            stride,
            semiring,
            storage: Storage::Owned(vec![0; rows * stride]),
        })
    }

    /// Allocates a matrix of `rows x cols` filled with ε (the additive
    /// identity of `semiring`).
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::InvalidDimensions`] if either dimension is
    /// zero.
    pub fn create_zero(rows: usize, cols: usize, semiring: SemiringKind) -> Result<Self> {
        let mut m = Self::create(rows, cols, semiring)?;
        m.storage.as_mut_slice().fill(semiring.zero());
        Ok(m)
    }

    /// Allocates an `n x n` identity matrix: ε everywhere except the
    /// diagonal, which holds e.
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::InvalidDimensions`] if `n` is zero.
    pub fn create_identity(n: usize, semiring: SemiringKind) -> Result<Self> {
        let mut m = Self::create_zero(n, n, semiring)?;
        for i in 0..n {
            m.set(i, i, semiring.one());
        }
        Ok(m)
    }

    /// Wraps an externally owned buffer as a non-owning view.
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::InvalidDimensions`] if `stride < cols`, if
    /// either dimension is zero, or if `buffer` is too short for
    /// `rows * stride`.
    pub fn wrap(
        buffer: &'a mut [Scalar],
        rows: usize,
        cols: usize,
        stride: usize,
        semiring: SemiringKind,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 || stride < cols {
            return Err(PalmaError::InvalidDimensions(
                "rows, cols must be non-zero and stride must be >= cols",
            ));
        }
        if buffer.len() < rows * stride {
            return Err(PalmaError::InvalidDimensions("buffer too short for rows * stride"));
        }
        Ok(Self {
            rows,
            cols,
            stride,
            semiring,
            storage: Storage::Borrowed(buffer),
        })
    }

    /// Returns whether this matrix owns its backing buffer.
    #[must_use]
    pub const fn is_view(&self) -> bool {
        matches!(self.storage, Storage::Borrowed(_))
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the row stride.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the semiring this matrix is defined over.
    #[must_use]
    pub const fn semiring(&self) -> SemiringKind {
        self.semiring
    }

    /// Returns the element at `(i, j)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `i >= rows()` or `j >= cols()`.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Scalar {
        debug_assert!(i < self.rows && j < self.cols, "index out of bounds");
        self.storage.as_slice()[i * self.stride + j]
    }

    /// Sets the element at `(i, j)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, v: Scalar) {
        debug_assert!(i < self.rows && j < self.cols, "index out of bounds");
        self.storage.as_mut_slice()[i * self.stride + j] = v;
    }

    /// Returns the element at `(i, j)`, or an error if out of range.
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::IndexOutOfBounds`] if `i >= rows()` or
    /// `j >= cols()`.
    pub fn get_safe(&self, i: usize, j: usize) -> Result<Scalar> {
        self.check_bounds(i, j)?;
        Ok(self.get(i, j))
    }

    /// Sets the element at `(i, j)`, or returns an error if out of range.
    ///
    /// # Errors
    ///
    /// Returns [`PalmaError::IndexOutOfBounds`] if `i >= rows()` or
    /// `j >= cols()`.
    pub fn set_safe(&mut self, i: usize, j: usize, v: Scalar) -> Result<()> {
        self.check_bounds(i, j)?;
        self.set(i, j, v);
        Ok(())
    }

    fn check_bounds(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.rows || j >= self.cols {
            return Err(PalmaError::IndexOutOfBounds { row: i, col: j, rows: self.rows, cols: self.cols });
        }
        Ok(())
    }

    /// Returns an iterator over `(i, j, value)` for every stored element,
    /// row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Scalar)> + '_ {
        (0..self.rows).flat_map(move |i| (0..self.cols).map(move |j| (i, j, self.get(i, j))))
    }

    /// Deep-copies this matrix into a freshly owned buffer: the clone
    /// shares no storage with `self`, even if `self` is a view.
    #[must_use]
    pub fn to_owned_matrix(&self) -> DenseMatrix<'static> {
        DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            stride: self.stride,
            semiring: self.semiring,
            storage: Storage::Owned(self.storage.as_slice().to_vec()),
        }
    }
}

impl Clone for DenseMatrix<'static> {
    fn clone(&self) -> Self {
        self.to_owned_matrix()
    }
}

impl core::fmt::Debug for DenseMatrix<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DenseMatrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("stride", &self.stride)
            .field("semiring", &self.semiring)
            .field("is_view", &self.is_view())
            .finish()
    }
}

impl PartialEq for DenseMatrix<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.semiring == other.semiring
            && self.iter().eq(other.iter())
    }
}
