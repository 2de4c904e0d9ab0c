//! The thread-local last-error slot (spec.md §5, §7).
//!
//! This is the only ambient, process-wide state this crate carries. It
//! behaves as ordinary thread-local storage: each thread has its own
//! slot, initialised to "no error", written by every allocating
//! operation on failure and cleared by every allocating operation on
//! success.

use super::PalmaError;
use core::cell::Cell;

std::thread_local! {
    static LAST_ERROR: Cell<Option<PalmaError>> = const { Cell::new(None) };
}

/// Records `err` as the calling thread's last error.
pub fn set_last_error(err: PalmaError) {
    LAST_ERROR.with(|cell| cell.set(Some(err)));
}

/// Returns the calling thread's last error, if any is set.
#[must_use]
pub fn last_error() -> Option<PalmaError> {
    LAST_ERROR.with(Cell::get)
}

/// Clears the calling thread's last error. Every successful
/// allocation-returning operation does this.
pub fn clear_last_error() {
    LAST_ERROR.with(|cell| cell.set(None));
}
