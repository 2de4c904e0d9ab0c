//! Compile-time capability abstraction over the five semirings.
//!
//! spec.md §9 recommends a "closed sum of semiring kinds ... resolved at
//! compile time for hot paths" alongside the tag-dispatched fallback in
//! the parent module. This submodule is that closed sum: a zero-sized
//! marker type per semiring, each monomorphising [`Semiring::add`] and
//! [`Semiring::mul`] away from the runtime `match` in [`SemiringKind`].
//! Every marker simply forwards to [`SemiringKind`] so the two paths can
//! never disagree.

use crate::scalar::Scalar;
use crate::semiring::SemiringKind;

/// A semiring known at compile time.
///
/// Implemented by the five zero-sized marker types in this module. See
/// the module-level documentation for why this exists alongside
/// [`SemiringKind`].
pub trait Semiring: Copy + Default {
    /// The runtime tag equivalent to this compile-time marker.
    const KIND: SemiringKind;

    /// Returns the additive identity ε.
    #[inline]
    #[must_use]
    fn zero() -> Scalar {
        Self::KIND.zero()
    }

    /// Returns the multiplicative identity e.
    #[inline]
    #[must_use]
    fn one() -> Scalar {
        Self::KIND.one()
    }

    /// Computes `a ⊕ b`.
    #[inline]
    #[must_use]
    fn add(a: Scalar, b: Scalar) -> Scalar {
        Self::KIND.add(a, b)
    }

    /// Computes `a ⊗ b`.
    #[inline]
    #[must_use]
    fn mul(a: Scalar, b: Scalar) -> Scalar {
        Self::KIND.mul(a, b)
    }

    /// Returns whether `a` is the additive identity.
    #[inline]
    #[must_use]
    fn is_zero(a: Scalar) -> bool {
        Self::KIND.is_zero(a)
    }

    /// Returns the human-readable name of this semiring.
    #[inline]
    #[must_use]
    fn name() -> &'static str {
        Self::KIND.name()
    }
}

macro_rules! marker_semiring {
    ($name:ident, $kind:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Semiring for $name {
            const KIND: SemiringKind = $kind;
        }
    };
}

marker_semiring!(MaxPlus, SemiringKind::MaxPlus, "The `(max,+)` semiring.");
marker_semiring!(MinPlus, SemiringKind::MinPlus, "The `(min,+)` semiring.");
marker_semiring!(MaxMin, SemiringKind::MaxMin, "The `(max,min)` semiring.");
marker_semiring!(MinMax, SemiringKind::MinMax, "The `(min,max)` semiring.");
marker_semiring!(
    BooleanSemiring,
    SemiringKind::Boolean,
    "The Boolean `(OR,AND)` semiring."
);
