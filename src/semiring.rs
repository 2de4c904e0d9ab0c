//! Submodule defining the semiring kernel.
//!
//! Every numeric operation in this crate is parameterised by a semiring:
//! a pair of operations `(⊕, ⊗)` with identities `(ε, e)` such that `⊗`
//! distributes over `⊕`. Five semirings are supported, matching the
//! tropical and Boolean interpretations this crate exists to unify.

mod generic;

pub use generic::{BooleanSemiring, MaxMin, MaxPlus, MinMax, MinPlus, Semiring};

use crate::scalar::{NEG_INF, POS_INF, Scalar, saturating_tropical_add};

/// Tag identifying one of the five supported semirings.
///
/// This is the runtime-selected counterpart to the compile-time marker
/// types in [`generic`]; both paths share the same arithmetic so that a
/// caller who picks a semiring at runtime (because it came from a file or
/// a CLI flag) gets bit-identical results to one who monomorphises over
/// [`Semiring`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemiringKind {
    /// `(⊕, ⊗) = (max, +)`. ε = -∞, e = 0. Longest paths, boot schedules.
    MaxPlus,
    /// `(⊕, ⊗) = (min, +)`. ε = +∞, e = 0. Shortest paths.
    MinPlus,
    /// `(⊕, ⊗) = (max, min)`. ε = -∞, e = +∞. Bottleneck/bandwidth paths.
    MaxMin,
    /// `(⊕, ⊗) = (min, max)`. ε = +∞, e = -∞. Minimax paths.
    MinMax,
    /// `(⊕, ⊗) = (OR, AND)`. ε = 0 (false), e = 1 (true). Reachability.
    Boolean,
}

impl SemiringKind {
    /// Returns the additive identity ε of this semiring.
    #[inline]
    #[must_use]
    pub const fn zero(self) -> Scalar {
        match self {
            SemiringKind::MaxPlus | SemiringKind::MaxMin => NEG_INF,
            SemiringKind::MinPlus | SemiringKind::MinMax => POS_INF,
            SemiringKind::Boolean => 0,
        }
    }

    /// Returns the multiplicative identity e of this semiring.
    #[inline]
    #[must_use]
    pub const fn one(self) -> Scalar {
        match self {
            SemiringKind::MaxPlus | SemiringKind::MinPlus => 0,
            SemiringKind::MaxMin => POS_INF,
            SemiringKind::MinMax => NEG_INF,
            SemiringKind::Boolean => 1,
        }
    }

    /// Computes `a ⊕ b`.
    #[inline]
    #[must_use]
    pub fn add(self, a: Scalar, b: Scalar) -> Scalar {
        match self {
            SemiringKind::MaxPlus | SemiringKind::MaxMin => a.max(b),
            SemiringKind::MinPlus | SemiringKind::MinMax => a.min(b),
            SemiringKind::Boolean => Scalar::from((a != 0) || (b != 0)),
        }
    }

    /// Computes `a ⊗ b`.
    ///
    /// For the additive-tropical semirings (`MaxPlus`, `MinPlus`) this is
    /// a saturating add that collapses to ε whenever either operand is ε,
    /// so that absorption still holds even at the boundary where a naive
    /// sum would otherwise overflow.
    #[inline]
    #[must_use]
    pub fn mul(self, a: Scalar, b: Scalar) -> Scalar {
        match self {
            SemiringKind::MaxPlus | SemiringKind::MinPlus => {
                let zero = self.zero();
                if a == zero || b == zero {
                    zero
                } else {
                    saturating_tropical_add(a, b)
                }
            }
            SemiringKind::MaxMin => a.min(b),
            SemiringKind::MinMax => a.max(b),
            SemiringKind::Boolean => Scalar::from((a != 0) && (b != 0)),
        }
    }

    /// Returns whether `a` is the additive identity of this semiring.
    #[inline]
    #[must_use]
    pub const fn is_zero(self, a: Scalar) -> bool {
        a == self.zero()
    }

    /// Returns whether this semiring is one of the additive-tropical pair
    /// `(max,+)`/`(min,+)`, the only semirings for which a cycle mean
    /// (and therefore an eigenvalue) is well defined.
    #[inline]
    #[must_use]
    pub const fn is_additive_tropical(self) -> bool {
        matches!(self, SemiringKind::MaxPlus | SemiringKind::MinPlus)
    }

    /// Returns the human-readable name of this semiring.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SemiringKind::MaxPlus => "max-plus",
            SemiringKind::MinPlus => "min-plus",
            SemiringKind::MaxMin => "max-min",
            SemiringKind::MinMax => "min-max",
            SemiringKind::Boolean => "boolean",
        }
    }
}

impl core::fmt::Display for SemiringKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for SemiringKind {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.int_in_range(0..=4)? {
            0 => SemiringKind::MaxPlus,
            1 => SemiringKind::MinPlus,
            2 => SemiringKind::MaxMin,
            3 => SemiringKind::MinMax,
            _ => SemiringKind::Boolean,
        })
    }
}
