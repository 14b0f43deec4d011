//! Number variants for floating point types.

use core::ops::Neg;

use crate::Number;

/// Sub-trait of `Number` for all floating point types.
///
/// Floats are the only `Number`s that carry a `NaN`, which
/// [`crate::vectors::sparsity_aware_dist`] uses as its missing-vote sentinel.
pub trait Float: Number + Neg<Output = Self> {
    /// The not-a-number value.
    const NAN: Self;

    /// Returns `true` if this value is `NaN`.
    #[must_use]
    fn is_nan(self) -> bool;
}

impl Float for f32 {
    const NAN: Self = Self::NAN;

    fn is_nan(self) -> bool {
        Self::is_nan(self)
    }
}

impl Float for f64 {
    const NAN: Self = Self::NAN;

    fn is_nan(self) -> bool {
        Self::is_nan(self)
    }
}
