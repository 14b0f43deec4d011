//! Monomorphic fast paths for the sparsity-aware distances.
//!
//! The generic functions in [`crate::vectors`] monomorphize to the same
//! loops; these concrete entry points exist for callers that need a plain
//! `fn(&[f64], &[f64]) -> f64` to hand to a neighbor index as a function
//! pointer. Results are identical to the generic functions.
#![allow(clippy::cast_precision_loss, clippy::float_cmp)]

/// A macro to implement the concrete kernels for a float type.
macro_rules! impl_kernels {
    ($ty:ty, $dist:ident, $dist2:ident) => {
        /// Computes the sparsity-aware distance between two vectors, with
        /// `NaN` as the missing-vote sentinel.
        ///
        /// Concrete counterpart of [`crate::vectors::sparsity_aware_dist`].
        #[must_use]
        pub fn $dist(x: &[$ty], y: &[$ty]) -> $ty {
            let mut n_both_seen = 0_u64;
            let mut n_agree = 0_u64;
            for (&a, &b) in x.iter().zip(y.iter()) {
                n_both_seen += u64::from(!(a.is_nan() || b.is_nan()));
                n_agree += u64::from(a == b);
            }
            (n_both_seen - n_agree + 1) as $ty / (n_both_seen + 2) as $ty
        }

        /// Computes the sparsity-aware distance between two vectors, with
        /// `0` as the missing-vote sentinel.
        ///
        /// Concrete counterpart of [`crate::vectors::sparsity_aware_dist2`].
        #[must_use]
        pub fn $dist2(x: &[$ty], y: &[$ty]) -> $ty {
            let mut n_both_seen = 0_u64;
            let mut n_agree = 0_u64;
            for (&a, &b) in x.iter().zip(y.iter()) {
                let definitive = a != 0.0 || b != 0.0;
                n_both_seen += u64::from(definitive);
                n_agree += u64::from(definitive && a == b);
            }
            (n_both_seen - n_agree + 1) as $ty / (n_both_seen + 1) as $ty
        }
    };
}

impl_kernels!(f32, sparsity_aware_dist_f32, sparsity_aware_dist2_f32);
impl_kernels!(f64, sparsity_aware_dist_f64, sparsity_aware_dist2_f64);
