//! Distance functions for sparsely-observed vectors.
//!
//! # Potentially unexpected behaviors
//! Computing these distances with vectors of differing dimensionality may
//! give unexpected results. Specifically, when one vector is shorter than the
//! other, elements in the longer vector past the end of the shorter vector
//! will be ignored.

mod sparsity;

pub use sparsity::{sparsity_aware_dist, sparsity_aware_dist2};
