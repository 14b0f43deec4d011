//! Smoothed disagreement rates over partially-observed vote vectors.

use crate::{number::Float, Number};

/// Computes the sparsity-aware distance between two vectors, with `NaN` as
/// the missing-vote sentinel.
///
/// A position is jointly observed iff neither vector holds `NaN` there. The
/// distance is the Laplace-smoothed disagreement rate over the jointly
/// observed positions:
///
/// `(n_both_seen - n_agree + 1) / (n_both_seen + 2)`
///
/// The smoothing keeps the result strictly inside `(0, 1)`, so downstream
/// neighbor searches never see a zero distance. Two vectors with no jointly
/// observed positions are at distance `1/2`. Equality is exact IEEE-754
/// comparison; callers with continuous-valued votes should quantize first.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors
///
/// # Arguments
///
/// * `x`: A slice of floats, with `NaN` marking missing votes.
/// * `y`: A slice of floats, with `NaN` marking missing votes.
///
/// # Examples
///
/// ```
/// use sparse_distances::vectors::sparsity_aware_dist;
///
/// let x: Vec<f64> = vec![1.0, f64::NAN, 2.0, 0.0];
/// let y: Vec<f64> = vec![1.0, 3.0, 2.0, 0.0];
///
/// let distance: f64 = sparsity_aware_dist(&x, &y);
///
/// assert!((distance - 0.2).abs() < f64::EPSILON);
/// ```
///
/// # References
///
/// * [UMAP: custom distance metrics](https://umap-learn.readthedocs.io/en/latest/parameters.html#metric)
pub fn sparsity_aware_dist<T: Float, U: Float>(x: &[T], y: &[T]) -> U {
    // Agreement is counted over the whole vector: NaN never compares equal,
    // so unobserved positions cannot agree and n_agree <= n_both_seen.
    let [n_both_seen, n_agree] = x
        .iter()
        .zip(y.iter())
        .fold([0_usize; 2], |[seen, agree], (&a, &b)| {
            [
                seen + <usize as From<bool>>::from(!(a.is_nan() || b.is_nan())),
                agree + <usize as From<bool>>::from(a == b),
            ]
        });
    U::from(n_both_seen - n_agree + 1) / U::from(n_both_seen + 2)
}

/// Computes the sparsity-aware distance between two vectors, with `0` as the
/// missing-vote sentinel.
///
/// A position is a definitive vote iff either vector holds a nonzero value
/// there. The distance is the smoothed disagreement rate over the definitive
/// votes:
///
/// `(n_both_seen - n_agree + 1) / (n_both_seen + 1)`
///
/// Unlike [`sparsity_aware_dist`], two vectors with no definitive votes are
/// at distance exactly `1`: no shared information is treated as maximal
/// dissimilarity rather than as neutral. The minimum attainable distance is
/// `1/(n_both_seen + 1)`, never exactly `0`.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors
///
/// # Arguments
///
/// * `x`: A slice of numbers, with `0` marking missing votes.
/// * `y`: A slice of numbers, with `0` marking missing votes.
///
/// # Examples
///
/// ```
/// use sparse_distances::vectors::sparsity_aware_dist2;
///
/// let x: Vec<i32> = vec![0, 0, 1];
/// let y: Vec<i32> = vec![0, 0, 0];
///
/// let distance: f64 = sparsity_aware_dist2(&x, &y);
///
/// assert!((distance - 1.0).abs() < f64::EPSILON);
/// ```
///
/// # References
///
/// * [UMAP: custom distance metrics](https://umap-learn.readthedocs.io/en/latest/parameters.html#metric)
pub fn sparsity_aware_dist2<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let [n_both_seen, n_agree] = x
        .iter()
        .zip(y.iter())
        .fold([0_usize; 2], |[seen, agree], (&a, &b)| {
            let definitive = a != T::ZERO || b != T::ZERO;
            [
                seen + <usize as From<bool>>::from(definitive),
                agree + <usize as From<bool>>::from(definitive && a == b),
            ]
        });
    U::from(n_both_seen - n_agree + 1) / U::from(n_both_seen + 1)
}
