//! A `Number` is a general numeric type.
//!
//! We calculate distances over collections of `Number`s.
//! Distance values are also represented as `Number`s.

use core::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// Collections of `Number`s can be used to calculate distances.
pub trait Number:
    Copy
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Debug
    + Display
    + Default
    + Add<Output = Self>
    + AddAssign<Self>
    + Sub<Output = Self>
    + SubAssign<Self>
    + Mul<Output = Self>
    + MulAssign<Self>
    + Div<Output = Self>
    + DivAssign<Self>
    + Sum<Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// The difference between `ONE` and the next largest representable number.
    const EPSILON: Self;

    /// Casts a number to `Self`. This may be a lossy conversion.
    fn from<T: Number>(n: T) -> Self;

    /// Returns the number as a `f32`. This may be a lossy conversion.
    fn as_f32(self) -> f32;

    /// Returns the number as a `f64`. This may be a lossy conversion.
    fn as_f64(self) -> f64;

    /// Returns the number as a `u64`. This may be a lossy conversion.
    fn as_u64(self) -> u64;

    /// Returns the number as an `i64`. This may be a lossy conversion.
    fn as_i64(self) -> i64;

    /// Returns a random `Number`.
    fn next_random<R: rand::Rng>(rng: &mut R) -> Self;

    /// Returns a total ordering of the number.
    fn total_cmp(&self, other: &Self) -> core::cmp::Ordering;
}

impl Number for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const EPSILON: Self = Self::EPSILON;

    fn from<T: Number>(n: T) -> Self {
        n.as_f32()
    }

    fn as_f32(self) -> f32 {
        self
    }

    #[allow(clippy::cast_lossless)]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn as_u64(self) -> u64 {
        self as u64
    }

    #[allow(clippy::cast_possible_truncation)]
    fn as_i64(self) -> i64 {
        self as i64
    }

    fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
        rng.gen()
    }

    fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.total_cmp(other)
    }
}

impl Number for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const EPSILON: Self = Self::EPSILON;

    fn from<T: Number>(n: T) -> Self {
        n.as_f64()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn as_f32(self) -> f32 {
        self as f32
    }

    fn as_f64(self) -> f64 {
        self
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn as_u64(self) -> u64 {
        self as u64
    }

    #[allow(clippy::cast_possible_truncation)]
    fn as_i64(self) -> i64 {
        self as i64
    }

    fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
        rng.gen()
    }

    fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.total_cmp(other)
    }
}

/// A macro to implement the `Number` trait for signed integer types.
macro_rules! impl_number_iint {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss, clippy::cast_lossless)]
            impl Number for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const EPSILON: Self = 1;

                fn from<T: Number>(n: T) -> Self {
                    n.as_i64() as $ty
                }

                fn as_f32(self) -> f32 {
                    self as f32
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn as_u64(self) -> u64 {
                    self as u64
                }

                fn as_i64(self) -> i64 {
                    self as i64
                }

                fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
                    rng.gen()
                }

                fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
                    self.cmp(other)
                }
            }
        )*
    }
}

impl_number_iint!(i8, i16, i32, i64, i128, isize);

/// A macro to implement the `Number` trait for unsigned integer types.
macro_rules! impl_number_uint {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_lossless, clippy::cast_precision_loss)]
            impl Number for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const EPSILON: Self = 1;

                fn from<T: Number>(n: T) -> Self {
                    n.as_u64() as $ty
                }

                fn as_f32(self) -> f32 {
                    self as f32
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn as_u64(self) -> u64 {
                    self as u64
                }

                #[allow(clippy::cast_possible_wrap)]
                fn as_i64(self) -> i64 {
                    self as i64
                }

                fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
                    rng.gen()
                }

                fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
                    self.cmp(other)
                }
            }
        )*
    }
}

impl_number_uint!(u8, u16, u32, u64, u128, usize);
