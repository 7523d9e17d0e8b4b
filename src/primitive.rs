//! The primitive kinds the collections are specialized for.
//!
//! One generic engine stands in for every int/long/double/char variant.
//! A kind only has to say how to compare itself exactly, how to hash that
//! exact identity, and how to order itself totally.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// A primitive value kind storable in the crate's collections.
///
/// Equality is exact: floats compare by bit pattern, so `0.0` and `-0.0`
/// differ and a NaN equals an identical NaN. Tolerance comparisons live on
/// [`Precise`] and are never used implicitly.
pub trait Primitive: Copy + Default + Debug + Display + 'static {
    /// Exact identity of a value, usable as a hash key.
    type Bits: Copy + Eq + Hash + Ord + Debug;

    fn to_bits(self) -> Self::Bits;

    /// Total order used by `sort` and `binary_search`.
    fn total_cmp(&self, other: &Self) -> Ordering;

    #[inline]
    fn exact_eq(self, other: Self) -> bool {
        return self.to_bits() == other.to_bits();
    }
}

/// Kinds that support "equal within precision" comparisons.
pub trait Precise: Primitive {
    /// True if `self` and `other` differ by at most `precision`.
    fn within(self, other: Self, precision: Self) -> bool;
}

/// Kinds with discrete successors, used by ranges.
pub trait Discrete: Primitive {
    /// The next value up, or `None` at the top of the domain.
    fn forward(self) -> Option<Self>;
    /// The next value down, or `None` at the bottom of the domain.
    fn backward(self) -> Option<Self>;
}

/// Kinds with a numeric value that convert between one another with `as`
/// semantics.
pub trait Numeric: Primitive {
    fn to_i32(self) -> i32;
    fn to_i64(self) -> i64;
    fn to_f64(self) -> f64;
}

macro_rules! numeric {
    ($($ty:ty),*) => {$(
        impl Numeric for $ty {
            #[inline]
            fn to_i32(self) -> i32 {
                return self as i32;
            }

            #[inline]
            fn to_i64(self) -> i64 {
                return self as i64;
            }

            #[inline]
            fn to_f64(self) -> f64 {
                return self as f64;
            }
        }
    )*};
}

numeric!(i32, i64, f64);

/// Nearest integer, with halves going up towards positive infinity. NaN and
/// the infinities pass through.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        return floor + 1.0;
    }
    return floor;
}

macro_rules! integral {
    ($($ty:ty),*) => {$(
        impl Primitive for $ty {
            type Bits = $ty;

            #[inline]
            fn to_bits(self) -> $ty {
                return self;
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                return self.cmp(other);
            }
        }

        impl Discrete for $ty {
            #[inline]
            fn forward(self) -> Option<Self> {
                return self.checked_add(1);
            }

            #[inline]
            fn backward(self) -> Option<Self> {
                return self.checked_sub(1);
            }
        }
    )*};
}

integral!(i32, i64);

impl Primitive for f64 {
    type Bits = u64;

    #[inline]
    fn to_bits(self) -> u64 {
        return f64::to_bits(self);
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        return f64::total_cmp(self, other);
    }
}

impl Precise for f64 {
    #[inline]
    fn within(self, other: Self, precision: Self) -> bool {
        return (self - other).abs() <= precision;
    }
}

impl Primitive for char {
    type Bits = char;

    #[inline]
    fn to_bits(self) -> char {
        return self;
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        return self.cmp(other);
    }
}

// Surrogates are not chars, so stepping jumps across that gap.
const SURROGATE_LOW: u32 = 0xD800;
const SURROGATE_HIGH: u32 = 0xDFFF;

impl Discrete for char {
    fn forward(self) -> Option<Self> {
        let next = self as u32 + 1;
        if next == SURROGATE_LOW {
            return char::from_u32(SURROGATE_HIGH + 1);
        }
        return char::from_u32(next);
    }

    fn backward(self) -> Option<Self> {
        let code = self as u32;
        if code == 0 {
            return None;
        }
        if code == SURROGATE_HIGH + 1 {
            return char::from_u32(SURROGATE_LOW - 1);
        }
        return char::from_u32(code - 1);
    }
}
