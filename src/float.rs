//! Floating-point abstraction so the curtain can run in `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting the floating-point operations the solver needs.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the crate stays
/// `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Ceiling.
    fn ceil(self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// True unless the value is NaN or infinite.
    fn is_finite(self) -> bool;
    /// Convert from f32.
    fn from_f32(v: f32) -> Self;
    /// Convert from f64 (for constants and configuration, exact in f64).
    fn from_f64(v: f64) -> Self;
    /// Convert a grid coordinate into a float.
    fn from_usize(v: usize) -> Self;
    /// Truncating, saturating conversion to a count. Negative and NaN map to 0.
    fn to_usize(self) -> usize;

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn ceil(self) -> Self { libm::ceilf(self) }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn to_usize(self) -> usize { self as usize }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn ceil(self) -> Self { libm::ceil(self) }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_f64(v: f64) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn to_usize(self) -> usize { self as usize }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_usize_saturates_negative_and_nan() {
        assert_eq!(Float::to_usize(-3.5f32), 0);
        assert_eq!(Float::to_usize(f32::NAN), 0);
        assert_eq!(Float::to_usize(20.9f64), 20);
    }

    #[test]
    fn from_f64_is_exact_in_both_precisions() {
        assert_eq!(<f64 as Float>::from_f64(0.97), 0.97);
        assert_eq!(<f32 as Float>::from_f64(0.97), 0.97f32);
    }

    #[test]
    fn ceil_matches_grid_rounding() {
        assert_eq!(Float::ceil(300.0f32 / 15.0), 20.0);
        assert_eq!(Float::ceil(301.0f64 / 15.0), 21.0);
    }
}
