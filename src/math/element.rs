use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Num, NumCast, ToPrimitive};

/// Classification of an element type, deciding which scalings are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Unsigned,
    Signed,
    Real,
}

impl ElementKind {
    /// Only real elements accept fractional factors and division.
    pub fn is_divisible(self) -> bool {
        matches!(self, ElementKind::Real)
    }
}

/// Numeric types a `Vector` or `Matrix` can hold: `u32`, `i32` and `f64`.
pub trait Element:
    Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + PartialOrd
    + Num
    + NumCast
    + ToPrimitive
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    const KIND: ElementKind;

    /// Absolute difference, computed in `f64` so unsigned values cannot underflow.
    #[inline]
    fn abs_diff_f64(self, other: Self) -> f64 {
        let a = self.to_f64().unwrap_or(f64::NAN);
        let b = other.to_f64().unwrap_or(f64::NAN);
        (a - b).abs()
    }
}

impl Element for u32 {
    const KIND: ElementKind = ElementKind::Unsigned;
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::Signed;
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Real;
}
