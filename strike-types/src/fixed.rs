//! fixed-point numerical types

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 32-bit signed fixed point number with 6 bits of fraction.
///
/// This is the encoding used for positions and sizes in native strike
/// records: the nominal size of a strike in points, and its horizontal and
/// vertical pixels-per-em.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::AnyBitPattern))]
#[repr(transparent)]
pub struct F26Dot6(i32);

impl F26Dot6 {
    /// Minimum value.
    pub const MIN: Self = Self(i32::MIN);

    /// Maximum value.
    pub const MAX: Self = Self(i32::MAX);

    /// This type's smallest representable value
    pub const EPSILON: Self = Self(1);

    /// Representation of 0.0.
    pub const ZERO: Self = Self(0);

    /// Representation of 1.0.
    pub const ONE: Self = Self(Self::ONE_BITS);

    const INT_MASK: i32 = !0 << Self::FRACT_BITS;
    const ROUND: i32 = 1 << (Self::FRACT_BITS - 1);
    const ONE_BITS: i32 = 1 << Self::FRACT_BITS;
    const FRACT_BITS: u32 = 6;

    /// Creates a new fixed point value from the underlying bit representation.
    #[inline(always)]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Returns the underlying bit representation of the value.
    #[inline(always)]
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Creates a fixed point value from an integer.
    #[inline(always)]
    pub const fn from_i32(i: i32) -> Self {
        Self(i << Self::FRACT_BITS)
    }

    /// Returns the value rounded to the nearest integer.
    ///
    /// Halfway values round towards positive infinity, which matches the
    /// pixel rounding done by the native library.
    #[inline(always)]
    pub const fn to_i32(self) -> i32 {
        self.0.wrapping_add(Self::ROUND) >> Self::FRACT_BITS
    }

    /// Returns the nearest integer value.
    pub fn round(self) -> Self {
        Self(self.0.wrapping_add(Self::ROUND) & Self::INT_MASK)
    }

    /// Returns the absolute value of the number.
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the largest integer less than or equal to the number.
    pub fn floor(self) -> Self {
        Self(self.0 & Self::INT_MASK)
    }

    /// Returns the smallest integer greater than or equal to the number.
    pub fn ceil(self) -> Self {
        Self(self.0.wrapping_add(Self::ONE_BITS - 1) & Self::INT_MASK)
    }

    /// Returns the fractional part of the number.
    pub fn fract(self) -> Self {
        Self(self.0 - self.floor().0)
    }

    /// Wrapping addition.
    pub fn wrapping_add(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }

    /// Saturating addition.
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Wrapping substitution.
    pub fn wrapping_sub(self, other: Self) -> Self {
        Self(self.0.wrapping_sub(other.0))
    }

    /// Saturating substitution.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Creates a fixed point value from an f64.
    ///
    /// This operation is lossy; the float will be rounded to the nearest
    /// representable value.
    pub fn from_f64(x: f64) -> Self {
        #[cfg(any(feature = "std", test))]
        return Self((x * Self::ONE_BITS as f64).round() as _);
        // round half away from zero, which is what `f64::round` does
        #[cfg(all(not(feature = "std"), not(test)))]
        {
            let half = if x.is_sign_negative() { -0.5 } else { 0.5 };
            Self((x * Self::ONE_BITS as f64 + half) as _)
        }
    }

    /// Returns the value as an f64.
    ///
    /// This operation is lossless: all representable values can be
    /// round-tripped.
    pub fn to_f64(self) -> f64 {
        let int = ((self.0 & Self::INT_MASK) >> Self::FRACT_BITS) as f64;
        let fract = (self.0 & !Self::INT_MASK) as f64 / Self::ONE_BITS as f64;
        int + fract
    }

    /// Returns the value as an f32.
    ///
    /// Values with more than 24 significant bits lose precision.
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE_BITS as f32
    }
}

impl Add for F26Dot6 {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        // same overflow semantics as std: panic in debug, wrap in release
        Self(self.0 + other.0)
    }
}

impl AddAssign for F26Dot6 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for F26Dot6 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for F26Dot6 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for F26Dot6 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl crate::raw::Scalar for F26Dot6 {
    type Raw = [u8; 4];

    fn from_raw(raw: [u8; 4]) -> Self {
        Self(i32::from_ne_bytes(raw))
    }

    fn to_raw(self) -> [u8; 4] {
        self.0.to_ne_bytes()
    }
}

impl crate::raw::FixedSize for F26Dot6 {
    const RAW_BYTE_LEN: usize = 4;
}

//hack: we can losslessly go to float, so use those fmt impls
impl std::fmt::Display for F26Dot6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.to_f64().fmt(f)
    }
}

impl std::fmt::Debug for F26Dot6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.to_f64().fmt(f)
    }
}
