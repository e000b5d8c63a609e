// ============================================================================
// Decimal Core
// Scaled decimal built on BigInteger
// ============================================================================
//
// This module provides:
// - BigDecimal: unscaled BigInteger × 10^-scale with a non-negative scale
// - Scale alignment for addition, subtraction and comparison
// - Division at a caller-chosen scale under any RoundingMode
// - Conversions to and from primitives and rust_decimal::Decimal
//
// Design principles:
// - Equality and hashing are scale-sensitive: 1.50 != 1.5
// - compare_to is scale-insensitive: 1.50 compares equal to 1.5
// - Nothing here implements Ord, which would have to agree with Eq

mod parse;

use crate::config::MathConfig;
use crate::integer::BigInteger;
use crate::numeric::{NumericError, NumericResult, ParseIssue, RoundingMode};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Arbitrary-precision signed decimal.
///
/// Represents `unscaled × 10^(-scale)`. Every operation returns a new value.
///
/// # Example
/// ```
/// use bignum_engine::BigDecimal;
///
/// let a: BigDecimal = "123.45".parse().unwrap();
/// let b: BigDecimal = "67.89".parse().unwrap();
/// assert_eq!((&a + &b).to_string(), "191.34");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal {
    unscaled: BigInteger,
    scale: u32,
}

impl BigDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// `unscaled × 10^(-scale)`.
    #[inline]
    pub const fn new(unscaled: BigInteger, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(BigInteger::zero(), 0)
    }

    pub fn one() -> Self {
        Self::new(BigInteger::one(), 0)
    }

    pub fn ten() -> Self {
        Self::new(BigInteger::ten(), 0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn unscaled_value(&self) -> &BigInteger {
        &self.unscaled
    }

    /// Digits after the decimal point.
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Number of significant decimal digits in the unscaled value (1 for zero).
    pub fn precision(&self) -> u32 {
        if self.unscaled.is_zero() {
            return 1;
        }
        let digits = self.unscaled.abs().to_string().len();
        u32::try_from(digits).unwrap_or(u32::MAX)
    }

    #[inline]
    pub const fn signum(&self) -> i32 {
        self.unscaled.signum()
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.unscaled.is_positive()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self::new(self.unscaled.abs(), self.scale)
    }

    pub fn negate(&self) -> Self {
        Self::new(self.unscaled.negate(), self.scale)
    }

    // ========================================================================
    // Scale Alignment
    // ========================================================================

    /// Unscaled values of both operands at the larger of the two scales.
    fn aligned(&self, other: &Self) -> (BigInteger, BigInteger, u32) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.unscaled.clone(), other.unscaled.clone(), self.scale),
            Ordering::Greater => {
                let factor = BigInteger::ten_pow(self.scale - other.scale);
                (self.unscaled.clone(), &other.unscaled * &factor, self.scale)
            },
            Ordering::Less => {
                let factor = BigInteger::ten_pow(other.scale - self.scale);
                (&self.unscaled * &factor, other.unscaled.clone(), other.scale)
            },
        }
    }

    /// Numeric comparison that ignores scale: `1.50` equals `1.5` here.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.unscaled.cmp(&other.unscaled);
        }
        // Differing signs settle it without scaling
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {},
            unequal => return unequal,
        }
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }

    /// The numerically smaller value (`self` on a tie).
    pub fn min(&self, other: &Self) -> Self {
        if other.compare_to(self) == Ordering::Less {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// The numerically larger value (`self` on a tie).
    pub fn max(&self, other: &Self) -> Self {
        if other.compare_to(self) == Ordering::Greater {
            other.clone()
        } else {
            self.clone()
        }
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Divide at `max(self.scale, divisor.scale)` with `HalfUp`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn divide(&self, divisor: &Self) -> NumericResult<Self> {
        self.divide_with(divisor, self.scale.max(divisor.scale), RoundingMode::HalfUp)
    }

    /// Divide at `scale` with `HalfUp`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn divide_to_scale(&self, divisor: &Self, scale: u32) -> NumericResult<Self> {
        self.divide_with(divisor, scale, RoundingMode::HalfUp)
    }

    /// Divide using the configured default scale and rounding mode.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero, or `RoundingNecessary`
    /// when the configured mode is `Unnecessary` and the quotient is inexact.
    pub fn divide_in(&self, divisor: &Self, config: &MathConfig) -> NumericResult<Self> {
        self.divide_with(divisor, config.division_scale, config.rounding_mode)
    }

    /// Divide, producing exactly `scale` fractional digits.
    ///
    /// The unscaled quotient is `u / v` after lining both operands up so the
    /// integer quotient lands at `scale`: with
    /// `p = divisor.scale + scale - self.scale`, the dividend is multiplied
    /// by `10^p` when `p > 0` and the divisor by `10^-p` when `p < 0`. The
    /// truncated quotient is then rounded by comparing `2 × |remainder|`
    /// against `|v|`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero
    /// - `RoundingNecessary` if `mode` is `Unnecessary` and digits are lost
    /// - `Overflow` if the alignment power does not fit in `u32`
    pub fn divide_with(&self, divisor: &Self, scale: u32, mode: RoundingMode) -> NumericResult<Self> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let p = divisor.scale as i64 + scale as i64 - self.scale as i64;
        let power = u32::try_from(p.unsigned_abs()).map_err(|_| NumericError::Overflow)?;
        let (u, v) = match p.cmp(&0) {
            Ordering::Greater => (&self.unscaled * &BigInteger::ten_pow(power), divisor.unscaled.clone()),
            Ordering::Less => (self.unscaled.clone(), &divisor.unscaled * &BigInteger::ten_pow(power)),
            Ordering::Equal => (self.unscaled.clone(), divisor.unscaled.clone()),
        };

        let (q, r) = u.div_rem(&v)?;
        if r.is_zero() {
            return Ok(Self::new(q, scale));
        }

        let negative = u.signum() * v.signum() < 0;
        let half_cmp = r.abs().shift_left(1).cmp(&v.abs());
        let q = if mode.should_increment(&q, half_cmp, negative)? {
            if negative {
                &q - &BigInteger::one()
            } else {
                &q + &BigInteger::one()
            }
        } else {
            q
        };

        Ok(Self::new(q, scale))
    }

    /// Change the scale.
    ///
    /// Growing the scale pads the unscaled value with zeros and never
    /// rounds; shrinking it divides by one at the new scale under `mode`.
    ///
    /// # Errors
    /// Returns `RoundingNecessary` if `mode` is `Unnecessary` and a nonzero
    /// digit would be dropped.
    pub fn set_scale(&self, scale: u32, mode: RoundingMode) -> NumericResult<Self> {
        if scale >= self.scale {
            let padding = BigInteger::ten_pow(scale - self.scale);
            return Ok(Self::new(&self.unscaled * &padding, scale));
        }
        self.divide_with(&Self::one(), scale, mode)
    }

    /// Integer part, truncated toward zero.
    pub fn to_big_integer(&self) -> BigInteger {
        if self.scale == 0 {
            return self.unscaled.clone();
        }
        self.unscaled
            .checked_div(&BigInteger::ten_pow(self.scale))
            .expect("10^scale is nonzero")
    }

    // ========================================================================
    // Scale Manipulation
    // ========================================================================

    /// Remove fractional trailing zeros. The scale never goes below zero,
    /// so `"100"` stays `"100"` and zero becomes `"0"`.
    pub fn strip_trailing_zeros(&self) -> Self {
        if self.unscaled.is_zero() {
            return Self::zero();
        }
        let ten = BigInteger::ten();
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while scale > 0 {
            match unscaled.div_rem(&ten) {
                Ok((q, r)) if r.is_zero() => {
                    unscaled = q;
                    scale -= 1;
                },
                _ => break,
            }
        }
        Self::new(unscaled, scale)
    }

    /// `self × 10^-n`, exact.
    ///
    /// # Errors
    /// Returns `Overflow` if the resulting scale exceeds `u32::MAX`.
    pub fn move_point_left(&self, n: u32) -> NumericResult<Self> {
        let scale = self.scale.checked_add(n).ok_or(NumericError::Overflow)?;
        Ok(Self::new(self.unscaled.clone(), scale))
    }

    /// `self × 10^n`, exact. Consumes scale first, then appends zeros.
    pub fn move_point_right(&self, n: u32) -> Self {
        if n <= self.scale {
            return Self::new(self.unscaled.clone(), self.scale - n);
        }
        let zeros = BigInteger::ten_pow(n - self.scale);
        Self::new(&self.unscaled * &zeros, 0)
    }

    /// `self^exponent` by binary exponentiation; the scale multiplies.
    ///
    /// # Errors
    /// Returns `Overflow` if the resulting scale exceeds `u32::MAX`.
    pub fn pow(&self, exponent: u32) -> NumericResult<Self> {
        let scale = self.scale.checked_mul(exponent).ok_or(NumericError::Overflow)?;
        Ok(Self::new(self.unscaled.pow(exponent), scale))
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Convert to `rust_decimal::Decimal` without rounding.
    ///
    /// # Errors
    /// Returns `Overflow` if the unscaled value needs more than 96 bits or
    /// the scale exceeds 28.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let mantissa = self.unscaled.to_i128()?;
        Decimal::try_from_i128_with_scale(mantissa, self.scale).map_err(|_| NumericError::Overflow)
    }

    /// Nearest `f64`, via the plain decimal text.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigDecimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInteger> for BigDecimal {
    #[inline]
    fn from(value: BigInteger) -> Self {
        Self::new(value, 0)
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {$(
        impl From<$t> for BigDecimal {
            #[inline]
            fn from(value: $t) -> Self {
                Self::new(BigInteger::from(value), 0)
            }
        }
    )*};
}

impl_from_primitive!(i32, i64, i128, u32, u64, u128);

impl From<Decimal> for BigDecimal {
    fn from(value: Decimal) -> Self {
        Self::new(BigInteger::from(value.mantissa()), value.scale())
    }
}

impl TryFrom<f64> for BigDecimal {
    type Error = NumericError;

    /// Exact decimal of the shortest text that round-trips the float:
    /// `0.1` becomes `"0.1"`, not the binary expansion.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ParseIssue::NonFinite.into());
        }
        value.to_string().parse()
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: &BigDecimal) -> BigDecimal {
        let (a, b, scale) = self.aligned(rhs);
        BigDecimal::new(&a + &b, scale)
    }
}

impl Sub<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: &BigDecimal) -> BigDecimal {
        let (a, b, scale) = self.aligned(rhs);
        BigDecimal::new(&a - &b, scale)
    }
}

impl Mul<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: &BigDecimal) -> BigDecimal {
        let scale = self
            .scale
            .checked_add(rhs.scale)
            .expect("BigDecimal product scale overflows u32");
        BigDecimal::new(&self.unscaled * &rhs.unscaled, scale)
    }
}

// Infallible Div for ergonomics (scale 10, HalfUp; panics on zero - use divide_* in production)
impl Div<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn div(self, rhs: &BigDecimal) -> BigDecimal {
        let defaults = MathConfig::new();
        self.divide_in(rhs, &defaults).expect("BigDecimal division by zero")
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigDecimal> for BigDecimal {
            type Output = BigDecimal;

            #[inline]
            fn $method(self, rhs: BigDecimal) -> BigDecimal {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigDecimal> for BigDecimal {
            type Output = BigDecimal;

            #[inline]
            fn $method(self, rhs: &BigDecimal) -> BigDecimal {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigDecimal> for &BigDecimal {
            type Output = BigDecimal;

            #[inline]
            fn $method(self, rhs: BigDecimal) -> BigDecimal {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Neg for BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        BigDecimal::new(-self.unscaled, self.scale)
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        self.negate()
    }
}

impl std::iter::Sum for BigDecimal {
    fn sum<I: Iterator<Item = BigDecimal>>(iter: I) -> Self {
        iter.fold(BigDecimal::zero(), |acc, x| &acc + &x)
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BigDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigDecimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
