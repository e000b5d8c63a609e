// ============================================================================
// Arithmetic Interface
// Operation contract shared by every bignum backend
// ============================================================================

use crate::decimal::BigDecimal;
use crate::integer::BigInteger;
use crate::numeric::{NumericError, NumericResult, RoundingMode};
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

/// Capability interface for a signed arbitrary-precision number.
///
/// The pure engine in this crate is one implementation; a backend that
/// wraps a host bignum facility is another. Code written against these
/// traits runs unchanged on either, which is what differential tests rely on.
pub trait Arithmetic:
    Clone + Eq + Hash + Display + FromStr<Err = NumericError> + Sized
{
    fn add(&self, other: &Self) -> Self;

    fn subtract(&self, other: &Self) -> Self;

    fn multiply(&self, other: &Self) -> Self;

    /// Backend-default division (truncating for integers, `max` scale with
    /// `HalfUp` for decimals)
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor
    fn divide(&self, other: &Self) -> NumericResult<Self>;

    fn abs(&self) -> Self;

    fn signum(&self) -> i32;

    fn negate(&self) -> Self;

    /// Numeric ordering (scale-insensitive for decimals)
    fn compare_to(&self, other: &Self) -> Ordering;
}

/// Integer-only operations.
pub trait IntegerArithmetic: Arithmetic {
    /// Remainder with the dividend's sign
    fn modulo(&self, other: &Self) -> NumericResult<Self>;

    /// Truncating quotient and remainder together
    fn div_rem(&self, other: &Self) -> NumericResult<(Self, Self)>;

    fn shift_left(&self, n: usize) -> Self;

    /// Arithmetic shift (floors for negative values)
    fn shift_right(&self, n: usize) -> Self;

    fn and(&self, other: &Self) -> Self;

    fn or(&self, other: &Self) -> Self;

    fn xor(&self, other: &Self) -> Self;

    fn and_not(&self, other: &Self) -> Self;

    fn not(&self) -> Self;

    fn pow(&self, exponent: u32) -> Self;

    fn test_bit(&self, n: usize) -> bool;

    /// # Errors
    /// `Overflow` outside the `i64` range
    fn to_i64(&self) -> NumericResult<i64>;
}

/// Decimal-only operations.
pub trait DecimalArithmetic: Arithmetic {
    /// Integer type produced by truncation
    type Integer: IntegerArithmetic;

    fn divide_with(&self, other: &Self, scale: u32, mode: RoundingMode) -> NumericResult<Self>;

    fn set_scale(&self, scale: u32, mode: RoundingMode) -> NumericResult<Self>;

    fn to_big_integer(&self) -> Self::Integer;

    fn scale(&self) -> u32;

    fn precision(&self) -> u32;
}

// ============================================================================
// Pure Engine Implementations
// ============================================================================

impl Arithmetic for BigInteger {
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn subtract(&self, other: &Self) -> Self {
        self - other
    }

    fn multiply(&self, other: &Self) -> Self {
        self * other
    }

    fn divide(&self, other: &Self) -> NumericResult<Self> {
        self.checked_div(other)
    }

    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn signum(&self) -> i32 {
        BigInteger::signum(self)
    }

    fn negate(&self) -> Self {
        BigInteger::negate(self)
    }

    fn compare_to(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl IntegerArithmetic for BigInteger {
    fn modulo(&self, other: &Self) -> NumericResult<Self> {
        self.checked_rem(other)
    }

    fn div_rem(&self, other: &Self) -> NumericResult<(Self, Self)> {
        BigInteger::div_rem(self, other)
    }

    fn shift_left(&self, n: usize) -> Self {
        BigInteger::shift_left(self, n)
    }

    fn shift_right(&self, n: usize) -> Self {
        BigInteger::shift_right(self, n)
    }

    fn and(&self, other: &Self) -> Self {
        BigInteger::and(self, other)
    }

    fn or(&self, other: &Self) -> Self {
        BigInteger::or(self, other)
    }

    fn xor(&self, other: &Self) -> Self {
        BigInteger::xor(self, other)
    }

    fn and_not(&self, other: &Self) -> Self {
        BigInteger::and_not(self, other)
    }

    fn not(&self) -> Self {
        BigInteger::not(self)
    }

    fn pow(&self, exponent: u32) -> Self {
        BigInteger::pow(self, exponent)
    }

    fn test_bit(&self, n: usize) -> bool {
        BigInteger::test_bit(self, n)
    }

    fn to_i64(&self) -> NumericResult<i64> {
        BigInteger::to_i64(self)
    }
}

impl Arithmetic for BigDecimal {
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn subtract(&self, other: &Self) -> Self {
        self - other
    }

    fn multiply(&self, other: &Self) -> Self {
        self * other
    }

    fn divide(&self, other: &Self) -> NumericResult<Self> {
        BigDecimal::divide(self, other)
    }

    fn abs(&self) -> Self {
        BigDecimal::abs(self)
    }

    fn signum(&self) -> i32 {
        BigDecimal::signum(self)
    }

    fn negate(&self) -> Self {
        BigDecimal::negate(self)
    }

    fn compare_to(&self, other: &Self) -> Ordering {
        BigDecimal::compare_to(self, other)
    }
}

impl DecimalArithmetic for BigDecimal {
    type Integer = BigInteger;

    fn divide_with(&self, other: &Self, scale: u32, mode: RoundingMode) -> NumericResult<Self> {
        BigDecimal::divide_with(self, other, scale, mode)
    }

    fn set_scale(&self, scale: u32, mode: RoundingMode) -> NumericResult<Self> {
        BigDecimal::set_scale(self, scale, mode)
    }

    fn to_big_integer(&self) -> BigInteger {
        BigDecimal::to_big_integer(self)
    }

    fn scale(&self) -> u32 {
        BigDecimal::scale(self)
    }

    fn precision(&self) -> u32 {
        BigDecimal::precision(self)
    }
}
