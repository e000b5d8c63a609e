// ============================================================================
// Integer Core
// Sign-magnitude arbitrary-precision integer
// ============================================================================
//
// This module provides:
// - BigInteger: immutable signed integer over little-endian u32 words
// - Schoolbook/Karatsuba multiplication (multiply.rs)
// - Single-word and Knuth Algorithm D division (division.rs)
// - Shifts and two's-complement bitwise logic (bits.rs)
// - Chunked decimal string I/O (parse.rs)
//
// Design principles:
// - Zero is exactly (signum 0, empty magnitude); every value is canonical
// - Operations never mutate their operands
// - Fallible operations return NumericResult; the `/` and `%` operators
//   panic on a zero divisor like the primitive integer operators

mod bits;
mod division;
mod magnitude;
mod multiply;
mod parse;

pub use multiply::KARATSUBA_THRESHOLD;

pub(crate) use parse::{parse_digit_run, parse_exponent, split_sign};

use crate::decimal::BigDecimal;
use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

/// Powers of ten that fit in one word.
const SMALL_POW10: [u32; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Arbitrary-precision signed integer.
///
/// Stored as a sign (`-1`, `0`, `+1`) and a magnitude of 32-bit words,
/// least significant first, with no most-significant zero word. Zero has
/// an empty magnitude, so derived equality and hashing are value-based.
///
/// # Example
/// ```
/// use bignum_engine::BigInteger;
///
/// let a: BigInteger = "123456789".parse().unwrap();
/// let b: BigInteger = "987654321".parse().unwrap();
/// assert_eq!((&a * &b).to_string(), "121932631112635269");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    signum: i8,
    mag: Vec<u32>,
}

impl BigInteger {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from a sign and an unnormalized magnitude.
    ///
    /// The sign is ignored for a zero magnitude; any nonzero `signum` other
    /// than negative is treated as positive.
    pub(crate) fn from_parts(signum: i8, mut mag: Vec<u32>) -> Self {
        magnitude::trim(&mut mag);
        if mag.is_empty() {
            return Self::zero();
        }
        Self {
            signum: if signum < 0 { -1 } else { 1 },
            mag,
        }
    }

    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        Self {
            signum: 0,
            mag: Vec::new(),
        }
    }

    /// One.
    pub fn one() -> Self {
        Self::from(1u32)
    }

    /// Two.
    pub fn two() -> Self {
        Self::from(2u32)
    }

    /// Ten.
    pub fn ten() -> Self {
        Self::from(10u32)
    }

    /// `10^n`.
    pub fn ten_pow(n: u32) -> Self {
        let chunks = n / 9;
        let rest = n % 9;
        let base = Self::from(parse::CHUNK_BASE).pow(chunks);
        &base * &Self::from(SMALL_POW10[rest as usize])
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// -1, 0 or 1.
    #[inline]
    pub const fn signum(&self) -> i32 {
        self.signum as i32
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.signum == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.signum > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.signum < 0
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.mag.first().map_or(true, |w| w & 1 == 0)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Little-endian magnitude words.
    #[inline]
    pub fn magnitude_words(&self) -> &[u32] {
        &self.mag
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            signum: self.signum.abs(),
            mag: self.mag.clone(),
        }
    }

    /// `-self`.
    pub fn negate(&self) -> Self {
        Self {
            signum: -self.signum,
            mag: self.mag.clone(),
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Signed addition over magnitudes.
    ///
    /// Same signs add magnitudes; differing signs subtract the smaller
    /// magnitude from the larger and take the larger operand's sign.
    fn add_signed(&self, other: &Self, other_signum: i8) -> Self {
        if other_signum == 0 {
            return self.clone();
        }
        if self.is_zero() {
            return Self {
                signum: other_signum,
                mag: other.mag.clone(),
            };
        }
        if self.signum == other_signum {
            return Self::from_parts(self.signum, magnitude::add(&self.mag, &other.mag));
        }
        match magnitude::cmp(&self.mag, &other.mag) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_parts(self.signum, magnitude::sub(&self.mag, &other.mag)),
            Ordering::Less => Self::from_parts(other_signum, magnitude::sub(&other.mag, &self.mag)),
        }
    }

    fn mul_signed(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::from_parts(self.signum * other.signum, multiply::mul(&self.mag, &other.mag))
    }

    /// Quotient and remainder, truncating toward zero.
    ///
    /// The quotient's sign is the product of the operand signs; the
    /// remainder takes the dividend's sign, so
    /// `self == q * divisor + r` always holds.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> NumericResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((Self::zero(), Self::zero()));
        }
        let (q, r) = division::div_rem(&self.mag, &divisor.mag);
        Ok((
            Self::from_parts(self.signum * divisor.signum, q),
            Self::from_parts(self.signum, r),
        ))
    }

    /// Quotient truncated toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> NumericResult<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder with the dividend's sign.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> NumericResult<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// `self^exponent` by binary exponentiation.
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exponent;
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Convert to `i64`.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is outside `i64`'s range.
    pub fn to_i64(&self) -> NumericResult<i64> {
        let wide = self.to_i128()?;
        i64::try_from(wide).map_err(|_| NumericError::Overflow)
    }

    /// Convert to `u64`.
    ///
    /// # Errors
    /// Returns `Overflow` for negative values or values above `u64::MAX`.
    pub fn to_u64(&self) -> NumericResult<u64> {
        if self.is_negative() {
            return Err(NumericError::Overflow);
        }
        let wide = magnitude::to_u128(&self.mag).ok_or(NumericError::Overflow)?;
        u64::try_from(wide).map_err(|_| NumericError::Overflow)
    }

    /// Convert to `i128`.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is outside `i128`'s range.
    pub fn to_i128(&self) -> NumericResult<i128> {
        let wide = magnitude::to_u128(&self.mag).ok_or(NumericError::Overflow)?;
        if self.is_negative() {
            // |i128::MIN| == 2^127 is representable only on the negative side
            if wide > i128::MAX as u128 + 1 {
                return Err(NumericError::Overflow);
            }
            Ok((wide as i128).wrapping_neg())
        } else {
            i128::try_from(wide).map_err(|_| NumericError::Overflow)
        }
    }

    /// Nearest `f64`, rounding half to even.
    ///
    /// Returns `±inf` beyond `f64`'s range.
    pub fn to_f64(&self) -> f64 {
        let bits = self.bit_length();
        if bits == 0 {
            return 0.0;
        }
        let shift = bits.saturating_sub(64);
        let (top, lost_bits) = bits::shr_mag(&self.mag, shift);
        let mut top = magnitude::to_u128(&top).unwrap_or(0);
        // Sticky bit: dropped low bits must still break a tie upward
        if lost_bits {
            top |= 1;
        }
        let top = top as f64;
        let exp = i32::try_from(shift).unwrap_or(i32::MAX);
        let value = top * 2f64.powi(exp);
        if self.is_negative() {
            -value
        } else {
            value
        }
    }

    /// This integer as a decimal with scale 0.
    pub fn to_big_decimal(&self) -> BigDecimal {
        BigDecimal::new(self.clone(), 0)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigInteger {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for BigInteger {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    /// Sign first, then magnitude length, then words from the top down.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum.cmp(&other.signum) {
            Ordering::Equal => {},
            unequal => return unequal,
        }
        let by_magnitude = magnitude::cmp(&self.mag, &other.mag);
        if self.signum < 0 {
            by_magnitude.reverse()
        } else {
            by_magnitude
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            #[inline]
            fn from(value: $t) -> Self {
                Self::from_parts(1, magnitude::from_u128(value as u128))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            #[inline]
            fn from(value: $t) -> Self {
                let signum = if value < 0 { -1 } else { 1 };
                Self::from_parts(signum, magnitude::from_u128(value.unsigned_abs() as u128))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<&BigInteger> for i64 {
    type Error = NumericError;

    fn try_from(value: &BigInteger) -> Result<Self, Self::Error> {
        value.to_i64()
    }
}

// ============================================================================
// Operators
// ============================================================================

// Every binary operator is implemented once for references and forwarded
// for the owned combinations.
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                $imp::$method(self, &rhs)
            }
        }
    };
}

impl Add<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: &BigInteger) -> BigInteger {
        self.add_signed(rhs, rhs.signum)
    }
}

impl Sub<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: &BigInteger) -> BigInteger {
        self.add_signed(rhs, -rhs.signum)
    }
}

impl Mul<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: &BigInteger) -> BigInteger {
        self.mul_signed(rhs)
    }
}

// Infallible Div/Rem for ergonomics (panics on zero - use checked_* in production)
impl Div<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: &BigInteger) -> BigInteger {
        self.checked_div(rhs).expect("BigInteger division by zero")
    }
}

impl Rem<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn rem(self, rhs: &BigInteger) -> BigInteger {
        self.checked_rem(rhs).expect("BigInteger remainder by zero")
    }
}

impl BitAnd<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn bitand(self, rhs: &BigInteger) -> BigInteger {
        BigInteger::and(self, rhs)
    }
}

impl BitOr<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn bitor(self, rhs: &BigInteger) -> BigInteger {
        BigInteger::or(self, rhs)
    }
}

impl BitXor<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn bitxor(self, rhs: &BigInteger) -> BigInteger {
        BigInteger::xor(self, rhs)
    }
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);
forward_binop!(BitAnd, bitand);
forward_binop!(BitOr, bitor);
forward_binop!(BitXor, bitxor);

impl Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(mut self) -> BigInteger {
        self.signum = -self.signum;
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.negate()
    }
}

impl Not for BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        BigInteger::not(&self)
    }
}

impl Not for &BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        BigInteger::not(self)
    }
}

impl Shl<usize> for &BigInteger {
    type Output = BigInteger;

    fn shl(self, n: usize) -> BigInteger {
        self.shift_left(n)
    }
}

impl Shl<usize> for BigInteger {
    type Output = BigInteger;

    fn shl(self, n: usize) -> BigInteger {
        self.shift_left(n)
    }
}

impl Shr<usize> for &BigInteger {
    type Output = BigInteger;

    fn shr(self, n: usize) -> BigInteger {
        self.shift_right(n)
    }
}

impl Shr<usize> for BigInteger {
    type Output = BigInteger;

    fn shr(self, n: usize) -> BigInteger {
        self.shift_right(n)
    }
}

impl std::iter::Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| &acc + &x)
    }
}

impl std::iter::Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| &acc * &x)
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BigInteger {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInteger {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
