// ============================================================================
// Bit Operations
// Shifts and two's-complement bitwise logic over a sign-magnitude value
// ============================================================================
//
// Bitwise semantics follow infinite-precision two's complement. Negative
// operands are never materialized as complement arrays; instead each word
// index is projected lazily through `TwosComplementView`.

use super::magnitude::{self, trim, WORD_BITS};
use super::BigInteger;

/// Lazy per-word two's-complement projection of a sign-magnitude value.
struct TwosComplementView<'a> {
    negative: bool,
    mag: &'a [u32],
    /// Index of the lowest nonzero magnitude word (negative values only)
    first_nonzero: usize,
}

impl<'a> TwosComplementView<'a> {
    fn new(value: &'a BigInteger) -> Self {
        let first_nonzero = value.mag.iter().position(|&w| w != 0).unwrap_or(0);
        Self {
            negative: value.signum < 0,
            mag: &value.mag,
            first_nonzero,
        }
    }

    /// Word `index` of the infinite two's-complement bit pattern.
    #[inline]
    fn word(&self, index: usize) -> u32 {
        if !self.negative {
            return self.mag.get(index).copied().unwrap_or(0);
        }
        if index >= self.mag.len() {
            return u32::MAX;
        }
        match index.cmp(&self.first_nonzero) {
            std::cmp::Ordering::Less => 0,
            std::cmp::Ordering::Equal => self.mag[index].wrapping_neg(),
            std::cmp::Ordering::Greater => !self.mag[index],
        }
    }
}

impl BigInteger {
    /// Combine two values word by word in two's complement, then convert
    /// the result back to sign-magnitude.
    fn bitwise(&self, other: &Self, op: impl Fn(u32, u32) -> u32) -> Self {
        let a = TwosComplementView::new(self);
        let b = TwosComplementView::new(other);
        // One extra word carries the sign extension so that negating the
        // result below always has room for its final carry.
        let len = self.mag.len().max(other.mag.len()) + 1;

        let mut words: Vec<u32> = (0..len).map(|i| op(a.word(i), b.word(i))).collect();
        let sign_bits = op(
            if a.negative { u32::MAX } else { 0 },
            if b.negative { u32::MAX } else { 0 },
        );

        if sign_bits == 0 {
            return Self::from_parts(1, words);
        }

        // Infinite run of 1-bits: the result is negative, recover |result|
        let mut carry = 1u64;
        for word in words.iter_mut() {
            let sum = (!*word) as u64 + carry;
            *word = sum as u32;
            carry = sum >> 32;
        }
        Self::from_parts(-1, words)
    }

    /// Bitwise AND in two's complement.
    pub fn and(&self, other: &Self) -> Self {
        self.bitwise(other, |x, y| x & y)
    }

    /// Bitwise OR in two's complement.
    pub fn or(&self, other: &Self) -> Self {
        self.bitwise(other, |x, y| x | y)
    }

    /// Bitwise XOR in two's complement.
    pub fn xor(&self, other: &Self) -> Self {
        self.bitwise(other, |x, y| x ^ y)
    }

    /// `self & !other`.
    pub fn and_not(&self, other: &Self) -> Self {
        self.bitwise(other, |x, y| x & !y)
    }

    /// Bitwise complement, `-self - 1`.
    pub fn not(&self) -> Self {
        -(self + &BigInteger::one())
    }

    /// Whether bit `n` of the two's-complement form is set.
    ///
    /// Past the stored magnitude this is the sign extension, so negative
    /// values report `true`.
    pub fn test_bit(&self, n: usize) -> bool {
        let index = n / WORD_BITS;
        if index >= self.mag.len() {
            return self.signum < 0;
        }
        let word = TwosComplementView::new(self).word(index);
        (word >> (n % WORD_BITS)) & 1 == 1
    }

    /// Number of significant bits in the magnitude (0 for zero).
    pub fn bit_length(&self) -> usize {
        match self.mag.last() {
            None => 0,
            Some(&top) => {
                (self.mag.len() - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize)
            },
        }
    }

    /// Index of the lowest set bit, or `None` for zero.
    ///
    /// Identical for `x` and `-x`.
    pub fn lowest_set_bit(&self) -> Option<usize> {
        let index = self.mag.iter().position(|&w| w != 0)?;
        Some(index * WORD_BITS + self.mag[index].trailing_zeros() as usize)
    }

    /// `self × 2^n`.
    pub fn shift_left(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        Self::from_parts(self.signum, shl_mag(&self.mag, n))
    }

    /// `floor(self / 2^n)` (arithmetic shift).
    ///
    /// For negative values the result rounds toward negative infinity:
    /// `-M >> n == -(M >> n) - 1` whenever a dropped bit of `M` was set.
    pub fn shift_right(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        let (mut shifted, lost_bits) = shr_mag(&self.mag, n);
        if self.signum < 0 && lost_bits {
            shifted = magnitude::add(&shifted, &[1]);
        }
        Self::from_parts(self.signum, shifted)
    }
}

/// Left-shift a magnitude: whole words first, then the bit remainder.
pub(crate) fn shl_mag(mag: &[u32], n: usize) -> Vec<u32> {
    let words = n / WORD_BITS;
    let bits = (n % WORD_BITS) as u32;

    let mut out = vec![0u32; words];
    out.reserve(mag.len() + 1);
    if bits == 0 {
        out.extend_from_slice(mag);
    } else {
        let mut carry = 0u32;
        for &word in mag {
            out.push((word << bits) | carry);
            carry = word >> (32 - bits);
        }
        out.push(carry);
    }
    trim(&mut out);
    out
}

/// Right-shift a magnitude. Also reports whether any 1-bit was dropped.
pub(crate) fn shr_mag(mag: &[u32], n: usize) -> (Vec<u32>, bool) {
    let words = n / WORD_BITS;
    let bits = (n % WORD_BITS) as u32;
    if words >= mag.len() {
        return (Vec::new(), mag.iter().any(|&w| w != 0));
    }

    let mut lost = mag[..words].iter().any(|&w| w != 0);
    let kept = &mag[words..];
    let mut out = Vec::with_capacity(kept.len());
    if bits == 0 {
        out.extend_from_slice(kept);
    } else {
        lost |= kept[0] & ((1u32 << bits) - 1) != 0;
        for i in 0..kept.len() {
            let high = kept.get(i + 1).map_or(0, |&w| w << (32 - bits));
            out.push((kept[i] >> bits) | high);
        }
    }
    trim(&mut out);
    (out, lost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use proptest::prelude::*;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    fn oracle(v: &BigInteger) -> BigInt {
        v.to_string().parse().unwrap()
    }

    #[test]
    fn test_shift_left() {
        assert_eq!(big("1").shift_left(64).to_string(), "18446744073709551616");
        assert_eq!(big("-3").shift_left(33).to_string(), "-25769803776");
        assert_eq!(BigInteger::zero().shift_left(100), BigInteger::zero());
    }

    #[test]
    fn test_shift_right_positive_truncates() {
        assert_eq!(big("18446744073709551617").shift_right(64), BigInteger::one());
        assert_eq!(big("7").shift_right(1), BigInteger::from(3));
        assert_eq!(big("7").shift_right(500), BigInteger::zero());
    }

    #[test]
    fn test_shift_right_negative_floors() {
        assert_eq!(big("-7").shift_right(1), BigInteger::from(-4));
        assert_eq!(big("-8").shift_right(1), BigInteger::from(-4));
        assert_eq!(big("-1").shift_right(10), BigInteger::from(-1));
        assert_eq!(big("-18446744073709551616").shift_right(64), BigInteger::from(-1));
        assert_eq!(big("-18446744073709551617").shift_right(64), BigInteger::from(-2));
        assert_eq!(big("-5").shift_right(1000), BigInteger::from(-1));
    }

    #[test]
    fn test_bitwise_small_values_match_i64() {
        let values = [0i64, 1, -1, 5, -5, 12, -12, 255, -256, i64::MAX, i64::MIN + 1];
        for &x in &values {
            for &y in &values {
                let (bx, by) = (BigInteger::from(x), BigInteger::from(y));
                assert_eq!(bx.and(&by), BigInteger::from(x & y), "{x} & {y}");
                assert_eq!(bx.or(&by), BigInteger::from(x | y), "{x} | {y}");
                assert_eq!(bx.xor(&by), BigInteger::from(x ^ y), "{x} ^ {y}");
                assert_eq!(bx.and_not(&by), BigInteger::from(x & !y), "{x} &! {y}");
            }
            assert_eq!(BigInteger::from(x).not(), BigInteger::from(!x));
        }
    }

    #[test]
    fn test_negative_result_needs_extra_word() {
        // -2^32 & -1 == -2^32, the complement carries into a new word
        let a = big("-4294967296");
        assert_eq!(a.and(&big("-1")), a);
        let b = big("-18446744073709551616");
        assert_eq!(b.or(&b), b);
    }

    #[test]
    fn test_test_bit() {
        let five = BigInteger::from(5);
        assert!(five.test_bit(0));
        assert!(!five.test_bit(1));
        assert!(five.test_bit(2));
        assert!(!five.test_bit(300));

        let minus_two = BigInteger::from(-2);
        assert!(!minus_two.test_bit(0));
        assert!(minus_two.test_bit(1));
        assert!(minus_two.test_bit(1000));
    }

    #[test]
    fn test_bit_length_and_lowest_set_bit() {
        assert_eq!(BigInteger::zero().bit_length(), 0);
        assert_eq!(BigInteger::from(255).bit_length(), 8);
        assert_eq!(big("4294967296").bit_length(), 33);
        assert_eq!(BigInteger::zero().lowest_set_bit(), None);
        assert_eq!(BigInteger::from(-40).lowest_set_bit(), Some(3));
        assert_eq!(big("18446744073709551616").lowest_set_bit(), Some(64));
    }

    fn signed_words() -> impl Strategy<Value = BigInteger> {
        (prop::collection::vec(any::<u32>(), 0..6), any::<bool>())
            .prop_map(|(mag, negative)| BigInteger::from_parts(if negative { -1 } else { 1 }, mag))
    }

    proptest! {
        #[test]
        fn prop_bitwise_matches_reference(a in signed_words(), b in signed_words()) {
            let (ra, rb) = (oracle(&a), oracle(&b));
            prop_assert_eq!(oracle(&a.and(&b)), &ra & &rb);
            prop_assert_eq!(oracle(&a.or(&b)), &ra | &rb);
            prop_assert_eq!(oracle(&a.xor(&b)), &ra ^ &rb);
            prop_assert_eq!(oracle(&a.and_not(&b)), &ra & &(!&rb));
            prop_assert_eq!(oracle(&a.not()), !&ra);
        }

        #[test]
        fn prop_shifts_match_reference(a in signed_words(), n in 0usize..200) {
            let ra = oracle(&a);
            prop_assert_eq!(oracle(&a.shift_left(n)), &ra << n);
            prop_assert_eq!(oracle(&a.shift_right(n)), &ra >> n);
        }

        #[test]
        fn prop_test_bit_matches_reference(a in signed_words(), n in 0u64..250) {
            prop_assert_eq!(a.test_bit(n as usize), oracle(&a).bit(n));
        }
    }
}
