// ============================================================================
// Magnitude Helpers
// Word-level primitives over little-endian u32 slices
// ============================================================================
//
// A magnitude is a little-endian sequence of 32-bit words. Normalized
// magnitudes carry no most-significant zero word; intermediate buffers
// (Karatsuba halves, division windows) may, so every helper here accepts
// unnormalized input unless stated otherwise.

use std::cmp::Ordering;

/// Number of bits in one magnitude word.
pub(crate) const WORD_BITS: usize = 32;

/// Drop most-significant zero words.
#[inline]
pub(crate) fn trim(mag: &mut Vec<u32>) {
    while mag.last() == Some(&0) {
        mag.pop();
    }
}

/// Length of the slice once most-significant zero words are ignored.
#[inline]
pub(crate) fn significant_len(mag: &[u32]) -> usize {
    mag.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

/// Compare two magnitudes (leading zero words allowed).
pub(crate) fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    let a = &a[..significant_len(a)];
    let b = &b[..significant_len(b)];
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// `a + b` with 64-bit carry accumulation.
pub(crate) fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;

    for (i, &word) in long.iter().enumerate() {
        let sum = word as u64 + short.get(i).copied().unwrap_or(0) as u64 + carry;
        out.push(sum as u32);
        carry = sum >> 32;
    }
    if carry != 0 {
        out.push(carry as u32);
    }

    trim(&mut out);
    out
}

/// `a - b`, requires `a >= b`.
pub(crate) fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut out = a.to_vec();
    let underflow = sub_in_place(&mut out, b);
    debug_assert!(!underflow);
    trim(&mut out);
    out
}

/// `a -= b` in place. Returns `true` if the subtraction borrowed out of `a`.
pub(crate) fn sub_in_place(a: &mut [u32], b: &[u32]) -> bool {
    let mut borrow = 0u64;
    for (i, word) in a.iter_mut().enumerate() {
        let rhs = b.get(i).copied().unwrap_or(0) as u64;
        if i >= b.len() && borrow == 0 {
            break;
        }
        let diff = (*word as u64).wrapping_sub(rhs).wrapping_sub(borrow);
        *word = diff as u32;
        borrow = (diff >> 63) & 1;
    }
    borrow != 0
}

/// `acc[offset..] += b`. The buffer must be long enough to absorb the carry.
pub(crate) fn add_at(acc: &mut [u32], b: &[u32], offset: usize) {
    let mut carry = 0u64;
    for (i, &word) in b.iter().enumerate() {
        let sum = acc[offset + i] as u64 + word as u64 + carry;
        acc[offset + i] = sum as u32;
        carry = sum >> 32;
    }

    let mut idx = offset + b.len();
    while carry != 0 {
        let sum = acc[idx] as u64 + carry;
        acc[idx] = sum as u32;
        carry = sum >> 32;
        idx += 1;
    }
}

/// `mag = mag * factor + addend`, growing the magnitude when needed.
pub(crate) fn mul_add_word(mag: &mut Vec<u32>, factor: u32, addend: u32) {
    let mut carry = addend as u64;
    for word in mag.iter_mut() {
        let t = *word as u64 * factor as u64 + carry;
        *word = t as u32;
        carry = t >> 32;
    }
    if carry != 0 {
        mag.push(carry as u32);
    }
    trim(mag);
}

/// Divide in place by a single word, returning the remainder.
pub(crate) fn div_rem_word_in_place(mag: &mut Vec<u32>, divisor: u32) -> u32 {
    debug_assert!(divisor != 0);
    let divisor = divisor as u64;
    let mut rem = 0u64;
    for word in mag.iter_mut().rev() {
        let cur = (rem << 32) | *word as u64;
        *word = (cur / divisor) as u32;
        rem = cur % divisor;
    }
    trim(mag);
    rem as u32
}

/// Split a u128 into little-endian words without a trailing zero word.
pub(crate) fn from_u128(value: u128) -> Vec<u32> {
    let mut mag: Vec<u32> = (0..4).map(|i| (value >> (32 * i)) as u32).collect();
    trim(&mut mag);
    mag
}

/// Reassemble a magnitude of at most four words into a u128.
pub(crate) fn to_u128(mag: &[u32]) -> Option<u128> {
    if significant_len(mag) > 4 {
        return None;
    }
    Some(
        mag.iter()
            .take(4)
            .enumerate()
            .fold(0u128, |acc, (i, &w)| acc | ((w as u128) << (32 * i))),
    )
}
