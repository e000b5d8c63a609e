// ============================================================================
// Division
// Single-word fast path and Knuth's Algorithm D (TAOCP Vol. 2, 4.3.1)
// ============================================================================

use super::magnitude::{self, trim};
use std::cmp::Ordering;
use tracing::trace;

const BASE: u64 = 1 << 32;

/// Quotient and remainder of two magnitudes. The divisor must be nonzero.
///
/// Both results are normalized.
pub(crate) fn div_rem(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let u = &u[..magnitude::significant_len(u)];
    let v = &v[..magnitude::significant_len(v)];
    debug_assert!(!v.is_empty(), "divisor must be nonzero");

    match magnitude::cmp(u, v) {
        Ordering::Less => return (Vec::new(), u.to_vec()),
        Ordering::Equal => return (vec![1], Vec::new()),
        Ordering::Greater => {},
    }

    if v.len() == 1 {
        let mut q = u.to_vec();
        let r = magnitude::div_rem_word_in_place(&mut q, v[0]);
        let mut rem = vec![r];
        trim(&mut rem);
        return (q, rem);
    }

    knuth_d(u, v)
}

/// Algorithm D for `u >= v`, `v.len() >= 2`.
fn knuth_d(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let n = v.len();
    let m = u.len() - n;

    // D1: normalize so the divisor's top word has its high bit set
    let shift = v[n - 1].leading_zeros();
    let vn = shift_left_words(v, shift, false);
    let mut un = shift_left_words(u, shift, true);
    let v_top = vn[n - 1] as u64;
    let v_next = vn[n - 2] as u64;

    let mut q = vec![0u32; m + 1];

    for j in (0..=m).rev() {
        // D3: estimate q̂ from the top two remainder words
        let num = ((un[j + n] as u64) << 32) | un[j + n - 1] as u64;
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;

        // Cap at BASE - 1 and refine while q̂·v[n-2] proves an overshoot
        while qhat >= BASE || qhat * v_next > ((rhat << 32) | un[j + n - 2] as u64) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= BASE {
                break;
            }
        }

        // D4: multiply and subtract q̂·v from the current window
        let mut borrow: i64 = 0;
        for i in 0..n {
            let p = qhat * vn[i] as u64;
            let t = un[i + j] as i64 - borrow - (p & 0xFFFF_FFFF) as i64;
            un[i + j] = t as u32;
            borrow = (p >> 32) as i64 - (t >> 32);
        }
        let t = un[j + n] as i64 - borrow;
        un[j + n] = t as u32;

        // D5/D6: q̂ was one too large; add the divisor back
        if t < 0 {
            trace!(position = j, "quotient digit overestimated, adding back");
            qhat -= 1;
            let mut carry = 0u64;
            for i in 0..n {
                let sum = un[i + j] as u64 + vn[i] as u64 + carry;
                un[i + j] = sum as u32;
                carry = sum >> 32;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        }

        q[j] = qhat as u32;
    }

    // D8: denormalize the remainder
    let mut rem = shift_right_words(&un[..n], shift);
    trim(&mut rem);
    trim(&mut q);
    (q, rem)
}

/// Shift left by `shift < 32` bits, optionally keeping an extra top word.
fn shift_left_words(x: &[u32], shift: u32, extra_word: bool) -> Vec<u32> {
    let mut out = Vec::with_capacity(x.len() + 1);
    let mut carry = 0u32;
    for &word in x {
        if shift == 0 {
            out.push(word);
        } else {
            out.push((word << shift) | carry);
            carry = word >> (32 - shift);
        }
    }
    if extra_word {
        out.push(carry);
    }
    out
}

/// Shift right by `shift < 32` bits.
fn shift_right_words(x: &[u32], shift: u32) -> Vec<u32> {
    if shift == 0 {
        return x.to_vec();
    }
    (0..x.len())
        .map(|i| {
            let high = x.get(i + 1).map_or(0, |&w| w << (32 - shift));
            (x[i] >> shift) | high
        })
        .collect()
}
