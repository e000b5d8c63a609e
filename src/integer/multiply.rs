// ============================================================================
// Multiplication
// Schoolbook below the Karatsuba threshold, Karatsuba at or above it
// ============================================================================

use super::magnitude::{self, trim};
use tracing::trace;

/// Operand size (in words) at which Karatsuba replaces schoolbook
/// multiplication. 80 words is roughly 2560 bits.
pub const KARATSUBA_THRESHOLD: usize = 80;

/// Multiply two magnitudes. The result is normalized.
pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let a = &a[..magnitude::significant_len(a)];
    let b = &b[..magnitude::significant_len(b)];
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = vec![0u32; a.len() + b.len()];
    if a.len() < KARATSUBA_THRESHOLD || b.len() < KARATSUBA_THRESHOLD {
        schoolbook(a, b, &mut out);
    } else {
        karatsuba(a, b, &mut out);
    }
    trim(&mut out);
    out
}

/// O(n·m) multiplication with 64-bit partial products.
///
/// `out` must be zeroed and hold `a.len() + b.len()` words.
fn schoolbook(a: &[u32], b: &[u32], out: &mut [u32]) {
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            // (2^32-1)^2 + 2(2^32-1) == 2^64-1, so this never overflows
            let t = x as u64 * y as u64 + out[i + j] as u64 + carry;
            out[i + j] = t as u32;
            carry = t >> 32;
        }
        out[i + b.len()] = carry as u32;
    }
}

/// Karatsuba over index-offset views of the operands.
///
/// Splits both operands at `half = max(len) / 2` words:
/// `a = a1·B + a0`, `b = b1·B + b0` with `B = 2^(32·half)`, then
/// `a·b = z2·B² + (z1 - z2 - z0)·B + z0`. Recursion happens through
/// [`mul`], which falls back to schoolbook below the threshold.
fn karatsuba(a: &[u32], b: &[u32], out: &mut [u32]) {
    let half = a.len().max(b.len()) / 2;
    trace!(a_words = a.len(), b_words = b.len(), half, "karatsuba split");

    let (a0, a1) = split(a, half);
    let (b0, b1) = split(b, half);

    let z0 = mul(a0, b0);
    let z2 = mul(a1, b1);

    let a_sum = magnitude::add(a0, a1);
    let b_sum = magnitude::add(b0, b1);
    let mut z1 = mul(&a_sum, &b_sum);
    // (a0 + a1)(b0 + b1) >= z0 + z2, so neither subtraction can underflow
    magnitude::sub_in_place(&mut z1, &z0);
    magnitude::sub_in_place(&mut z1, &z2);
    trim(&mut z1);

    magnitude::add_at(out, &z0, 0);
    magnitude::add_at(out, &z1, half);
    magnitude::add_at(out, &z2, 2 * half);
}

/// Low and high halves of `x` split at `at` words. The high half is empty
/// when `x` is shorter than the split point.
#[inline]
fn split(x: &[u32], at: usize) -> (&[u32], &[u32]) {
    if at < x.len() {
        x.split_at(at)
    } else {
        (x, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn to_biguint(mag: &[u32]) -> BigUint {
        BigUint::from_slice(mag)
    }

    fn pseudo_random_words(len: usize, seed: u64) -> Vec<u32> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 32) as u32
            })
            .collect()
    }

    #[test]
    fn test_schoolbook_small() {
        assert_eq!(mul(&[3], &[4]), vec![12]);
        assert_eq!(mul(&[u32::MAX], &[u32::MAX]), vec![1, u32::MAX - 1]);
        assert!(mul(&[], &[5]).is_empty());
        assert!(mul(&[0, 0], &[5]).is_empty());
    }

    #[test]
    fn test_karatsuba_matches_reference() {
        for (la, lb) in [(80, 80), (81, 160), (200, 95), (257, 256)] {
            let a = pseudo_random_words(la, la as u64);
            let b = pseudo_random_words(lb, lb as u64 * 31);
            let expected = to_biguint(&a) * to_biguint(&b);
            assert_eq!(to_biguint(&mul(&a, &b)), expected, "sizes {la}x{lb}");
        }
    }

    #[test]
    fn test_karatsuba_all_ones() {
        // Worst case for carries: every word saturated
        let a = vec![u32::MAX; 170];
        let b = vec![u32::MAX; 90];
        let expected = to_biguint(&a) * to_biguint(&b);
        assert_eq!(to_biguint(&mul(&a, &b)), expected);
    }

    #[test]
    fn test_karatsuba_unbalanced_split() {
        // The shorter operand has no high half after the split
        let a = pseudo_random_words(80, 7);
        let b = pseudo_random_words(400, 11);
        let expected = to_biguint(&a) * to_biguint(&b);
        assert_eq!(to_biguint(&mul(&a, &b)), expected);
    }
}
