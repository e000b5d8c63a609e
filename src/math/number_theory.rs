// ============================================================================
// Number Theory
// Binary GCD, LCM, exponentiation, factorial and trial-division primality
// ============================================================================

use super::sqrt::sqrt;
use crate::integer::BigInteger;
use crate::numeric::{NumericError, NumericResult};

/// Greatest common divisor by Stein's algorithm. Always non-negative;
/// `gcd(0, b) == |b|`.
pub fn gcd(a: &BigInteger, b: &BigInteger) -> BigInteger {
    let mut a = a.abs();
    let mut b = b.abs();
    let (Some(a_zeros), Some(b_zeros)) = (a.lowest_set_bit(), b.lowest_set_bit()) else {
        // One side is zero
        return if a.is_zero() { b } else { a };
    };

    a = a.shift_right(a_zeros);
    b = b.shift_right(b_zeros);

    // Both odd from here; each difference is even and nonzero
    while a != b {
        if a > b {
            a = &a - &b;
            a = strip_twos(&a);
        } else {
            b = &b - &a;
            b = strip_twos(&b);
        }
    }

    a.shift_left(a_zeros.min(b_zeros))
}

#[inline]
fn strip_twos(x: &BigInteger) -> BigInteger {
    x.shift_right(x.lowest_set_bit().unwrap_or(0))
}

/// Least common multiple, `|a × b| / gcd(a, b)`; zero if either input is.
pub fn lcm(a: &BigInteger, b: &BigInteger) -> BigInteger {
    if a.is_zero() || b.is_zero() {
        return BigInteger::zero();
    }
    let divisor = gcd(a, b);
    // Dividing first keeps the intermediate product small
    &(&a.abs() / &divisor) * &b.abs()
}

/// `base^exponent` for an arbitrary-size exponent.
///
/// Walks the exponent's bits from least significant via `test_bit`,
/// squaring the base once per bit.
///
/// # Errors
/// Returns `NegativeArgument` for a negative exponent.
pub fn pow(base: &BigInteger, exponent: &BigInteger) -> NumericResult<BigInteger> {
    if exponent.is_negative() {
        return Err(NumericError::NegativeArgument);
    }

    let bits = exponent.bit_length();
    let mut result = BigInteger::one();
    let mut square = base.clone();
    for i in 0..bits {
        if exponent.test_bit(i) {
            result = &result * &square;
        }
        if i + 1 < bits {
            square = &square * &square;
        }
    }
    Ok(result)
}

/// `n!` as an iterative product; `0! == 1`.
///
/// # Errors
/// Returns `NegativeArgument` for negative `n`.
pub fn factorial(n: &BigInteger) -> NumericResult<BigInteger> {
    if n.is_negative() {
        return Err(NumericError::NegativeArgument);
    }

    let one = BigInteger::one();
    let mut result = BigInteger::one();
    let mut current = BigInteger::two();
    while &current <= n {
        result = &result * &current;
        current = &current + &one;
    }
    Ok(result)
}

/// Trial division by 2 and the odd numbers up to `sqrt(n)`.
///
/// Values below 2 are not prime. The bound comes from the decimal square
/// root at scale 0.
pub fn is_prime(n: &BigInteger) -> NumericResult<bool> {
    let two = BigInteger::two();
    match n.cmp(&two) {
        std::cmp::Ordering::Less => return Ok(false),
        std::cmp::Ordering::Equal => return Ok(true),
        std::cmp::Ordering::Greater => {},
    }
    if n.is_even() {
        return Ok(false);
    }

    let limit = sqrt(&n.to_big_decimal(), 0)?.to_big_integer();
    let mut candidate = BigInteger::from(3);
    while candidate <= limit {
        if n.checked_rem(&candidate)?.is_zero() {
            return Ok(false);
        }
        candidate = &candidate + &two;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_integer::Integer;
    use proptest::prelude::*;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_gcd_and_lcm() {
        assert_eq!(gcd(&big("12"), &big("18")), big("6"));
        assert_eq!(lcm(&big("12"), &big("18")), big("36"));
        assert_eq!(gcd(&big("-12"), &big("18")), big("6"));
        assert_eq!(lcm(&big("-4"), &big("6")), big("12"));
        assert_eq!(gcd(&big("0"), &big("-7")), big("7"));
        assert_eq!(gcd(&big("0"), &big("0")), BigInteger::zero());
        assert_eq!(lcm(&big("0"), &big("9")), BigInteger::zero());
        assert_eq!(gcd(&big("48"), &big("64")), big("16"));
        assert_eq!(gcd(&big("17"), &big("5")), BigInteger::one());
    }

    #[test]
    fn test_gcd_of_large_values() {
        let p = big("170141183460469231731687303715884105727");
        let a = &p * &big("123456789");
        let b = &p * &big("987654321");
        assert_eq!(gcd(&a, &b), &p * &big("9"));
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(&big("2"), &big("10")).unwrap(), big("1024"));
        assert_eq!(pow(&big("-3"), &big("3")).unwrap(), big("-27"));
        assert_eq!(pow(&big("7"), &big("0")).unwrap(), BigInteger::one());
        assert_eq!(pow(&big("0"), &big("0")).unwrap(), BigInteger::one());
        assert_eq!(
            pow(&big("10"), &big("30")).unwrap().to_string(),
            format!("1{}", "0".repeat(30))
        );
        assert_eq!(pow(&big("2"), &big("-1")), Err(NumericError::NegativeArgument));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(&big("0")).unwrap(), BigInteger::one());
        assert_eq!(factorial(&big("1")).unwrap(), BigInteger::one());
        assert_eq!(factorial(&big("20")).unwrap().to_string(), "2432902008176640000");
        assert_eq!(
            factorial(&big("30")).unwrap().to_string(),
            "265252859812191058636308480000000"
        );
        assert_eq!(factorial(&big("-1")), Err(NumericError::NegativeArgument));
    }

    #[test]
    fn test_is_prime() {
        let primes = [2, 3, 5, 7, 11, 13, 97, 7919, 104_729];
        let composites = [-7, 0, 1, 4, 9, 15, 25, 49, 7917, 104_730, 1_046_529];
        for p in primes {
            assert!(is_prime(&BigInteger::from(p)).unwrap(), "{p} is prime");
        }
        for c in composites {
            assert!(!is_prime(&BigInteger::from(c)).unwrap(), "{c} is composite");
        }
        // 2^31 - 1
        assert!(is_prime(&big("2147483647")).unwrap());
    }

    fn oracle(v: &BigInteger) -> BigInt {
        v.to_string().parse().unwrap()
    }

    proptest! {
        #[test]
        fn prop_gcd_matches_reference(a in any::<i128>(), b in any::<i128>()) {
            let (x, y) = (BigInteger::from(a), BigInteger::from(b));
            let g = gcd(&x, &y);
            prop_assert_eq!(oracle(&g), oracle(&x).gcd(&oracle(&y)));
        }

        #[test]
        fn prop_gcd_times_lcm_is_product(a in any::<i64>(), b in any::<i64>()) {
            let (x, y) = (BigInteger::from(a), BigInteger::from(b));
            prop_assert_eq!(&gcd(&x, &y) * &lcm(&x, &y), (&x * &y).abs());
        }

        #[test]
        fn prop_pow_matches_repeated_multiplication(base in -50i64..50, exp in 0u32..40) {
            let b = BigInteger::from(base);
            prop_assert_eq!(pow(&b, &BigInteger::from(exp)).unwrap(), b.pow(exp));
        }
    }
}
