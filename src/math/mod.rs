// ============================================================================
// Math Extensions
// Derived operations over the integer and decimal cores
// ============================================================================
//
// This module provides:
// - sqrt / sqrt_with: adaptive-precision Newton-Raphson square root
// - gcd (binary), lcm, pow (arbitrary exponent), factorial, is_prime
// - abs / min / max helpers generic over any Arithmetic backend

mod number_theory;
mod sqrt;

pub use number_theory::{factorial, gcd, is_prime, lcm, pow};
pub use sqrt::{sqrt, sqrt_with};

use crate::interfaces::Arithmetic;
use std::cmp::Ordering;

/// Absolute value through the backend contract.
pub fn abs<T: Arithmetic>(value: &T) -> T {
    value.abs()
}

/// The numerically larger operand (`a` on a tie).
pub fn max<T: Arithmetic>(a: &T, b: &T) -> T {
    match b.compare_to(a) {
        Ordering::Greater => b.clone(),
        _ => a.clone(),
    }
}

/// The numerically smaller operand (`a` on a tie).
pub fn min<T: Arithmetic>(a: &T, b: &T) -> T {
    match b.compare_to(a) {
        Ordering::Less => b.clone(),
        _ => a.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigDecimal, BigInteger};

    #[test]
    fn test_helpers_on_both_types() {
        let a: BigInteger = "-5".parse().unwrap();
        let b: BigInteger = "3".parse().unwrap();
        assert_eq!(abs(&a).to_string(), "5");
        assert_eq!(max(&a, &b), b);
        assert_eq!(min(&a, &b), a);

        let x: BigDecimal = "1.50".parse().unwrap();
        let y: BigDecimal = "1.5".parse().unwrap();
        // Ties keep the first operand, scale included
        assert_eq!(max(&x, &y).to_string(), "1.50");
        assert_eq!(min(&y, &x).to_string(), "1.5");
        assert_eq!(abs(&"-0.25".parse::<BigDecimal>().unwrap()).to_string(), "0.25");
    }
}
