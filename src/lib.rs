// ============================================================================
// Bignum Engine Library
// Arbitrary-precision integers, scaled decimals and derived math
// ============================================================================

//! # Bignum Engine
//!
//! Pure-Rust arbitrary-precision arithmetic: unbounded signed integers,
//! scaled decimals with explicit rounding, and number-theory helpers.
//!
//! ## Features
//!
//! - **Sign-magnitude integers** over 32-bit words with Karatsuba
//!   multiplication and Knuth Algorithm D division
//! - **Two's-complement bitwise operations** without materializing
//!   complement arrays
//! - **Scaled decimals** with eight rounding modes and scale-insensitive
//!   comparison
//! - **Math extensions**: Newton-Raphson square root, binary GCD, LCM,
//!   exponentiation, factorial, primality
//!
//! ## Example
//!
//! ```rust
//! use bignum_engine::prelude::*;
//!
//! let a: BigInteger = "123456789".parse().unwrap();
//! let b: BigInteger = "987654321".parse().unwrap();
//! assert_eq!((&a * &b).to_string(), "121932631112635269");
//!
//! let price: BigDecimal = "123.45".parse().unwrap();
//! let fee: BigDecimal = "67.89".parse().unwrap();
//! assert_eq!((&price + &fee).to_string(), "191.34");
//!
//! let third = BigDecimal::one()
//!     .divide_with(&BigDecimal::from(3), 5, RoundingMode::HalfEven)
//!     .unwrap();
//! assert_eq!(third.to_string(), "0.33333");
//!
//! let root = math::sqrt(&"2".parse().unwrap(), 10).unwrap();
//! assert_eq!(root.to_string(), "1.4142135624");
//! ```

pub mod config;
pub mod decimal;
pub mod integer;
pub mod interfaces;
pub mod math;
pub mod numeric;

pub use config::MathConfig;
pub use decimal::BigDecimal;
pub use integer::BigInteger;
pub use numeric::{ErrorKind, NumericError, NumericResult, ParseIssue, RoundingMode};

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::MathConfig;
    pub use crate::decimal::BigDecimal;
    pub use crate::integer::BigInteger;
    pub use crate::interfaces::{Arithmetic, DecimalArithmetic, IntegerArithmetic};
    pub use crate::math;
    pub use crate::numeric::{NumericError, NumericResult, RoundingMode};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::{ErrorKind, ParseIssue};
    use num_bigint::BigInt;
    use proptest::prelude::*;
    use quickcheck::{QuickCheck, TestResult};

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_concrete_scenarios() {
        assert_eq!((&big("123456789") * &big("987654321")).to_string(), "121932631112635269");

        let (q, r) = BigInteger::two().pow(64).div_rem(&big("3")).unwrap();
        assert_eq!(q.to_string(), "6148914691236517205");
        assert_eq!(r, BigInteger::one());

        assert_eq!(math::gcd(&big("12"), &big("18")), big("6"));
        assert_eq!(math::lcm(&big("12"), &big("18")), big("36"));
        assert_eq!((&dec("123.45") + &dec("67.89")).to_string(), "191.34");
        assert_eq!(math::factorial(&big("20")).unwrap().to_string(), "2432902008176640000");
    }

    #[test]
    fn test_large_product_matches_oracle() {
        let a = "31415926535897932384626433832795028841971693993751".repeat(60);
        let b = "27182818284590452353602874713526624977572470936999".repeat(45);
        let expected = a.parse::<BigInt>().unwrap() * b.parse::<BigInt>().unwrap();
        assert_eq!((&big(&a) * &big(&b)).to_string(), expected.to_string());

        let (q, r) = big(&a).div_rem(&big(&b)).unwrap();
        let (eq, er) = (
            a.parse::<BigInt>().unwrap() / b.parse::<BigInt>().unwrap(),
            a.parse::<BigInt>().unwrap() % b.parse::<BigInt>().unwrap(),
        );
        assert_eq!(q.to_string(), eq.to_string());
        assert_eq!(r.to_string(), er.to_string());
    }

    #[test]
    fn test_rounding_tie_table() {
        let two_and_half = dec("2.5");
        let expected = [
            (RoundingMode::Up, "3"),
            (RoundingMode::Ceiling, "3"),
            (RoundingMode::HalfUp, "3"),
            (RoundingMode::Down, "2"),
            (RoundingMode::Floor, "2"),
            (RoundingMode::HalfDown, "2"),
            (RoundingMode::HalfEven, "2"),
        ];
        for (mode, result) in expected {
            assert_eq!(two_and_half.set_scale(0, mode).unwrap().to_string(), result, "{mode}");
        }
        assert_eq!(dec("3.5").set_scale(0, RoundingMode::HalfEven).unwrap().to_string(), "4");
    }

    #[test]
    fn test_error_kinds() {
        let arithmetic = [
            big("1").div_rem(&BigInteger::zero()).unwrap_err(),
            big("1").checked_rem(&BigInteger::zero()).unwrap_err(),
            math::sqrt(&dec("-1"), 2).unwrap_err(),
            math::factorial(&big("-3")).unwrap_err(),
            math::pow(&big("2"), &big("-3")).unwrap_err(),
            dec("1").divide_with(&dec("3"), 2, RoundingMode::Unnecessary).unwrap_err(),
            big("99999999999999999999").to_i64().unwrap_err(),
        ];
        for err in arithmetic {
            assert_eq!(err.kind(), ErrorKind::Arithmetic, "{err}");
        }

        let format = [
            "".parse::<BigInteger>().unwrap_err(),
            "-".parse::<BigInteger>().unwrap_err(),
            "1.5".parse::<BigInteger>().unwrap_err(),
            "1..5".parse::<BigDecimal>().unwrap_err(),
            "123456789-1".parse::<BigInteger>().unwrap_err(),
        ];
        for err in format {
            assert_eq!(err.kind(), ErrorKind::Format, "{err}");
        }
        assert_eq!(format[4], NumericError::InvalidInput(ParseIssue::EmbeddedSign));
    }

    #[test]
    fn test_failed_operation_leaves_operands_usable() {
        let a = big("42");
        let zero = BigInteger::zero();
        assert!(a.div_rem(&zero).is_err());
        assert_eq!(&a + &zero, big("42"));
    }

    #[test]
    fn test_is_prime_through_decimal_sqrt() {
        assert!(math::is_prime(&big("1000000007")).unwrap());
        assert!(!math::is_prime(&big("1000000011")).unwrap());
    }

    #[test]
    fn test_config_drives_division() {
        let config = MathConfig::new()
            .with_division_scale(3)
            .with_rounding_mode(RoundingMode::Floor);
        assert!(config.validate().is_ok());
        let q = dec("-2").divide_in(&dec("3"), &config).unwrap();
        assert_eq!(q.to_string(), "-0.667");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let value = dec("-1234.5600");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-1234.5600\"");
        let back: BigDecimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let config: MathConfig = serde_json::from_str(&serde_json::to_string(&MathConfig::new()).unwrap()).unwrap();
        assert_eq!(config, MathConfig::new());
    }

    fn arb_integer() -> impl Strategy<Value = BigInteger> {
        prop::collection::vec(any::<u32>(), 0..40).prop_flat_map(|words| {
            any::<bool>().prop_map(move |negative| {
                let mut text = num_bigint::BigUint::from_slice(&words).to_string();
                if negative {
                    text.insert(0, '-');
                }
                text.parse::<BigInteger>().unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn prop_division_identity(a in arb_integer(), b in arb_integer()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn prop_gcd_lcm_product(a in arb_integer(), b in arb_integer()) {
            let lhs = &math::gcd(&a, &b) * &math::lcm(&a, &b);
            prop_assert_eq!(lhs, (&a * &b).abs());
        }

        #[test]
        fn prop_round_trip(a in arb_integer(), scale in 0u32..30) {
            prop_assert_eq!(big(&a.to_string()), a.clone());
            let d = BigDecimal::new(a, scale);
            prop_assert_eq!(dec(&d.to_string()), d);
        }
    }

    #[test]
    fn test_quickcheck_against_i128() {
        fn prop(a: i64, b: i64, shift: u8) -> TestResult {
            if b == 0 {
                return TestResult::discard();
            }
            let (x, y) = (BigInteger::from(a), BigInteger::from(b));
            let (wa, wb) = (a as i128, b as i128);
            let n = (shift % 60) as usize;
            TestResult::from_bool(
                x.checked_div(&y).unwrap() == BigInteger::from(wa / wb)
                    && x.checked_rem(&y).unwrap() == BigInteger::from(wa % wb)
                    && (&x & &y) == BigInteger::from(a & b)
                    && (&x | &y) == BigInteger::from(a | b)
                    && (&x ^ &y) == BigInteger::from(a ^ b)
                    && (!&x) == BigInteger::from(!a)
                    && (&x >> n) == BigInteger::from(wa >> n)
                    && (&x << n) == BigInteger::from(wa << n)
                    && x.cmp(&y) == a.cmp(&b),
            )
        }
        QuickCheck::new()
            .tests(1000)
            .quickcheck(prop as fn(i64, i64, u8) -> TestResult);
    }
}
