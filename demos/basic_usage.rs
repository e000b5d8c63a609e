// ============================================================================
// Basic Usage Example
// ============================================================================

use bignum_engine::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Bignum Engine Example ===\n");

    // Integers
    let a: BigInteger = "123456789012345678901234567890".parse()?;
    let b: BigInteger = "-987654321098765432109876543210".parse()?;
    println!("a       = {}", a);
    println!("b       = {}", b);
    println!("a + b   = {}", &a + &b);
    println!("a * b   = {}", &a * &b);
    let (q, r) = b.div_rem(&a)?;
    println!("b / a   = {} remainder {}", q, r);
    println!("b >> 10 = {}", &b >> 10);
    println!("a & b   = {}", &a & &b);
    println!("2^200   = {}", BigInteger::two().pow(200));

    // Decimals
    println!("\n=== Decimals ===");
    let price: BigDecimal = "123.45".parse()?;
    let qty: BigDecimal = "1.5E1".parse()?;
    let total = &price * &qty;
    println!("{} x {} = {} (scale {})", price, qty, total, total.scale());
    for mode in RoundingMode::ALL.iter().take(7) {
        let third = BigDecimal::from(-2).divide_with(&BigDecimal::from(3), 4, *mode)?;
        println!("  -2/3 at scale 4, {:<9} -> {}", mode, third);
    }
    println!("1 / 7 (operator) = {}", BigDecimal::one() / BigDecimal::from(7));

    // Math extensions
    println!("\n=== Math ===");
    println!("sqrt(2, 30)  = {}", math::sqrt(&BigDecimal::from(2), 30)?);
    println!("gcd(12, 18)  = {}", math::gcd(&BigInteger::from(12), &BigInteger::from(18)));
    println!("lcm(12, 18)  = {}", math::lcm(&BigInteger::from(12), &BigInteger::from(18)));
    println!("30!          = {}", math::factorial(&BigInteger::from(30))?);
    println!("is_prime(2^31 - 1) = {}", math::is_prime(&"2147483647".parse()?)?);

    let config = MathConfig::new().with_sqrt_scale(60);
    if let Err(reason) = config.validate() {
        eprintln!("invalid config: {}", reason);
        return Ok(());
    }
    println!("sqrt(10, 60) = {}", math::sqrt_with(&BigDecimal::from(10), &config)?);

    // Errors are values
    println!("\n=== Errors ===");
    match BigInteger::one().div_rem(&BigInteger::zero()) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("1 / 0 -> {} ({:?})", e, e.kind()),
    }
    match "12.5".parse::<BigInteger>() {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("\"12.5\" as integer -> {} ({:?})", e, e.kind()),
    }

    Ok(())
}
