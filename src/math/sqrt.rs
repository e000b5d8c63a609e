// ============================================================================
// Square Root
// Adaptive-precision Newton-Raphson over BigDecimal
// ============================================================================

use crate::config::MathConfig;
use crate::decimal::BigDecimal;
use crate::integer::BigInteger;
use crate::numeric::{NumericError, NumericResult, RoundingMode};
use std::cmp::Ordering;
use tracing::debug;

/// Significant digits an `f64` carries reliably.
const F64_DIGITS: usize = 17;

/// Square root rounded `HalfUp` to `scale` fractional digits, with trailing
/// fractional zeros stripped (`sqrt(16, 10)` is `"4"`).
///
/// # Errors
/// Returns `NegativeSquareRoot` for negative input.
pub fn sqrt(value: &BigDecimal, scale: u32) -> NumericResult<BigDecimal> {
    sqrt_with(value, &MathConfig::new().with_sqrt_scale(scale))
}

/// Square root under explicit tuning.
///
/// The iteration is `x ← (x + value / x) / 2`. Starting from an `f64`
/// estimate, the working scale doubles from `sqrt_initial_precision` up to
/// `sqrt_scale + sqrt_guard_digits`; steps then continue at that scale
/// until two iterates differ by at most one unit in the last place, or
/// `sqrt_max_iterations` is reached.
///
/// # Errors
/// Returns `NegativeSquareRoot` for negative input.
pub fn sqrt_with(value: &BigDecimal, config: &MathConfig) -> NumericResult<BigDecimal> {
    if value.is_negative() {
        return Err(NumericError::NegativeSquareRoot);
    }
    if value.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let working = config.sqrt_working_scale();
    let two = BigDecimal::from(2);
    let mut x = initial_guess(value)?;

    // Doubling phase: each step roughly doubles the correct digits. A step
    // too coarse to represent the root keeps the previous iterate.
    let mut precision = config.sqrt_initial_precision.max(1);
    loop {
        let step_scale = precision.min(working);
        match newton_step(value, &x, &two, step_scale)? {
            Some(next) => x = next,
            None => debug!(scale = step_scale, "sqrt step below resolution"),
        }
        debug!(scale = step_scale, "sqrt newton step");
        if step_scale == working {
            break;
        }
        precision = precision.saturating_mul(2);
    }

    // Refinement at the final working scale
    let ulp = BigDecimal::new(BigInteger::one(), working);
    let mut converged = false;
    for iteration in 0..config.sqrt_max_iterations {
        let next = match newton_step(value, &x, &two, working)? {
            Some(next) => next,
            None => return Ok(BigDecimal::zero()),
        };
        let delta = (&next - &x).abs();
        x = next;
        if delta.compare_to(&ulp) != Ordering::Greater {
            debug!(iterations = iteration + 1, scale = working, "sqrt converged");
            converged = true;
            break;
        }
    }
    if !converged {
        debug!(
            limit = config.sqrt_max_iterations,
            "sqrt stopped at the iteration limit"
        );
    }

    Ok(x.set_scale(config.sqrt_scale, RoundingMode::HalfUp)?.strip_trailing_zeros())
}

/// One Newton step at `scale`. `None` once the iterate rounds to zero, which
/// means the root lies below that scale's resolution.
fn newton_step(
    value: &BigDecimal,
    x: &BigDecimal,
    two: &BigDecimal,
    scale: u32,
) -> NumericResult<Option<BigDecimal>> {
    if x.is_zero() {
        return Ok(None);
    }
    let quotient = value.divide_with(x, scale, RoundingMode::HalfUp)?;
    let next = (x + &quotient).divide_with(two, scale, RoundingMode::HalfUp)?;
    Ok(if next.is_zero() { None } else { Some(next) })
}

/// Starting point worth about 16 correct digits.
///
/// Values inside the normal `f64` range go through `f64::sqrt` directly.
/// Anything else is reduced to its leading digits `lead × 10^e` with an even
/// `e`, so the root is `sqrt(lead) × 10^(e/2)`.
fn initial_guess(value: &BigDecimal) -> NumericResult<BigDecimal> {
    let approx = value.to_f64();
    if approx.is_normal() {
        return BigDecimal::try_from(approx.sqrt());
    }

    let digits = value.unscaled_value().abs().to_string();
    let lead_len = digits.len().min(F64_DIGITS);
    let mut lead: f64 = digits[..lead_len].parse().unwrap_or(1.0);
    let mut exponent = (digits.len() - lead_len) as i64 - value.scale() as i64;
    if exponent % 2 != 0 {
        lead *= 10.0;
        exponent -= 1;
    }

    let root = BigDecimal::try_from(lead.sqrt())?;
    let half = exponent / 2;
    debug!(exponent, "sqrt guess outside f64 range");
    let shift = u32::try_from(half.unsigned_abs()).map_err(|_| NumericError::Overflow)?;
    if half >= 0 {
        Ok(root.move_point_right(shift))
    } else {
        root.move_point_left(shift)
    }
}
