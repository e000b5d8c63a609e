// ============================================================================
// Decimal String I/O
// Plain and scientific notation in, plain notation out
// ============================================================================

use super::BigDecimal;
use crate::integer::{parse_digit_run, parse_exponent, split_sign, BigInteger};
use crate::numeric::{NumericError, NumericResult, ParseIssue};
use std::fmt;
use std::str::FromStr;

/// Fold an exponent into the mantissa's scale.
///
/// `raw = mantissa_scale - exponent`; a negative raw scale is absorbed into
/// the unscaled value so the stored scale never drops below zero.
fn fold_exponent(unscaled: BigInteger, mantissa_scale: i64, exponent: i64) -> NumericResult<BigDecimal> {
    let out_of_range = || NumericError::from(ParseIssue::ExponentOutOfRange);
    let raw = mantissa_scale.checked_sub(exponent).ok_or_else(out_of_range)?;

    if raw >= 0 {
        let scale = u32::try_from(raw).map_err(|_| out_of_range())?;
        return Ok(BigDecimal::new(unscaled, scale));
    }

    let zeros = u32::try_from(raw.unsigned_abs()).map_err(|_| out_of_range())?;
    Ok(BigDecimal::new(&unscaled * &BigInteger::ten_pow(zeros), 0))
}

impl FromStr for BigDecimal {
    type Err = NumericError;

    /// Parse `[+|-]digit*[.digit*][E|e[+|-]digit+]` with at least one digit.
    ///
    /// Trailing zeros are kept as scale: "1.50" has scale 2.
    ///
    /// # Examples
    /// - "123.45" -> 12345 × 10^-2
    /// - "1.23E-2" -> 123 × 10^-4 ("0.0123")
    /// - "1.23E2" -> 123 × 10^0
    /// - ".5", "5." -> valid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIssue::Empty.into());
        }

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(pos) => (&s[..pos], parse_exponent(&s[pos + 1..])?),
            None => (s, 0),
        };

        let (negative, body) = split_sign(mantissa);
        let (int_part, frac_part) = match body.find('.') {
            Some(dot) => (&body[..dot], &body[dot + 1..]),
            None => (body, ""),
        };
        if frac_part.contains('.') {
            return Err(ParseIssue::MultipleDots.into());
        }
        if int_part.is_empty() && frac_part.is_empty() {
            let issue = if body.is_empty() {
                ParseIssue::BareSign
            } else {
                ParseIssue::InvalidDigit
            };
            return Err(issue.into());
        }

        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        let mag = parse_digit_run(&digits)?;
        let unscaled = BigInteger::from_parts(if negative { -1 } else { 1 }, mag);

        fold_exponent(unscaled, frac_part.len() as i64, exponent)
    }
}

impl fmt::Display for BigDecimal {
    /// Plain notation with exactly `scale` fractional digits.
    ///
    /// Values below one in magnitude get a leading "0."; the point is
    /// omitted at scale 0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.abs().to_string();
        let nonnegative = !self.unscaled.is_negative();
        if self.scale == 0 {
            return f.pad_integral(nonnegative, "", &digits);
        }

        let scale = self.scale as usize;
        let mut text = String::with_capacity(digits.len().max(scale) + 2);
        if scale >= digits.len() {
            text.push_str("0.");
            text.extend(std::iter::repeat('0').take(scale - digits.len()));
            text.push_str(&digits);
        } else {
            let (whole, frac) = digits.split_at(digits.len() - scale);
            text.push_str(whole);
            text.push('.');
            text.push_str(frac);
        }

        f.pad_integral(nonnegative, "", &text)
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigDecimal({}, scale={})", self, self.scale)
    }
}
