// ============================================================================
// Integer String I/O
// Chunked base-10^9 parsing and formatting
// ============================================================================

use super::magnitude;
use super::BigInteger;
use crate::numeric::{NumericError, NumericResult, ParseIssue};
use std::fmt;
use std::str::FromStr;

/// Largest power of ten that fits in one word.
pub(crate) const CHUNK_BASE: u32 = 1_000_000_000;

/// Decimal digits per chunk.
pub(crate) const CHUNK_DIGITS: usize = 9;

/// Split a leading `+`/`-` off a numeric string.
pub(crate) fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// Classify a non-digit character found inside a digit run.
#[inline]
fn bad_char(c: u8) -> ParseIssue {
    match c {
        b'+' | b'-' => ParseIssue::EmbeddedSign,
        b'.' => ParseIssue::MultipleDots,
        _ => ParseIssue::InvalidDigit,
    }
}

/// Parse an unsigned run of ASCII digits into a magnitude.
///
/// Consumes the run in 9-digit chunks from the most significant end:
/// `result = result × 10^9 + chunk`. The first chunk takes the leftover
/// `len % 9` digits so every later chunk is exactly nine digits wide.
pub(crate) fn parse_digit_run(digits: &str) -> NumericResult<Vec<u32>> {
    let bytes = digits.as_bytes();
    let mut mag = Vec::with_capacity(bytes.len() / CHUNK_DIGITS + 1);

    let first = match bytes.len() % CHUNK_DIGITS {
        0 => CHUNK_DIGITS.min(bytes.len()),
        n => n,
    };
    let mut start = 0;
    let mut end = first;
    while start < bytes.len() {
        let mut chunk = 0u32;
        for &c in &bytes[start..end] {
            if !c.is_ascii_digit() {
                return Err(bad_char(c).into());
            }
            chunk = chunk * 10 + (c - b'0') as u32;
        }
        magnitude::mul_add_word(&mut mag, CHUNK_BASE, chunk);
        start = end;
        end += CHUNK_DIGITS;
    }

    Ok(mag)
}

/// Parse the digits after an exponent marker into a signed exponent.
pub(crate) fn parse_exponent(s: &str) -> NumericResult<i64> {
    let (negative, digits) = split_sign(s);
    if digits.is_empty() {
        return Err(ParseIssue::MissingExponent.into());
    }
    if let Some(&c) = digits.as_bytes().iter().find(|c| !c.is_ascii_digit()) {
        return Err(bad_char(c).into());
    }
    let value: i64 = digits
        .parse()
        .map_err(|_| NumericError::from(ParseIssue::ExponentOutOfRange))?;
    Ok(if negative { -value } else { value })
}

impl FromStr for BigInteger {
    type Err = NumericError;

    /// Parse `[+|-]digit+` with an optional `E`/`e` exponent suffix.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0" -> 0
    /// - "16116E+7" -> 161160000000
    /// - "1E-2", "1.5" -> error (not an integer)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIssue::Empty.into());
        }

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(pos) => (&s[..pos], Some(parse_exponent(&s[pos + 1..])?)),
            None => (s, None),
        };

        let (negative, digits) = split_sign(mantissa);
        if digits.is_empty() {
            return Err(ParseIssue::BareSign.into());
        }
        if digits.contains('.') {
            return Err(ParseIssue::FractionalInteger.into());
        }

        let mut value = BigInteger::from_parts(if negative { -1 } else { 1 }, parse_digit_run(digits)?);

        if let Some(exp) = exponent {
            if exp < 0 {
                return Err(ParseIssue::NegativeExponent.into());
            }
            let zeros = u32::try_from(exp).map_err(|_| NumericError::from(ParseIssue::ExponentOutOfRange))?;
            value = &value * &BigInteger::ten_pow(zeros);
        }

        Ok(value)
    }
}

impl fmt::Display for BigInteger {
    /// Canonical decimal form: no leading zeros, `-` for negatives, "0" for zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }

        let mut rest = self.mag.clone();
        let mut chunks = Vec::with_capacity(rest.len() * 32 / 29 + 1);
        while !rest.is_empty() {
            chunks.push(magnitude::div_rem_word_in_place(&mut rest, CHUNK_BASE));
        }

        let mut digits = String::with_capacity(chunks.len() * CHUNK_DIGITS);
        let mut iter = chunks.iter().rev();
        if let Some(top) = iter.next() {
            digits.push_str(&top.to_string());
        }
        for chunk in iter {
            digits.push_str(&format!("{:09}", chunk));
        }

        f.pad_integral(self.signum > 0, "", &digits)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({}, words={})", self, self.mag.len())
    }
}
