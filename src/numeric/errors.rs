// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision arithmetic and parsing
// ============================================================================

use std::fmt;

/// Which part of a numeric string was malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseIssue {
    /// The input was empty
    Empty,
    /// A sign with no digits after it
    BareSign,
    /// A `+` or `-` inside the digit run
    EmbeddedSign,
    /// More than one decimal point
    MultipleDots,
    /// A character that is not a digit, sign, point or exponent marker
    InvalidDigit,
    /// A fractional mantissa given to the integer parser
    FractionalInteger,
    /// A negative exponent given to the integer parser
    NegativeExponent,
    /// An exponent marker with no exponent digits
    MissingExponent,
    /// The exponent (or resulting scale) does not fit the supported range
    ExponentOutOfRange,
    /// NaN or infinity given where a finite value is required
    NonFinite,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ParseIssue::Empty => "empty string",
            ParseIssue::BareSign => "sign without digits",
            ParseIssue::EmbeddedSign => "sign character inside digits",
            ParseIssue::MultipleDots => "multiple decimal points",
            ParseIssue::InvalidDigit => "invalid digit",
            ParseIssue::FractionalInteger => "fractional value for an integer",
            ParseIssue::NegativeExponent => "negative exponent for an integer",
            ParseIssue::MissingExponent => "missing exponent digits",
            ParseIssue::ExponentOutOfRange => "exponent out of range",
            ParseIssue::NonFinite => "value is not finite",
        };
        f.write_str(reason)
    }
}

/// The two failure families every operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation has no defined (or representable) result
    Arithmetic,
    /// An input string could not be parsed
    Format,
}

/// Errors that can occur during arbitrary-precision arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Division or remainder by zero
    DivisionByZero,
    /// Square root of a negative value
    NegativeSquareRoot,
    /// Factorial or integer power with a negative argument
    NegativeArgument,
    /// `RoundingMode::Unnecessary` was requested but digits would be discarded
    RoundingNecessary,
    /// Value does not fit the requested fixed-width type
    Overflow,
    /// Input string could not be parsed
    InvalidInput(ParseIssue),
}

impl NumericError {
    /// Classify the error as arithmetic or format.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            NumericError::InvalidInput(_) => ErrorKind::Format,
            _ => ErrorKind::Arithmetic,
        }
    }
}

impl From<ParseIssue> for NumericError {
    fn from(issue: ParseIssue) -> Self {
        NumericError::InvalidInput(issue)
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NegativeSquareRoot => {
                write!(f, "square root of a negative number")
            },
            NumericError::NegativeArgument => {
                write!(f, "negative argument: factorial and integer power need n >= 0")
            },
            NumericError::RoundingNecessary => write!(
                f,
                "rounding necessary: exact result does not fit the requested scale"
            ),
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target type")
            },
            NumericError::InvalidInput(issue) => {
                write!(f, "invalid input: could not parse value ({})", issue)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
