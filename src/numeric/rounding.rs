// ============================================================================
// Rounding Modes
// Decides whether a truncated quotient moves one unit away from zero
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::integer::BigInteger;
use std::cmp::Ordering;
use std::fmt;

/// How to round when a result has more digits than the requested scale.
///
/// The semantics match the usual decimal rounding modes: every mode is a
/// pure function of the truncated result, the size of the discarded part
/// relative to one half unit, and the sign of the exact result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Towards zero (truncation)
    Down,
    /// Towards positive infinity
    Ceiling,
    /// Towards negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    #[default]
    HalfUp,
    /// Nearest neighbour, ties towards zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour
    HalfEven,
    /// The result must be exact; any discarded digit is an error
    Unnecessary,
}

impl RoundingMode {
    /// Every mode, ordered by legacy code.
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    /// Stable integer code (0 = Up ... 7 = Unnecessary).
    pub const fn legacy_code(self) -> u8 {
        match self {
            RoundingMode::Up => 0,
            RoundingMode::Down => 1,
            RoundingMode::Ceiling => 2,
            RoundingMode::Floor => 3,
            RoundingMode::HalfUp => 4,
            RoundingMode::HalfDown => 5,
            RoundingMode::HalfEven => 6,
            RoundingMode::Unnecessary => 7,
        }
    }

    /// Look up a mode by its legacy code.
    pub fn from_legacy_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Decide whether the truncated result must grow by one unit in magnitude.
    ///
    /// Only called when the discarded remainder is nonzero.
    ///
    /// # Arguments
    /// * `truncated` - The quotient truncated toward zero
    /// * `half_cmp` - `2 × |remainder|` compared against `|divisor|`
    /// * `negative` - Whether the exact result is negative
    ///
    /// # Errors
    /// Returns `RoundingNecessary` for `Unnecessary`.
    pub fn should_increment(
        self,
        truncated: &BigInteger,
        half_cmp: Ordering,
        negative: bool,
    ) -> NumericResult<bool> {
        let increment = match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => half_cmp != Ordering::Less,
            RoundingMode::HalfDown => half_cmp == Ordering::Greater,
            RoundingMode::HalfEven => match half_cmp {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => truncated.test_bit(0),
            },
            RoundingMode::Unnecessary => return Err(NumericError::RoundingNecessary),
        };
        Ok(increment)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Unnecessary => "UNNECESSARY",
        };
        f.pad(name)
    }
}
