// ============================================================================
// Math Configuration
// Default scales, rounding and Newton-Raphson tuning for derived operations
// ============================================================================

use crate::numeric::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables for operations that cannot be exact: decimal division without an
/// explicit scale and the square root.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MathConfig {
    /// Result scale for `BigDecimal / BigDecimal` and `divide_in`
    pub division_scale: u32,

    /// Rounding applied when the quotient does not fit `division_scale`
    pub rounding_mode: RoundingMode,

    /// Digits after the point in a square root result
    pub sqrt_scale: u32,

    /// Extra digits carried by the Newton iterations past `sqrt_scale`
    /// - Absorbs rounding in the final step
    pub sqrt_guard_digits: u32,

    /// Working precision of the first Newton step, in fractional digits.
    /// Matches the ~17 digits an `f64` initial guess already provides.
    pub sqrt_initial_precision: u32,

    /// Hard cap on Newton steps at the final working scale
    pub sqrt_max_iterations: u32,
}

impl MathConfig {
    /// Defaults: scale 10, HalfUp, 4 guard digits, doubling from 18 digits.
    pub const fn new() -> Self {
        Self {
            division_scale: 10,
            rounding_mode: RoundingMode::HalfUp,
            sqrt_scale: 10,
            sqrt_guard_digits: 4,
            sqrt_initial_precision: 18,
            sqrt_max_iterations: 64,
        }
    }

    /// Builder method: Set the default division scale
    pub fn with_division_scale(mut self, scale: u32) -> Self {
        self.division_scale = scale;
        self
    }

    /// Builder method: Set the default rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// Builder method: Set the square root result scale
    pub fn with_sqrt_scale(mut self, scale: u32) -> Self {
        self.sqrt_scale = scale;
        self
    }

    /// Builder method: Set the guard digits used by sqrt
    pub fn with_sqrt_guard_digits(mut self, digits: u32) -> Self {
        self.sqrt_guard_digits = digits;
        self
    }

    /// Builder method: Set the first Newton step's precision
    pub fn with_sqrt_initial_precision(mut self, digits: u32) -> Self {
        self.sqrt_initial_precision = digits;
        self
    }

    /// Builder method: Set the iteration cap
    pub fn with_sqrt_max_iterations(mut self, iterations: u32) -> Self {
        self.sqrt_max_iterations = iterations;
        self
    }

    /// Working scale of the final Newton steps.
    #[inline]
    pub fn sqrt_working_scale(&self) -> u32 {
        self.sqrt_scale.saturating_add(self.sqrt_guard_digits)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.sqrt_initial_precision == 0 {
            return Err("Initial sqrt precision must be positive".to_string());
        }

        if self.sqrt_max_iterations == 0 {
            return Err("Sqrt iteration limit must be positive".to_string());
        }

        if self.rounding_mode == RoundingMode::Unnecessary {
            tracing::warn!(
                "division with RoundingMode::Unnecessary fails on every inexact quotient"
            );
        }

        Ok(())
    }
}

impl Default for MathConfig {
    fn default() -> Self {
        Self::new()
    }
}
