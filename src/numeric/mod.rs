// ============================================================================
// Numeric Module
// Error and rounding vocabulary shared by the integer and decimal cores
// ============================================================================
//
// This module provides:
// - NumericError / ParseIssue / ErrorKind: failure reporting for every operation
// - RoundingMode: the eight decimal rounding rules
//
// Design principles:
// - Fallible arithmetic returns Result (no panics)
// - Errors are Copy and carry no allocation

mod errors;
mod rounding;

pub use errors::{ErrorKind, NumericError, NumericResult, ParseIssue};
pub use rounding::RoundingMode;
