// ============================================================================
// Interfaces Module
// Backend capability contracts
// ============================================================================

mod arithmetic;

pub use arithmetic::{Arithmetic, DecimalArithmetic, IntegerArithmetic};
