// ============================================================================
// Numeric Module
// Double-precision complex arithmetic
// ============================================================================
//
// This module provides:
// - Complex: Cartesian (re, im) value type with operators and polar queries
// - Transcendental functions: exp, ln, pow, sqrt (principal branch)
// - NumericError: Error types for the checked API
//
// Design principles:
// - Plain IEEE f64 semantics: NaN and ±∞ propagate, nothing panics
// - Every operation returns a new value, operands are never mutated
// - One angle routine (`Complex::arg`) shared by every branch-dependent function
// - Opt-in `checked_*` variants report degenerate inputs as errors

mod complex;
mod errors;
mod transcendental;

pub use complex::Complex;
pub use errors::{NumericError, NumericResult};
