// ============================================================================
// Numeric Errors
// Error types for the checked complex-number API
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported by the `checked_*` operations and conversions.
///
/// The plain operators and functions never produce these; they let
/// IEEE special values flow through instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Divisor was exactly (0, 0)
    DivisionByZero,
    /// Logarithm (or a power routed through it) of (0, 0)
    LogarithmOfZero,
    /// Finite input produced a non-finite result
    Overflow,
    /// Narrowing to a real scalar with a non-zero imaginary part
    NotReal,
    /// A component is NaN or infinite where a finite value is required
    NonFinite,
    /// Input value could not be represented as `f64`
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::LogarithmOfZero => write!(f, "logarithm of zero is undefined"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result is not finite")
            },
            NumericError::NotReal => write!(f, "not real: imaginary part is non-zero"),
            NumericError::NonFinite => write!(f, "non-finite component"),
            NumericError::InvalidInput => {
                write!(f, "invalid input: value not representable as f64")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
