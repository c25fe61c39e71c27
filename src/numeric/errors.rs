// ============================================================================
// Numeric Errors
// Error types surfaced by the Result-returning fixed-point APIs
// ============================================================================

use std::fmt;

/// Errors that can be reported for a hex fixed-point value.
///
/// The arithmetic itself never returns these: faults travel inside the value
/// as a [`Tag`](super::Tag). This enum is what [`Fixedpoint::checked`] and
/// the `FromStr` / `parse_hex` surfaces turn those tags into.
///
/// [`Fixedpoint::checked`]: super::Fixedpoint::checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text is not a well-formed hex token
    InvalidInput,
    /// Whole or fractional field has more than 16 hex digits
    PrecisionLoss,
    /// Value is tagged `Error`
    Invalid,
    /// Non-negative result exceeded 64 whole bits
    PositiveOverflow,
    /// Negative result exceeded 64 whole bits
    NegativeOverflow,
    /// Non-negative result lost fractional bits
    PositiveUnderflow,
    /// Negative result lost fractional bits
    NegativeUnderflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: not a hex fixed-point token"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: a field has more than 16 hex digits"
            ),
            NumericError::Invalid => write!(f, "value is in the error state"),
            NumericError::PositiveOverflow => {
                write!(f, "positive overflow: magnitude exceeded 64 whole bits")
            },
            NumericError::NegativeOverflow => {
                write!(f, "negative overflow: magnitude exceeded 64 whole bits")
            },
            NumericError::PositiveUnderflow => {
                write!(f, "positive underflow: fractional bits were lost")
            },
            NumericError::NegativeUnderflow => {
                write!(f, "negative underflow: fractional bits were lost")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
