//! Error taxonomy for dimension algebra and quantity arithmetic.

use thiserror::Error;

/// Errors raised by dimension construction, reference parsing, arithmetic
/// and formatting.
///
/// Every variant is reported synchronously by the call that violated the
/// contract. Nothing is retried or recovered inside the crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantityError {
    #[error("'{0}' is not an ISQ base quantity")]
    InvalidDimensionKey(String),

    #[error("Cannot {op} values with different quantity dimensions: '{lhs}' and '{rhs}'")]
    IncompatibleDimensions {
        op: String,
        lhs: String,
        rhs: String,
    },

    #[error("{function} only applies to quantities of dimension 1, got '{reference}'")]
    DimensionalityError { function: String, reference: String },

    #[error("Invalid unit reference token '{token}' at position {position}: {message}")]
    InvalidReference {
        token: String,
        position: usize,
        message: String,
    },

    #[error("Exponent out of range in {op} of '{operands}'")]
    ExponentOverflow { op: String, operands: String },

    #[error("No SI prefix for 10^{0}")]
    PrefixOutOfRange(i32),

    #[error("Invalid format options: {0}")]
    InvalidOptions(String),
}

/// Result type for quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

impl QuantityError {
    pub(crate) fn incompatible(op: &str, lhs: impl ToString, rhs: impl ToString) -> Self {
        Self::IncompatibleDimensions {
            op: op.to_string(),
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }

    pub(crate) fn overflow(op: &str, operands: impl ToString) -> Self {
        Self::ExponentOverflow {
            op: op.to_string(),
            operands: operands.to_string(),
        }
    }
}
