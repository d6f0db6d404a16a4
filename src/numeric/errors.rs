// ============================================================================
// Calculation Errors
// Error types for parsing and evaluating calculator inputs
// ============================================================================

use crate::domain::CurrencyCode;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while parsing or evaluating calculator inputs.
///
/// Every variant is recoverable: the caller decides whether to suppress the
/// result or show a placeholder. None of them is ever rendered as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Input text is not a valid finite number
    Parse,
    /// Denominator evaluated to zero
    DivisionByZero,
    /// Currency code has no entry in the rate table
    UnknownCurrency(CurrencyCode),
    /// Finite inputs produced a non-finite result
    Overflow,
    /// Rate table entry is not a positive finite multiplier
    InvalidRate,
    /// Principal, term or annual rate out of range
    InvalidLoanTerms,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Parse => write!(f, "invalid input: could not parse a finite number"),
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::UnknownCurrency(code) => {
                write!(f, "unknown currency: no rate for {}", code)
            },
            CalcError::Overflow => {
                write!(f, "arithmetic overflow: result is not a finite number")
            },
            CalcError::InvalidRate => write!(f, "invalid rate: must be positive and finite"),
            CalcError::InvalidLoanTerms => write!(
                f,
                "invalid loan terms: principal and term must be positive, rate within [0, 1]"
            ),
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            CalcError::UnknownCurrency(CurrencyCode::Gbp).to_string(),
            "unknown currency: no rate for GBP"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CalcError::Parse, CalcError::Parse);
        assert_ne!(CalcError::Parse, CalcError::Overflow);
        assert_ne!(
            CalcError::UnknownCurrency(CurrencyCode::Usd),
            CalcError::UnknownCurrency(CurrencyCode::Eur)
        );
    }
}
