// ============================================================================
// Operand Parsing
// Turns user-entered text into finite operands
// ============================================================================

use super::errors::{CalcError, CalcResult};

/// Parse user-entered text into a finite operand.
///
/// Accepts the usual decimal forms (`"42"`, `"-0.5"`, `".5"`, `"5."`,
/// `"1e3"`) with surrounding whitespace. Empty text, garbage, and text that
/// names a non-finite value (`"inf"`, `"NaN"`) are all `Err(Parse)`; nothing
/// is ever coerced to zero.
///
/// # Example
/// ```
/// use calc_engine::numeric::{parse_operand, CalcError};
///
/// assert_eq!(parse_operand(" 12.5 "), Ok(12.5));
/// assert_eq!(parse_operand(""), Err(CalcError::Parse));
/// ```
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CalcError::Parse);
    }

    let value: f64 = text.parse().map_err(|_| CalcError::Parse)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Parse)
    }
}

/// Classify an already-computed value.
///
/// Finite values pass through. Anything else means the inputs were finite but
/// the arithmetic blew up, so it is reported as `Overflow`. Callers that can
/// tell a zero denominator apart check for it before calling this.
#[inline]
pub fn ensure_finite(value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Overflow)
    }
}

/// Reject non-finite inputs handed in as numbers rather than text.
#[inline]
pub(crate) fn require_finite(value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Parse)
    }
}
