// ============================================================================
// Sequential Evaluator
// Left-to-right binary operator reduction with no precedence
// ============================================================================

use crate::numeric::{ensure_finite, CalcError, CalcResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary operator on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Apply with IEEE semantics: dividing by zero gives `±inf` or `NaN`.
    #[inline]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
        }
    }

    /// Apply, reporting a zero divisor or a non-finite result as an error.
    ///
    /// # Errors
    /// - `DivisionByZero` for `Divide` with `b == 0`
    /// - `Overflow` if the result is not finite
    pub fn checked_apply(self, a: f64, b: f64) -> CalcResult<f64> {
        if self == Operator::Divide && b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        ensure_finite(self.apply(a, b))
    }

    /// Keypad label
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Accepts keypad labels and their ASCII equivalents (`*`, `/`).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '×' | '*' | 'x' => Some(Operator::Multiply),
            '÷' | '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Reduction
// ============================================================================

/// Operator press.
///
/// With no running value yet, `current` simply becomes the running value.
/// Otherwise the pending operator folds `current` into it. Callers pass the
/// operator that was pending, not the one just pressed.
#[inline]
pub fn apply_operator(previous: Option<f64>, current: f64, op: Operator) -> f64 {
    match previous {
        None => current,
        Some(prev) => op.apply(prev, current),
    }
}

/// Equals press: fold `current` into the running value if an operator is
/// pending, otherwise leave `current` unchanged.
#[inline]
pub fn finalize(previous: Option<f64>, current: f64, op: Option<Operator>) -> f64 {
    match (previous, op) {
        (Some(prev), Some(op)) => op.apply(prev, current),
        _ => current,
    }
}

/// [`apply_operator`] with zero-divisor and overflow detection.
pub fn checked_apply_operator(
    previous: Option<f64>,
    current: f64,
    op: Operator,
) -> CalcResult<f64> {
    match previous {
        None => ensure_finite(current),
        Some(prev) => op.checked_apply(prev, current),
    }
}

/// [`finalize`] with zero-divisor and overflow detection.
pub fn checked_finalize(
    previous: Option<f64>,
    current: f64,
    op: Option<Operator>,
) -> CalcResult<f64> {
    match (previous, op) {
        (Some(prev), Some(op)) => op.checked_apply(prev, current),
        _ => ensure_finite(current),
    }
}

/// Evaluate a whole keypad sequence strictly left to right.
///
/// `2 + 3 × 4` is `(2 + 3) × 4 = 20`; there is no precedence and that is
/// how the keypad has always behaved.
///
/// # Example
/// ```
/// use calc_engine::engine::{evaluate_sequence, Operator};
///
/// let result = evaluate_sequence(2.0, &[(Operator::Add, 3.0), (Operator::Multiply, 4.0)]);
/// assert_eq!(result, Ok(20.0));
/// ```
pub fn evaluate_sequence(first: f64, steps: &[(Operator, f64)]) -> CalcResult<f64> {
    let mut running = ensure_finite(first)?;
    for (op, operand) in steps {
        running = op.checked_apply(running, *operand)?;
    }
    Ok(running)
}
