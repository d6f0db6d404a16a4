// ============================================================================
// Numeric Module
// Operand parsing, error taxonomy and display rounding
// ============================================================================
//
// This module provides:
// - parse_operand: text -> finite f64, or a distinct parse error
// - CalcError: error types shared by every calculator
// - format_amount / format_fixed: rounding results for display
//
// Design principles:
// - Operands are f64; invalid text is never silently zero
// - Checked entry points return Result (no panics)
// - Non-finite values never reach a display string

mod display;
mod errors;
mod operand;

pub use display::{format_amount, format_fixed, to_display_decimal};
pub use errors::{CalcError, CalcResult};
pub use operand::{ensure_finite, parse_operand};

pub(crate) use operand::require_finite;
