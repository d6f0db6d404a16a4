// ============================================================================
// Engine Module
// Contains the arithmetic core and the keypad session built on it
// ============================================================================

mod calculator;
mod converter;
mod evaluator;
mod percent;

pub mod loan;

pub use calculator::{BasicCalculator, EvaluationState, Key};
pub use converter::{convert, convert_text, cross_rate};
pub use evaluator::{
    apply_operator, checked_apply_operator, checked_finalize, evaluate_sequence, finalize,
    Operator,
};
pub use loan::monthly_payment;
pub use percent::{
    add_percent, percent_of, vat_amount, vat_exclusive, vat_inclusive, PercentQuery, VatBreakdown,
};
