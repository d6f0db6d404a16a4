// ============================================================================
// Amortized Loan Payment
// Standard annuity formula with a straight-line fallback for zero interest
// ============================================================================

use crate::domain::{LoanQuote, LoanTerms};
use crate::numeric::{ensure_finite, CalcError, CalcResult};
use chrono::{Months, NaiveDate};

/// Fixed monthly payment that fully amortizes `principal` over `term_months`.
///
/// `r = annual_rate / 12`, `payment = P * r * (1+r)^n / ((1+r)^n - 1)`.
/// A zero rate falls back to `P / n`. A zero term returns `NaN` rather than
/// panicking; the inputs are not otherwise validated.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return f64::NAN;
    }

    let n = term_months as f64;
    let monthly_rate = annual_rate / 12.0;

    if monthly_rate == 0.0 {
        return principal / n;
    }

    // (1+r)^n - 1 computed without cancellation; 1.0 + r rounds to 1.0 for tiny r
    let growth = (n * monthly_rate.ln_1p()).exp_m1();
    if growth == 0.0 {
        return principal / n;
    }

    principal * monthly_rate * (1.0 + growth) / growth
}

/// Build the figures shown on the loan page.
///
/// # Errors
/// - `InvalidLoanTerms` if the terms do not validate
/// - `Overflow` if the payment or the end date cannot be represented
pub fn quote(terms: &LoanTerms, start: NaiveDate) -> CalcResult<LoanQuote> {
    terms.validate()?;

    let payment = ensure_finite(monthly_payment(
        terms.principal,
        terms.annual_rate,
        terms.term_months,
    ))?;
    let total_repayment = ensure_finite(payment * terms.term_months as f64)?;
    let total_interest = total_repayment - terms.principal;

    // Month-end starts clamp to the last day of the target month
    let end_date = start
        .checked_add_months(Months::new(terms.term_months))
        .ok_or(CalcError::Overflow)?;

    tracing::debug!(
        principal = terms.principal,
        term_months = terms.term_months,
        annual_rate = terms.annual_rate,
        payment,
        %end_date,
        "loan quote"
    );

    Ok(LoanQuote {
        terms: *terms,
        monthly_payment: payment,
        total_repayment,
        total_interest,
        end_date,
    })
}
