// ============================================================================
// Percent / VAT Calculator
// ============================================================================

use crate::numeric::{ensure_finite, parse_operand, CalcError, CalcResult};

/// `amount * rate / 100`
#[inline]
pub fn percent_of(amount: f64, rate: f64) -> f64 {
    amount * rate / 100.0
}

/// `amount` plus `rate` percent of it
#[inline]
pub fn add_percent(amount: f64, rate: f64) -> f64 {
    amount + percent_of(amount, rate)
}

/// Add VAT on top of a net amount
#[inline]
pub fn vat_inclusive(amount_exclusive: f64, vat_rate: f64) -> f64 {
    amount_exclusive * (1.0 + vat_rate / 100.0)
}

/// Extract the net amount from a VAT-inclusive amount
#[inline]
pub fn vat_exclusive(amount_inclusive: f64, vat_rate: f64) -> f64 {
    amount_inclusive / (1.0 + vat_rate / 100.0)
}

/// VAT contained in a VAT-inclusive amount
#[inline]
pub fn vat_amount(amount_inclusive: f64, vat_rate: f64) -> f64 {
    amount_inclusive - vat_exclusive(amount_inclusive, vat_rate)
}

/// Amount and rate as typed into the percent widget, both parsed.
///
/// Building one fails as soon as either field is not a number, so the widget
/// never shows a result computed from a half-typed input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentQuery {
    pub amount: f64,
    pub rate: f64,
}

impl PercentQuery {
    pub fn new(amount: f64, rate: f64) -> Self {
        Self { amount, rate }
    }

    /// Parse both fields.
    ///
    /// # Errors
    /// `Parse` if either text is not a finite number.
    pub fn parse(amount: &str, rate: &str) -> CalcResult<Self> {
        Ok(Self {
            amount: parse_operand(amount)?,
            rate: parse_operand(rate)?,
        })
    }

    pub fn percent_of(&self) -> CalcResult<f64> {
        ensure_finite(percent_of(self.amount, self.rate))
    }

    pub fn add_percent(&self) -> CalcResult<f64> {
        ensure_finite(add_percent(self.amount, self.rate))
    }

    pub fn vat_inclusive(&self) -> CalcResult<f64> {
        ensure_finite(vat_inclusive(self.amount, self.rate))
    }

    /// # Errors
    /// `DivisionByZero` for a rate of exactly -100%.
    pub fn vat_exclusive(&self) -> CalcResult<f64> {
        self.check_divisor()?;
        ensure_finite(vat_exclusive(self.amount, self.rate))
    }

    /// # Errors
    /// `DivisionByZero` for a rate of exactly -100%.
    pub fn vat_amount(&self) -> CalcResult<f64> {
        self.check_divisor()?;
        ensure_finite(vat_amount(self.amount, self.rate))
    }

    fn check_divisor(&self) -> CalcResult<()> {
        if 1.0 + self.rate / 100.0 == 0.0 {
            tracing::warn!(rate = self.rate, "VAT rate zeroes the divisor");
            return Err(CalcError::DivisionByZero);
        }
        Ok(())
    }
}

/// All VAT figures the widget shows for one amount and rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VatBreakdown {
    /// Amount with VAT added on top
    pub with_vat: f64,
    /// Amount treated as gross, VAT removed
    pub without_vat: f64,
    /// VAT contained in the gross amount
    pub vat: f64,
}

impl VatBreakdown {
    pub fn compute(query: &PercentQuery) -> CalcResult<Self> {
        Ok(Self {
            with_vat: query.vat_inclusive()?,
            without_vat: query.vat_exclusive()?,
            vat: query.vat_amount()?,
        })
    }
}
