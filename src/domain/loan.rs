// ============================================================================
// Loan Domain Model
// ============================================================================

use crate::engine::loan;
use crate::numeric::{CalcError, CalcResult};
use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Loan terms picked on the slider page.
///
/// Not persisted anywhere: rebuilt on every slider movement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: f64,

    /// Number of monthly payments
    pub term_months: u32,

    /// Nominal annual rate as a fraction (0.18 for 18%)
    pub annual_rate: f64,
}

impl LoanTerms {
    /// Create validated loan terms.
    ///
    /// # Errors
    /// `InvalidLoanTerms` unless `principal > 0`, `term_months > 0` and
    /// `annual_rate` lies in `[0, 1]`.
    pub fn new(principal: f64, term_months: u32, annual_rate: f64) -> CalcResult<Self> {
        let terms = Self {
            principal,
            term_months,
            annual_rate,
        };
        terms.validate()?;
        Ok(terms)
    }

    pub fn validate(&self) -> CalcResult<()> {
        let principal_ok = self.principal.is_finite() && self.principal > 0.0;
        let rate_ok = (0.0..=1.0).contains(&self.annual_rate);

        if principal_ok && rate_ok && self.term_months > 0 {
            Ok(())
        } else {
            Err(CalcError::InvalidLoanTerms)
        }
    }

    /// Monthly rate (`annual_rate / 12`).
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Fixed monthly payment, or a non-finite value for degenerate terms.
    pub fn monthly_payment(&self) -> f64 {
        loan::monthly_payment(self.principal, self.annual_rate, self.term_months)
    }

    /// Everything the slider page shows for these terms.
    pub fn quote(&self, start: NaiveDate) -> CalcResult<LoanQuote> {
        loan::quote(self, start)
    }
}

/// Derived figures for a set of loan terms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanQuote {
    pub terms: LoanTerms,
    pub monthly_payment: f64,

    /// `monthly_payment * term_months`
    pub total_repayment: f64,

    /// `total_repayment - principal`
    pub total_interest: f64,

    /// Date of the last payment: start date plus the term in calendar months
    pub end_date: NaiveDate,
}

// ============================================================================
// Slider Range
// ============================================================================

/// Bounds and step of a slider input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl LoanRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Snap a raw slider value onto the grid `min + k * step` within bounds.
    ///
    /// Non-finite input lands on `min`. A non-positive step only bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }

        let bounded = value.max(self.min).min(self.max);
        if self.step <= 0.0 {
            return bounded;
        }

        let steps = ((bounded - self.min) / self.step).round();
        (self.min + steps * self.step).max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err("Range bounds must be finite".to_string());
        }
        if self.min > self.max {
            return Err("Range minimum cannot exceed maximum".to_string());
        }
        if self.step <= 0.0 {
            return Err("Range step must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_validation() {
        assert!(LoanTerms::new(100_000.0, 12, 0.18).is_ok());
        assert!(LoanTerms::new(1200.0, 12, 0.0).is_ok());

        assert_eq!(
            LoanTerms::new(0.0, 12, 0.18),
            Err(CalcError::InvalidLoanTerms)
        );
        assert_eq!(
            LoanTerms::new(1000.0, 0, 0.18),
            Err(CalcError::InvalidLoanTerms)
        );
        assert_eq!(
            LoanTerms::new(1000.0, 12, 1.5),
            Err(CalcError::InvalidLoanTerms)
        );
        assert_eq!(
            LoanTerms::new(f64::NAN, 12, 0.18),
            Err(CalcError::InvalidLoanTerms)
        );
    }

    #[test]
    fn test_monthly_rate() {
        let terms = LoanTerms::new(100_000.0, 12, 0.18).unwrap();
        assert!((terms.monthly_rate() - 0.015).abs() < 1e-15);
    }

    #[test]
    fn test_range_clamp() {
        let amount = LoanRange::new(1000.0, 100_000.0, 1000.0);
        assert_eq!(amount.clamp(500.0), 1000.0);
        assert_eq!(amount.clamp(250_000.0), 100_000.0);
        assert_eq!(amount.clamp(41_400.0), 41_000.0);
        assert_eq!(amount.clamp(41_600.0), 42_000.0);
        assert_eq!(amount.clamp(f64::NAN), 1000.0);
    }

    #[test]
    fn test_range_validation() {
        assert!(LoanRange::new(1.0, 12.0, 1.0).validate().is_ok());
        assert!(LoanRange::new(12.0, 1.0, 1.0).validate().is_err());
        assert!(LoanRange::new(1.0, 12.0, 0.0).validate().is_err());
    }
}
