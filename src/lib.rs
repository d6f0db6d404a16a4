// ============================================================================
// Calc Engine Library
// Arithmetic core for calculator widgets and the loan slider page
// ============================================================================

//! # Calc Engine
//!
//! The pure arithmetic behind a set of calculator widgets.
//!
//! ## Features
//!
//! - **Sequential evaluator**: strict left-to-right reduction, no precedence
//!   (`2 + 3 × 4 = 20`)
//! - **Percent and VAT** formulas: percent of, add percent, add/extract VAT
//! - **Currency conversion** through an injected, fixed rate table
//! - **Loan payments** with the annuity formula and a zero-rate fallback
//! - **Explicit invalidity**: unparsable text and non-finite results are
//!   errors, never `0`, `NaN` or `inf` on screen
//!
//! ## Example
//!
//! ```rust
//! use calc_engine::prelude::*;
//!
//! // Keypad session: evaluates left to right
//! let mut calc = BasicCalculator::default();
//! calc.press_str("2+3×4=");
//! assert_eq!(calc.display(), "20");
//!
//! // Percent / VAT from text fields
//! let query = PercentQuery::parse("1000", "20").unwrap();
//! assert_eq!(query.add_percent(), Ok(1200.0));
//!
//! // Currency conversion against the configured table
//! let config = CalculatorConfig::default();
//! let usd = convert(1000.0, CurrencyCode::Rub, CurrencyCode::Usd, &config.rates).unwrap();
//! println!("1000 RUB = {} USD", format_amount(usd, 2).unwrap());
//!
//! // Loan page
//! let payment = monthly_payment(100_000.0, config.loan.annual_rate, 12);
//! assert!((payment - 9168.0).abs() < 1.0);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalculatorConfig, ConversionPair, CurrencyCode, LoanConfig, LoanQuote, LoanRange,
        LoanTerms, RateTable,
    };
    pub use crate::engine::{
        add_percent, apply_operator, convert, convert_text, evaluate_sequence, finalize,
        monthly_payment, percent_of, vat_amount, vat_exclusive, vat_inclusive, BasicCalculator,
        EvaluationState, Key, Operator, PercentQuery, VatBreakdown,
    };
    pub use crate::interfaces::{
        CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{format_amount, format_fixed, parse_operand, CalcError, CalcResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use chrono::NaiveDate;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_widgets() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());

        // Basic calculator
        let mut calc = BasicCalculator::new(Arc::new(LoggingEventHandler));
        calc.press_str("2+3×4=");
        assert_eq!(calc.display(), "20");

        // Percent widget with the default VAT preset
        let vat_rate = config.default_vat_rate.to_string();
        let query = PercentQuery::parse("1200", &vat_rate).unwrap();
        let breakdown = VatBreakdown::compute(&query).unwrap();
        assert_eq!(
            format_amount(breakdown.vat, config.display_fraction_digits).as_deref(),
            Some("200")
        );

        // Converter
        let pair = ConversionPair::new(CurrencyCode::Rub, CurrencyCode::Usd);
        let usd = convert_text("1000", pair, &config.rates).unwrap();
        assert_eq!(format_fixed(usd, 2).as_deref(), Some("10.47"));

        // Loan page: slider values snap onto the grid before quoting
        let amount = config.loan.amount.clamp(99_700.0);
        let months = config.loan.term_months.clamp(12.4) as u32;
        let terms = LoanTerms::new(amount, months, config.loan.annual_rate).unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let quote = terms.quote(start).unwrap();

        assert_eq!(amount, 100_000.0);
        assert_eq!(months, 12);
        assert!((quote.monthly_payment - 9167.06).abs() < 1.0);
        assert_eq!(quote.end_date, NaiveDate::from_ymd_opt(2027, 10, 17).unwrap());
    }

    #[test]
    fn test_invalid_input_never_becomes_zero() {
        let config = CalculatorConfig::default();
        let pair = ConversionPair::new(CurrencyCode::Usd, CurrencyCode::Eur);

        assert_eq!(PercentQuery::parse("abc", "20"), Err(CalcError::Parse));
        assert_eq!(convert_text("", pair, &config.rates), Err(CalcError::Parse));
        assert_eq!(parse_operand("--1"), Err(CalcError::Parse));
    }
}
