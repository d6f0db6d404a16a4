// ============================================================================
// Calculator Configuration
// Process-wide settings the calculator widgets read, passed explicitly
// ============================================================================

use super::currency::RateTable;
use super::loan::LoanRange;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Loan Page Configuration
// ============================================================================

/// Slider ranges and pricing for the loan page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanConfig {
    /// Amount slider (principal)
    pub amount: LoanRange,

    /// Term slider, in months
    pub term_months: LoanRange,

    /// Fixed nominal annual rate offered on the page (0.18 for 18%)
    pub annual_rate: f64,
}

impl LoanConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.amount.validate()?;
        self.term_months.validate()?;

        if self.amount.min <= 0.0 {
            return Err("Loan amount must be positive".to_string());
        }
        if self.term_months.min < 1.0 || self.term_months.step.fract() != 0.0 {
            return Err("Loan term must be a whole number of months, at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.annual_rate) {
            return Err("Annual rate must be between 0 and 1".to_string());
        }

        Ok(())
    }
}

impl Default for LoanConfig {
    /// - Amount: 1 000 to 100 000, step 1 000
    /// - Term: 1 to 12 months
    /// - Rate: 18% per year
    fn default() -> Self {
        Self {
            amount: LoanRange::new(1_000.0, 100_000.0, 1_000.0),
            term_months: LoanRange::new(1.0, 12.0, 1.0),
            annual_rate: 0.18,
        }
    }
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Everything the calculator widgets need beyond user input
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Exchange rates for the currency converter
    pub rates: RateTable,

    /// VAT rate buttons, in percent
    pub vat_presets: Vec<f64>,

    /// VAT rate selected before the user picks one
    pub default_vat_rate: f64,

    /// Maximum fraction digits when displaying results
    pub display_fraction_digits: u32,

    /// Loan page settings
    pub loan: LoanConfig,
}

impl CalculatorConfig {
    /// Create a configuration around a rate table, with default VAT and loan settings
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            vat_presets: vec![10.0, 20.0],
            default_vat_rate: 20.0,
            display_fraction_digits: 2,
            loan: LoanConfig::default(),
        }
    }

    /// Builder method: Set VAT presets and the initially selected rate
    pub fn with_vat_presets(mut self, presets: Vec<f64>, default_rate: f64) -> Self {
        self.vat_presets = presets;
        self.default_vat_rate = default_rate;
        self
    }

    /// Builder method: Set display precision
    pub fn with_display_fraction_digits(mut self, digits: u32) -> Self {
        self.display_fraction_digits = digits;
        self
    }

    /// Builder method: Set loan page settings
    pub fn with_loan(mut self, loan: LoanConfig) -> Self {
        self.loan = loan;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.rates.validate()?;

        if self.vat_presets.is_empty() {
            return Err("At least one VAT preset is required".to_string());
        }
        for rate in &self.vat_presets {
            if !rate.is_finite() || *rate < 0.0 {
                return Err("VAT presets must be non-negative".to_string());
            }
        }
        if !self.vat_presets.contains(&self.default_vat_rate) {
            return Err("Default VAT rate must be one of the presets".to_string());
        }

        // rust_decimal cannot hold more than 28 fraction digits
        if self.display_fraction_digits > 28 {
            return Err("Display precision cannot exceed 28 digits".to_string());
        }

        self.loan.validate()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Ruble-market configuration
    /// - USD-based sample rates (EUR 0.92, RUB 95.5)
    /// - VAT presets 10% / 20%, 20% selected
    /// - Loan page: 1 000 to 100 000, 1 to 12 months, 18% per year
    pub fn ruble_market() -> Self {
        Self::new(RateTable::usd_sample())
    }

    /// Euro-area configuration
    /// - EUR-based rates derived from the USD sample
    /// - VAT presets 7% / 19%, 19% selected
    pub fn euro_area() -> Self {
        Self::new(RateTable::eur_sample()).with_vat_presets(vec![7.0, 19.0], 19.0)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::ruble_market()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrencyCode;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();

        assert_eq!(config.rates.base(), CurrencyCode::Usd);
        assert_eq!(config.vat_presets, vec![10.0, 20.0]);
        assert_eq!(config.default_vat_rate, 20.0);
        assert_eq!(config.loan.annual_rate, 0.18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::ruble_market()
            .with_display_fraction_digits(4)
            .with_vat_presets(vec![0.0, 5.0], 5.0);

        assert_eq!(config.display_fraction_digits, 4);
        assert_eq!(config.default_vat_rate, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let config = CalculatorConfig::default().with_vat_presets(vec![10.0, 20.0], 15.0);
        assert!(config.validate().is_err());

        let config = CalculatorConfig::default().with_vat_presets(Vec::new(), 0.0);
        assert!(config.validate().is_err());

        let mut loan = LoanConfig::default();
        loan.annual_rate = 2.0;
        let config = CalculatorConfig::default().with_loan(loan);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        let euro = CalculatorConfig::euro_area();
        assert_eq!(euro.rates.base(), CurrencyCode::Eur);
        assert_eq!(euro.rates.rate(CurrencyCode::Eur), Ok(1.0));
        assert!(euro.rates.contains(CurrencyCode::Rub));
        assert_eq!(euro.rates, RateTable::eur_sample());
        assert!(euro.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = CalculatorConfig::ruble_market();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"RUB\":95.5"));

        let parsed: CalculatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert!(parsed.validate().is_ok());
    }
}
