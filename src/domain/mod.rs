// ============================================================================
// Domain Module
// Contains value types and configuration shared by the calculators
// ============================================================================

pub mod config;
pub mod currency;
pub mod loan;

pub use config::{CalculatorConfig, LoanConfig};
pub use currency::{ConversionPair, CurrencyCode, RateTable};
pub use loan::{LoanQuote, LoanRange, LoanTerms};
