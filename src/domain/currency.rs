// ============================================================================
// Currency Domain Model
// ============================================================================

use crate::numeric::{CalcError, CalcResult};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// ISO 4217 codes the converter knows how to name.
///
/// Knowing a code does not imply a rate for it: lookups go through a
/// [`RateTable`], which may cover only a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CurrencyCode {
    Usd,
    Eur,
    Rub,
    Gbp,
    Cny,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 5] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Rub,
        CurrencyCode::Gbp,
        CurrencyCode::Cny,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Rub => "RUB",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Cny => "CNY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Rub => "₽",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Cny => "¥",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CurrencyCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(CalcError::Parse)
    }
}

/// Source and target of a conversion, as selected in the converter widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionPair {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl ConversionPair {
    pub fn new(from: CurrencyCode, to: CurrencyCode) -> Self {
        Self { from, to }
    }

    /// The swap button: exchange source and target.
    pub fn swap(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

// ============================================================================
// Rate Table
// ============================================================================

/// Fixed exchange rates expressed against a base currency.
///
/// `rate(X)` is how many units of `X` one unit of the base buys, so the base
/// itself is always exactly `1.0`. Every entry is positive and finite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RateTable {
    base: CurrencyCode,
    rates: BTreeMap<CurrencyCode, f64>,
}

impl RateTable {
    /// Create a table holding only the base currency.
    pub fn new(base: CurrencyCode) -> Self {
        let mut rates = BTreeMap::new();
        rates.insert(base, 1.0);
        Self { base, rates }
    }

    /// Builder method: add or replace a rate.
    pub fn with_rate(mut self, code: CurrencyCode, rate: f64) -> CalcResult<Self> {
        self.set_rate(code, rate)?;
        Ok(self)
    }

    /// Add or replace a rate.
    ///
    /// # Errors
    /// `InvalidRate` if `rate` is not positive and finite, or if it tries to
    /// move the base currency away from `1.0`.
    pub fn set_rate(&mut self, code: CurrencyCode, rate: f64) -> CalcResult<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(CalcError::InvalidRate);
        }
        if code == self.base && rate != 1.0 {
            return Err(CalcError::InvalidRate);
        }
        self.rates.insert(code, rate);
        Ok(())
    }

    /// Look up a rate.
    ///
    /// # Errors
    /// `UnknownCurrency(code)` when the table has no entry for `code`.
    pub fn rate(&self, code: CurrencyCode) -> CalcResult<f64> {
        self.rates
            .get(&code)
            .copied()
            .ok_or(CalcError::UnknownCurrency(code))
    }

    pub fn base(&self) -> CurrencyCode {
        self.base
    }

    pub fn contains(&self, code: CurrencyCode) -> bool {
        self.rates.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (CurrencyCode, f64)> + '_ {
        self.rates.iter().map(|(code, rate)| (*code, *rate))
    }

    /// Check the table invariants.
    ///
    /// Tables built through `set_rate` always pass; this exists for tables
    /// that arrive through deserialization.
    pub fn validate(&self) -> Result<(), String> {
        match self.rates.get(&self.base) {
            Some(rate) if *rate == 1.0 => {}
            Some(_) => return Err(format!("Base currency {} must have rate 1", self.base)),
            None => return Err(format!("Base currency {} missing from table", self.base)),
        }

        for (code, rate) in &self.rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(format!("Rate for {} must be positive and finite", code));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Tables
// ============================================================================

impl RateTable {
    /// Sample rates shown by the converter widget, based on USD.
    /// - EUR: 0.92
    /// - RUB: 95.5
    pub fn usd_sample() -> Self {
        let mut table = Self::new(CurrencyCode::Usd);
        table.rates.insert(CurrencyCode::Eur, 0.92);
        table.rates.insert(CurrencyCode::Rub, 95.5);
        table
    }

    /// The USD sample re-expressed against EUR.
    /// - USD: 1 / 0.92
    /// - RUB: 95.5 / 0.92
    pub fn eur_sample() -> Self {
        let mut table = Self::new(CurrencyCode::Eur);
        table.rates.insert(CurrencyCode::Usd, 1.0 / 0.92);
        table.rates.insert(CurrencyCode::Rub, 95.5 / 0.92);
        table
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::usd_sample()
    }
}
