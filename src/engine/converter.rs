// ============================================================================
// Currency Converter
// Converts through the rate table's base currency
// ============================================================================

use crate::domain::{ConversionPair, CurrencyCode, RateTable};
use crate::numeric::{ensure_finite, parse_operand, require_finite, CalcResult};

/// Convert `amount` from one currency to another.
///
/// Normalizes to the base unit (`amount / rate(from)`) then scales to the
/// target (`* rate(to)`). Works for any base, and `from == to` returns the
/// amount up to rounding.
///
/// # Errors
/// - `Parse` if `amount` is not finite
/// - `UnknownCurrency` if either code has no rate
///
/// # Example
/// ```
/// use calc_engine::domain::{CurrencyCode, RateTable};
/// use calc_engine::engine::convert;
///
/// let rates = RateTable::usd_sample();
/// let usd = convert(1000.0, CurrencyCode::Rub, CurrencyCode::Usd, &rates).unwrap();
/// assert!((usd - 10.471).abs() < 0.001);
/// ```
pub fn convert(
    amount: f64,
    from: CurrencyCode,
    to: CurrencyCode,
    rates: &RateTable,
) -> CalcResult<f64> {
    let amount = require_finite(amount)?;
    let from_rate = rates.rate(from)?;
    let to_rate = rates.rate(to)?;

    let in_base = amount / from_rate;
    let result = ensure_finite(in_base * to_rate)?;

    tracing::trace!(%from, %to, amount, result, "converted");
    Ok(result)
}

/// Convert text from the amount field.
pub fn convert_text(
    amount: &str,
    pair: ConversionPair,
    rates: &RateTable,
) -> CalcResult<f64> {
    let amount = parse_operand(amount)?;
    convert(amount, pair.from, pair.to, rates)
}

/// Cross rate: units of `to` per one unit of `from`.
pub fn cross_rate(from: CurrencyCode, to: CurrencyCode, rates: &RateTable) -> CalcResult<f64> {
    convert(1.0, from, to, rates)
}
