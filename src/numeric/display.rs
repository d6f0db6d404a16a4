// ============================================================================
// Display Formatting
// Rounds valid results for presentation; never yields "NaN" or "inf"
// ============================================================================

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Convert a result into a `Decimal` rounded to at most `max_fraction_digits`.
///
/// Trailing zeros are dropped, so `1200.0` becomes `1200` and `10.4712...`
/// with two digits becomes `10.47`. Returns `None` for non-finite values and
/// for magnitudes `Decimal` cannot hold.
pub fn to_display_decimal(value: f64, max_fraction_digits: u32) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }

    let d = Decimal::from_f64(value)?;
    let rounded = d
        .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    // Keep "-0" out of the display
    if rounded.is_zero() {
        Some(Decimal::ZERO)
    } else {
        Some(rounded)
    }
}

/// Format a result for display with at most `max_fraction_digits` decimals.
///
/// # Example
/// ```
/// use calc_engine::numeric::format_amount;
///
/// assert_eq!(format_amount(10.471204188, 2).as_deref(), Some("10.47"));
/// assert_eq!(format_amount(f64::NAN, 2), None);
/// ```
pub fn format_amount(value: f64, max_fraction_digits: u32) -> Option<String> {
    to_display_decimal(value, max_fraction_digits).map(|d| d.to_string())
}

/// Format with exactly `fraction_digits` decimals, padding with zeros.
///
/// Used for the rate list and the converter result, which always show two
/// decimals (`"1.00"`, `"95.50"`).
pub fn format_fixed(value: f64, fraction_digits: u32) -> Option<String> {
    let mut d = to_display_decimal(value, fraction_digits)?;
    d.rescale(fraction_digits);
    Some(d.to_string())
}
