// ============================================================================
// Basic Usage Example
// ============================================================================

use calc_engine::prelude::*;
use chrono::Local;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Calc Engine Example ===\n");

    let config = CalculatorConfig::default();
    if let Err(reason) = config.validate() {
        eprintln!("Invalid configuration: {}", reason);
        return;
    }
    let digits = config.display_fraction_digits;

    // Keypad session, evaluated strictly left to right
    println!("Basic calculator:");
    let mut calc = BasicCalculator::new(Arc::new(LoggingEventHandler));
    for keys in ["2+3×4=", "C7÷2=", "C5÷0="] {
        calc.press_str(keys);
        match calc.error() {
            Some(err) => println!("  {:<8} -> — ({})", keys, err),
            None => println!("  {:<8} -> {}", keys, calc.display()),
        }
    }

    // Percent and VAT
    println!("\nPercent / VAT:");
    for (amount, rate) in [("1000", "20"), ("1000", "abc")] {
        match PercentQuery::parse(amount, rate) {
            Ok(query) => {
                let shown = |r: CalcResult<f64>| {
                    r.ok()
                        .and_then(|v| format_amount(v, digits))
                        .unwrap_or_else(|| "—".to_string())
                };
                println!("  {}% of {} = {}", rate, amount, shown(query.percent_of()));
                println!("  {} + {}% = {}", amount, rate, shown(query.add_percent()));
                println!("  with VAT     = {}", shown(query.vat_inclusive()));
                println!("  without VAT  = {}", shown(query.vat_exclusive()));
                println!("  VAT amount   = {}", shown(query.vat_amount()));
            },
            Err(err) => println!("  {} / {}: {}", amount, rate, err),
        }
    }

    // Currency conversion
    println!("\nCurrency converter (rates against {}):", config.rates.base());
    for (code, rate) in config.rates.iter() {
        println!(
            "  {} {}: {}",
            code.symbol(),
            code,
            format_fixed(rate, 2).unwrap_or_default()
        );
    }

    let pair = ConversionPair::new(CurrencyCode::Rub, CurrencyCode::Usd);
    for pair in [pair, pair.swap(), ConversionPair::new(CurrencyCode::Gbp, CurrencyCode::Usd)] {
        match convert_text("1000", pair, &config.rates) {
            Ok(result) => println!(
                "  1000 {} = {} {}",
                pair.from,
                format_fixed(result, 2).unwrap_or_default(),
                pair.to.symbol()
            ),
            Err(err) => println!("  1000 {} -> {}: {}", pair.from, pair.to, err),
        }
    }

    // Loan page
    println!("\nLoan:");
    let today = Local::now().date_naive();
    for (amount, months) in [(100_000.0, 12.0), (42_300.0, 6.0), (1_000.0, 1.0)] {
        let principal = config.loan.amount.clamp(amount);
        let term = config.loan.term_months.clamp(months) as u32;

        let quote = LoanTerms::new(principal, term, config.loan.annual_rate)
            .and_then(|terms| terms.quote(today));

        match quote {
            Ok(q) => println!(
                "  {} for {} months: {}/month, {} total, until {}",
                format_amount(principal, 0).unwrap_or_default(),
                term,
                format_amount(q.monthly_payment, 0).unwrap_or_default(),
                format_amount(q.total_repayment, 0).unwrap_or_default(),
                q.end_date
            ),
            Err(err) => println!("  {} for {} months: {}", principal, term, err),
        }
    }
}
