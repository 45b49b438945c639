//! Currency display helpers. Amounts are never converted, only labelled.

use rust_decimal::Decimal;

pub const DEFAULT_CURRENCY: &str = "PKR";

/// Format an amount with two decimals and thousands separators: `PKR 1,234.56`
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let negative = amount < Decimal::ZERO;
    let fixed = format!("{:.2}", amount.abs().round_dp(2));
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-{currency} {with_commas}.{dec_part}")
    } else {
        format!("{currency} {with_commas}.{dec_part}")
    }
}
