//! Presale exchange-rate estimation.
//!
//! Pure and synchronous: converts a PaymentToken amount typed by the user
//! into the SaleToken quantity it buys at the fixed presale price.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::amount::format_2dp;

/// PaymentToken paid per SaleToken in this deployment.
pub const PRESALE_PRICE: Decimal = dec!(0.10);

/// Placeholder shown whenever no meaningful estimate exists.
pub const ZERO_ESTIMATE: &str = "0.00";

/// Estimate the SaleToken output for `input` at `price`, formatted to two
/// decimal places.
///
/// Empty, non-numeric and non-positive input yield `"0.00"`, and so does a
/// zero or negative price.
///
/// ```
/// use presale::domain::rate::{estimate_sale_tokens, PRESALE_PRICE};
///
/// assert_eq!(estimate_sale_tokens("10", PRESALE_PRICE), "100.00");
/// assert_eq!(estimate_sale_tokens("", PRESALE_PRICE), "0.00");
/// ```
#[must_use]
pub fn estimate_sale_tokens(input: &str, price: Decimal) -> String {
    if price <= Decimal::ZERO {
        return ZERO_ESTIMATE.to_string();
    }
    match parse_positive(input) {
        Some(amount) => amount
            .checked_div(price)
            .map_or_else(|| ZERO_ESTIMATE.to_string(), format_2dp),
        None => ZERO_ESTIMATE.to_string(),
    }
}

/// Echo the typed PaymentToken amount as a two-decimal dollar value.
#[must_use]
pub fn echo_payment_amount(input: &str) -> String {
    parse_positive(input).map_or_else(|| ZERO_ESTIMATE.to_string(), format_2dp)
}

fn parse_positive(input: &str) -> Option<Decimal> {
    Decimal::from_str(input.trim())
        .ok()
        .filter(|value| *value > Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amount_divides_by_price() {
        assert_eq!(estimate_sale_tokens("10", PRESALE_PRICE), "100.00");
    }

    #[test]
    fn fractional_amount_divides_by_price() {
        assert_eq!(estimate_sale_tokens("2.5", PRESALE_PRICE), "25.00");
        assert_eq!(estimate_sale_tokens("0.123", PRESALE_PRICE), "1.23");
    }

    #[test]
    fn empty_and_non_numeric_input_yield_zero() {
        for input in ["", "   ", "abc", "1.2.3", "ten", "--1"] {
            assert_eq!(estimate_sale_tokens(input, PRESALE_PRICE), "0.00", "input {input:?}");
        }
    }

    #[test]
    fn non_positive_input_yields_zero() {
        assert_eq!(estimate_sale_tokens("0", PRESALE_PRICE), "0.00");
        assert_eq!(estimate_sale_tokens("-4", PRESALE_PRICE), "0.00");
    }

    #[test]
    fn zero_price_never_divides() {
        assert_eq!(estimate_sale_tokens("10", Decimal::ZERO), "0.00");
        assert_eq!(estimate_sale_tokens("10", dec!(-1)), "0.00");
    }

    #[test]
    fn echo_formats_input() {
        assert_eq!(echo_payment_amount("7"), "7.00");
        assert_eq!(echo_payment_amount("x"), "0.00");
    }
}
