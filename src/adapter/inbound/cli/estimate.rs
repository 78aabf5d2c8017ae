//! Handler for the `estimate` command.

use serde_json::json;

use super::command::EstimateArgs;
use super::output;
use crate::domain::rate::{echo_payment_amount, estimate_sale_tokens, PRESALE_PRICE};
use crate::error::Result;

/// Print the GLF estimate for a USDT amount. Needs no network access.
pub fn execute(args: &EstimateArgs) -> Result<()> {
    let price = args.price.unwrap_or(PRESALE_PRICE);
    let estimate = estimate_sale_tokens(&args.amount, price);

    if output::is_json() {
        println!(
            "{}",
            json!({
                "amount": echo_payment_amount(&args.amount),
                "price": price.to_string(),
                "estimate": estimate,
            })
        );
        return Ok(());
    }

    output::section("Presale Estimate");
    output::field("Price", format!("1 GLF = {price} USDT"));
    output::field("You pay", format!("~ ${}", echo_payment_amount(&args.amount)));
    output::field("Estimated", format!("{} GLF", output::highlight(&estimate)));
    Ok(())
}
