use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate configuration file without touching the network.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("RPC", &config.network.rpc_url);
    output::field("Chain ID", config.network.chain_id);
    output::field("USDT", &config.contracts.payment_token);
    output::field("GLF", &config.contracts.sale_token);
    output::field("Presale", &config.contracts.presale);
    output::field("Price", format!("{} USDT", config.presale.price));
    match config.presale.confirmation_timeout_secs {
        Some(secs) => output::field("Confirm wait", format!("{secs}s")),
        None => output::field("Confirm wait", "unbounded"),
    }

    if config.wallet.is_connected() {
        output::success("Wallet credentials detected");
    } else {
        output::warning("Wallet credentials not configured (set WALLET_PRIVATE_KEY to buy)");
    }

    Ok(())
}
