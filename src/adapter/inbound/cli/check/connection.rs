use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::evm::EvmClient;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Test RPC connectivity and that the node serves the configured chain.
pub async fn execute_connection<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path.as_ref())?;
    let client = EvmClient::new(&config.evm_runtime())?;

    output::section("Connection Check");
    output::field("RPC", &config.network.rpc_url);
    output::field("Chain ID", client.chain_id());

    let pb = output::spinner("Querying chain ID...");
    let remote = match client.remote_chain_id().await {
        Ok(id) => {
            output::spinner_success(&pb, "RPC reachable");
            id
        }
        Err(e) => {
            output::spinner_fail(&pb, "RPC unreachable");
            return Err(e.into());
        }
    };

    if remote != client.chain_id() {
        return Err(ConfigError::InvalidValue {
            field: "chain_id",
            reason: format!("node serves chain {remote}, config expects {}", client.chain_id()),
        }
        .into());
    }

    output::success("Connection checks passed");
    Ok(())
}
