//! Handler for the `balances` command.

use std::sync::Arc;

use super::output;
use crate::adapter::outbound::notifier::LogNotifier;
use crate::domain::TokenKind;
use crate::error::Result;
use crate::infrastructure::bootstrap::PresaleSession;
use crate::infrastructure::config::settings::Config;

/// Fetch and print both token balances of the configured wallet.
pub async fn execute(config: &Config) -> Result<()> {
    let session = PresaleSession::build(config, Arc::new(LogNotifier))?;
    let Some(account) = session.account.as_ref() else {
        output::warning("Wallet not connected (set WALLET_PRIVATE_KEY)");
        return Ok(());
    };

    let reader = session.orchestrator.balances();
    let pb = output::spinner("Fetching balances...");
    let Some(balances) = reader.refresh(Some(account)).await else {
        output::spinner_fail(&pb, "Balances unavailable");
        output::note("See the log output for the RPC error");
        return Ok(());
    };
    output::spinner_success(&pb, "Balances fetched");

    if output::is_json() {
        println!("{}", serde_json::to_string(&balances)?);
        return Ok(());
    }

    output::section("Balances");
    output::field("Wallet", account);
    output::field(
        "USDT",
        format!("{} USDT", balances.display(TokenKind::Payment)),
    );
    output::field(
        "GLF",
        format!("{} GLF", output::highlight(balances.display(TokenKind::Sale))),
    );
    Ok(())
}
