//! Handler for the `allowance` command.

use std::sync::Arc;

use super::command::AllowanceArgs;
use super::output;
use crate::application::AllowanceGate;
use crate::domain::{TokenAmount, TokenKind};
use crate::error::Result;
use crate::infrastructure::bootstrap::PresaleSession;
use crate::infrastructure::config::settings::Config;
use crate::port::{NullNotifier, PresaleContract};

/// Report whether the presale contract may already spend `amount`.
pub async fn execute(args: &AllowanceArgs, config: &Config) -> Result<()> {
    let requested = TokenAmount::parse(TokenKind::Payment, &args.amount)?;
    let session = PresaleSession::build(config, Arc::new(NullNotifier))?;
    let Some(account) = session.account.as_ref() else {
        output::warning("Wallet not connected (set WALLET_PRIVATE_KEY)");
        return Ok(());
    };
    let spender = session.client.address().clone();

    let gate = AllowanceGate::new(session.client.clone());
    let pb = output::spinner("Fetching current allowance...");
    let check = match gate.check(account, &spender, requested).await {
        Ok(check) => {
            output::spinner_success(&pb, "Allowance fetched");
            check
        }
        Err(e) => {
            output::spinner_fail(&pb, "Allowance check failed");
            return Err(e.into());
        }
    };

    let current = TokenAmount::from_units(TokenKind::Payment, check.current);
    output::section("Allowance");
    output::field("Wallet", account);
    output::field("Spender", &spender);
    output::field("Allowance", current);
    output::field("Requested", requested);
    if check.needs_approval() {
        output::warning("Approval required before purchase");
    } else {
        output::success("Allowance covers the requested amount");
    }
    Ok(())
}
