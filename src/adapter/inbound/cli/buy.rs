//! Handler for the `buy` command.

use std::sync::Arc;

use dialoguer::Confirm;

use super::command::BuyArgs;
use super::output;
use crate::adapter::outbound::notifier::ConsoleNotifier;
use crate::domain::TokenKind;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap::PresaleSession;
use crate::infrastructure::config::settings::Config;

/// Run the approve-then-buy workflow for the requested amount.
///
/// The outcome is reported through the notifier; a failed purchase is
/// returned as an error so the process exits non-zero. Transactions are only
/// sent after the prompt is accepted or `--yes` is given; JSON mode cannot
/// prompt and refuses to buy without `--yes`.
pub async fn execute(args: &BuyArgs, config: &Config) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    let session = PresaleSession::build(config, Arc::new(ConsoleNotifier))?;
    let orchestrator = &session.orchestrator;
    let account = session.account.as_ref();

    if account.is_some() && !args.yes && output::is_json() {
        return Err(Error::ConfirmationRequired);
    }

    orchestrator.balances().on_account_changed(account).await;
    match (&args.amount, args.max) {
        (_, true) => orchestrator.set_max(),
        (Some(amount), false) => orchestrator.set_input(amount.as_str()),
        (None, false) => {}
    }

    let balances = orchestrator.balances().cached();
    output::section("Buy GLF");
    if let Some(account) = account {
        output::field("Wallet", account);
        output::field(
            "Balance",
            format!(
                "{} USDT / {} GLF",
                balances.display(TokenKind::Payment),
                balances.display(TokenKind::Sale)
            ),
        );
    }
    output::field("You pay", format!("~ ${}", orchestrator.input_echo()));
    output::field(
        "Estimated",
        format!("{} GLF", output::highlight(orchestrator.estimate())),
    );

    if account.is_some() && !args.yes {
        let proceed = Confirm::new()
            .with_prompt("Proceed with purchase?")
            .default(false)
            .interact()?;
        if !proceed {
            output::warning("Purchase cancelled by user");
            return Ok(());
        }
    }

    let pb = output::spinner("Checking allowance...");
    let progress = pb.clone();
    let mut states = orchestrator.subscribe();
    let watcher = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = *states.borrow_and_update();
            if let Some(text) = state.status_text() {
                progress.set_message(text);
            }
        }
    });

    let result = orchestrator.submit(account).await;
    watcher.abort();

    match result {
        Ok(receipt) => {
            output::spinner_success(&pb, "Purchase confirmed");
            if let Some(approval) = &receipt.approval {
                output::field("Approval tx", &approval.tx_hash);
            }
            output::field("Purchase tx", &receipt.purchase.tx_hash);
            let balances = orchestrator.balances().cached();
            output::field(
                "Balance",
                format!(
                    "{} USDT / {} GLF",
                    balances.display(TokenKind::Payment),
                    balances.display(TokenKind::Sale)
                ),
            );
            Ok(())
        }
        Err(e) => {
            pb.finish_and_clear();
            Err(e.into())
        }
    }
}
