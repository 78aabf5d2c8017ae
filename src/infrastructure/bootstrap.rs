//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::evm::EvmClient;
use crate::application::{BalanceReader, NotificationEmitter, PurchaseOrchestrator};
use crate::domain::Account;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{Notifier, PaymentToken, PresaleContract, TokenBalances};

/// Fully wired presale session for one wallet.
pub struct PresaleSession {
    /// Chain client shared by all services.
    pub client: Arc<EvmClient>,
    /// Connected account; `None` when no key is configured.
    pub account: Option<Account>,
    /// Purchase workflow, owning balances and notifications.
    pub orchestrator: PurchaseOrchestrator,
}

impl PresaleSession {
    /// Wire the chain client, balance reader, notifications and purchase
    /// workflow from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the chain client cannot be built.
    pub fn build(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let client = Arc::new(EvmClient::new(&config.evm_runtime())?);
        let account = client.account();

        let balances_port: Arc<dyn TokenBalances> = client.clone();
        let token: Arc<dyn PaymentToken> = client.clone();
        let presale: Arc<dyn PresaleContract> = client.clone();

        let balances = Arc::new(BalanceReader::new(balances_port));
        let notifications = NotificationEmitter::with_options(
            notifier,
            config.presale.notification_ttl(),
            config.presale.notification_expiry,
        );
        let orchestrator = PurchaseOrchestrator::new(token, presale, balances, notifications)
            .with_price(config.presale.price)
            .with_confirmation_timeout(config.presale.confirmation_timeout());

        info!(
            chain_id = config.network.chain_id,
            presale = %config.contracts.presale,
            connected = account.is_some(),
            "Presale session ready"
        );

        Ok(Self {
            client,
            account,
            orchestrator,
        })
    }
}
