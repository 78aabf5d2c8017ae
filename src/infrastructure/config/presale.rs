//! Network, contract and presale workflow settings.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ExpiryPolicy;
use crate::domain::rate::PRESALE_PRICE;

/// JSON-RPC connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint of the chain hosting the presale.
    pub rpc_url: String,
    /// Expected chain ID. Defaults to BNB Smart Chain mainnet.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
}

const fn default_chain_id() -> u64 {
    56
}

/// Deployed contract addresses.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractsConfig {
    /// PaymentToken (USDT) contract.
    pub payment_token: String,
    /// SaleToken (GLF) contract.
    pub sale_token: String,
    /// Presale contract.
    pub presale: String,
}

/// Purchase workflow settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PresaleConfig {
    /// PaymentToken paid per SaleToken.
    #[serde(default = "default_price")]
    pub price: Decimal,

    /// How long a notification stays on display, in milliseconds.
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,

    /// Timer behavior when a notification replaces another.
    #[serde(default)]
    pub notification_expiry: ExpiryPolicy,

    /// Upper bound on each confirmation wait. Absent means wait until the
    /// wallet or node gives up.
    #[serde(default)]
    pub confirmation_timeout_secs: Option<u64>,
}

const fn default_price() -> Decimal {
    PRESALE_PRICE
}

const fn default_notification_ttl_ms() -> u64 {
    5000
}

impl PresaleConfig {
    #[must_use]
    pub const fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    #[must_use]
    pub fn confirmation_timeout(&self) -> Option<Duration> {
        self.confirmation_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for PresaleConfig {
    fn default() -> Self {
        Self {
            price: default_price(),
            notification_ttl_ms: default_notification_ttl_ms(),
            notification_expiry: ExpiryPolicy::default(),
            confirmation_timeout_secs: None,
        }
    }
}
