//! Wallet configuration for signing presale transactions.

use serde::Deserialize;

/// Wallet configuration.
///
/// Private key is loaded from `WALLET_PRIVATE_KEY` env var at runtime (never
/// from the config file). Without a key the wallet is treated as
/// disconnected: balances and purchases are unavailable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    /// Optional keystore path for encrypted wallet storage.
    #[serde(default)]
    pub keystore_path: Option<String>,
    /// Private key loaded from `WALLET_PRIVATE_KEY` env var at runtime
    #[serde(skip)]
    pub private_key: Option<String>,
}

impl WalletConfig {
    /// True when a signing key is available.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.private_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
