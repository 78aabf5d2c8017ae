//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `WALLET_PRIVATE_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use presale::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::logging::LoggingConfig;
use super::presale::{ContractsConfig, NetworkConfig, PresaleConfig};
use super::wallet::WalletConfig;
use crate::adapter::outbound::evm::EvmRuntimeConfig;
use crate::domain::ContractAddress;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Chain connection settings.
    pub network: NetworkConfig,

    /// Token and presale contract addresses.
    pub contracts: ContractsConfig,

    /// Purchase workflow settings.
    #[serde(default)]
    pub presale: PresaleConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Wallet configuration for transaction signing.
    ///
    /// Private key is loaded from `WALLET_PRIVATE_KEY` environment variable.
    #[serde(default)]
    pub wallet: WalletConfig,
}

fn read_keystore_password() -> Result<String> {
    if let Ok(password) = std::env::var("PRESALE_KEYSTORE_PASSWORD") {
        return Ok(password);
    }
    if let Ok(path) = std::env::var("PRESALE_KEYSTORE_PASSWORD_FILE") {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let password = contents.trim().to_string();
        if password.is_empty() {
            return Err(ConfigError::MissingField {
                field: "PRESALE_KEYSTORE_PASSWORD_FILE",
            }
            .into());
        }
        return Ok(password);
    }

    Err(ConfigError::MissingField {
        field: "PRESALE_KEYSTORE_PASSWORD",
    }
    .into())
}

fn decrypt_keystore_private_key(path: &str, password: &str) -> Result<String> {
    use alloy_signer_local::PrivateKeySigner;

    let signer = PrivateKeySigner::decrypt_keystore(path, password).map_err(|e| {
        ConfigError::InvalidValue {
            field: "keystore_path",
            reason: e.to_string(),
        }
    })?;
    Ok(format!("{:x}", signer.to_bytes()))
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the private key from the `WALLET_PRIVATE_KEY` environment variable
    /// or decrypts it from a keystore file if `keystore_path` is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., malformed contract address, zero price)
    /// - Keystore decryption fails when using keystore authentication
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Load private key from environment variable (never from config file for security)
        config.wallet.private_key = std::env::var("WALLET_PRIVATE_KEY").ok();
        if config.wallet.private_key.is_none() {
            if let Some(ref keystore_path) = config.wallet.keystore_path {
                let password = read_keystore_password()?;
                config.wallet.private_key =
                    Some(decrypt_keystore_private_key(keystore_path, &password)?);
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.network.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }

        for (field, address) in [
            ("payment_token", &self.contracts.payment_token),
            ("sale_token", &self.contracts.sale_token),
            ("presale", &self.contracts.presale),
        ] {
            if address.trim().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
            if !ContractAddress::new(address.trim()).is_well_formed() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("'{address}' is not a 0x-prefixed 20-byte hex address"),
                }
                .into());
            }
        }

        if self.presale.price <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "price",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.presale.notification_ttl_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notification_ttl_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.presale.confirmation_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "confirmation_timeout_secs",
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Settings for the chain adapter, with the resolved private key.
    #[must_use]
    pub fn evm_runtime(&self) -> EvmRuntimeConfig {
        EvmRuntimeConfig {
            rpc_url: self.network.rpc_url.trim().to_string(),
            chain_id: self.network.chain_id,
            payment_token: ContractAddress::new(self.contracts.payment_token.trim()),
            sale_token: ContractAddress::new(self.contracts.sale_token.trim()),
            presale: ContractAddress::new(self.contracts.presale.trim()),
            private_key: self.wallet.private_key.clone(),
        }
    }
}
