//! Presale contract client.
//!
//! Implements the chain ports over JSON-RPC with alloy: `balanceOf` on both
//! tokens, `allowance`/`approve` on the PaymentToken and `buyTokens` on the
//! presale contract. Writes are signed locally by the configured key.

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use alloy_provider::network::EthereumWallet;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::{debug, info};

use super::pending::EvmPendingTransaction;
use super::settings::EvmRuntimeConfig;
use crate::domain::{Account, ContractAddress, TokenKind};
use crate::error::{ChainError, ConfigError, Result};
use crate::port::{PaymentToken, PendingTransaction, PresaleContract, TokenBalances};

// ERC-20 interface (minimal for balances and approval)
sol! {
    #[sol(rpc)]
    contract IERC20 {
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
    }
}

sol! {
    #[sol(rpc)]
    contract IPresale {
        function buyTokens(uint256 usdtAmount) external;
    }
}

/// JSON-RPC client for the presale deployment.
pub struct EvmClient {
    rpc_url: url::Url,
    chain_id: u64,
    signer: Option<PrivateKeySigner>,
    payment_token: Address,
    sale_token: Address,
    presale: Address,
    presale_id: ContractAddress,
}

impl EvmClient {
    /// Create a client from runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the RPC URL, a contract address or the private
    /// key cannot be parsed.
    pub fn new(config: &EvmRuntimeConfig) -> Result<Self> {
        let rpc_url: url::Url =
            config
                .rpc_url
                .parse()
                .map_err(|e: url::ParseError| ConfigError::InvalidValue {
                    field: "rpc_url",
                    reason: e.to_string(),
                })?;

        let signer = match config.private_key.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(key) => Some(PrivateKeySigner::from_str(key).map_err(|e| {
                ConfigError::InvalidValue {
                    field: "WALLET_PRIVATE_KEY",
                    reason: e.to_string(),
                }
            })?),
        };

        Ok(Self {
            rpc_url,
            chain_id: config.chain_id,
            signer,
            payment_token: parse_address(&config.payment_token)?,
            sale_token: parse_address(&config.sale_token)?,
            presale: parse_address(&config.presale)?,
            presale_id: config.presale.clone(),
        })
    }

    /// Connected account, if a signer is configured.
    #[must_use]
    pub fn account(&self) -> Option<Account> {
        self.signer
            .as_ref()
            .map(|signer| Account::new(signer.address().to_string()))
    }

    /// Chain ID configured for this deployment.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Ask the node which chain it serves.
    ///
    /// # Errors
    ///
    /// Returns an error if the RPC call fails.
    pub async fn remote_chain_id(&self) -> std::result::Result<u64, ChainError> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());
        provider
            .get_chain_id()
            .await
            .map_err(|e| ChainError::Call(e.to_string()))
    }

    fn wallet(&self) -> std::result::Result<EthereumWallet, ChainError> {
        self.signer
            .clone()
            .map(EthereumWallet::from)
            .ok_or(ChainError::NoSigner)
    }

    fn token_address(&self, token: TokenKind) -> Address {
        match token {
            TokenKind::Payment => self.payment_token,
            TokenKind::Sale => self.sale_token,
        }
    }
}

#[async_trait]
impl TokenBalances for EvmClient {
    async fn balance_of(
        &self,
        token: TokenKind,
        owner: &Account,
    ) -> std::result::Result<u128, ChainError> {
        let owner = parse_account(owner)?;
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());
        let contract = IERC20::new(self.token_address(token), &provider);

        let raw: U256 = contract
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| ChainError::Call(rpc_reason(&e)))?;

        debug!(token = %token, owner = %owner, raw = %raw, "balanceOf");
        to_u128(raw)
    }
}

#[async_trait]
impl PaymentToken for EvmClient {
    async fn allowance(
        &self,
        owner: &Account,
        spender: &ContractAddress,
    ) -> std::result::Result<u128, ChainError> {
        let owner = parse_account(owner)?;
        let spender = parse_contract(spender)?;
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());
        let usdt = IERC20::new(self.payment_token, &provider);

        let raw: U256 = usdt
            .allowance(owner, spender)
            .call()
            .await
            .map_err(|e| ChainError::Call(rpc_reason(&e)))?;

        to_u128(raw)
    }

    async fn approve(
        &self,
        spender: &ContractAddress,
        units: u128,
    ) -> std::result::Result<Box<dyn PendingTransaction>, ChainError> {
        let spender = parse_contract(spender)?;
        let provider = ProviderBuilder::new()
            .wallet(self.wallet()?)
            .connect_http(self.rpc_url.clone());
        let usdt = IERC20::new(self.payment_token, &provider);

        info!(spender = %spender, units, "Submitting approve");
        let pending = usdt
            .approve(spender, U256::from(units))
            .send()
            .await
            .map_err(|e| ChainError::Submission(rpc_reason(&e)))?;

        Ok(Box::new(EvmPendingTransaction::new(pending)))
    }
}

#[async_trait]
impl PresaleContract for EvmClient {
    fn address(&self) -> &ContractAddress {
        &self.presale_id
    }

    async fn buy_tokens(
        &self,
        units: u128,
    ) -> std::result::Result<Box<dyn PendingTransaction>, ChainError> {
        let provider = ProviderBuilder::new()
            .wallet(self.wallet()?)
            .connect_http(self.rpc_url.clone());
        let presale = IPresale::new(self.presale, &provider);

        info!(presale = %self.presale, units, "Submitting buyTokens");
        let pending = presale
            .buyTokens(U256::from(units))
            .send()
            .await
            .map_err(|e| ChainError::Submission(rpc_reason(&e)))?;

        Ok(Box::new(EvmPendingTransaction::new(pending)))
    }
}

/// Best human-readable reason for a failed contract call: the node's error
/// payload message (revert reason, user rejection) when present.
fn rpc_reason(err: &alloy_contract::Error) -> String {
    match err {
        alloy_contract::Error::TransportError(transport) => transport
            .as_error_resp()
            .map_or_else(|| transport.to_string(), |payload| payload.message.to_string()),
        other => other.to_string(),
    }
}

fn to_u128(raw: U256) -> std::result::Result<u128, ChainError> {
    u128::try_from(raw).map_err(|_| ChainError::Overflow(raw.to_string()))
}

fn parse_account(account: &Account) -> std::result::Result<Address, ChainError> {
    Address::from_str(account.as_str()).map_err(|e| ChainError::InvalidAddress {
        address: account.to_string(),
        reason: e.to_string(),
    })
}

fn parse_contract(contract: &ContractAddress) -> std::result::Result<Address, ChainError> {
    Address::from_str(contract.as_str()).map_err(|e| ChainError::InvalidAddress {
        address: contract.to_string(),
        reason: e.to_string(),
    })
}

fn parse_address(contract: &ContractAddress) -> Result<Address> {
    Ok(parse_contract(contract)?)
}
