//! Runtime settings for the EVM chain adapter.

use crate::domain::ContractAddress;

/// Everything the chain adapter needs to reach the presale deployment.
///
/// Built from the application config with the private key already resolved
/// from the environment or keystore.
#[derive(Debug, Clone)]
pub struct EvmRuntimeConfig {
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    /// Chain the deployment lives on.
    pub chain_id: u64,
    /// PaymentToken (USDT) contract.
    pub payment_token: ContractAddress,
    /// SaleToken (GLF) contract.
    pub sale_token: ContractAddress,
    /// Presale contract, also the allowance spender.
    pub presale: ContractAddress,
    /// Hex private key; `None` leaves the wallet disconnected.
    pub private_key: Option<String>,
}
