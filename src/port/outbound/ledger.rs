//! Read and write ports onto the presale's token and sale contracts.

use async_trait::async_trait;

use crate::domain::{Account, Confirmation, ContractAddress, TokenKind};
use crate::error::ChainError;

/// Read-only `balanceOf` access for both presale tokens.
#[async_trait]
pub trait TokenBalances: Send + Sync {
    /// Raw balance of `owner` in the token's base units.
    ///
    /// # Errors
    ///
    /// Returns an error on provider or network failure.
    async fn balance_of(&self, token: TokenKind, owner: &Account) -> Result<u128, ChainError>;
}

/// The presale contract.
#[async_trait]
pub trait PresaleContract: Send + Sync {
    /// Address the buyer must approve as spender.
    fn address(&self) -> &ContractAddress;

    /// Submit `buyTokens(units)` paying `units` of PaymentToken.
    ///
    /// # Errors
    ///
    /// Returns an error if signing or submission fails.
    async fn buy_tokens(&self, units: u128) -> Result<Box<dyn PendingTransaction>, ChainError>;
}

/// A submitted transaction awaiting inclusion.
#[async_trait]
pub trait PendingTransaction: Send {
    /// Hash of the submitted transaction.
    fn tx_hash(&self) -> String;

    /// Wait until the transaction is confirmed.
    ///
    /// No timeout is applied here; callers that want one wrap the future.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Reverted`] if the transaction was mined but
    /// failed, [`ChainError::Confirmation`] if the receipt cannot be obtained.
    async fn confirm(self: Box<Self>) -> Result<Confirmation, ChainError>;
}
