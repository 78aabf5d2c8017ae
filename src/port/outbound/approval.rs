//! Token approval port for ERC-20 spending workflows.
//!
//! The presale contract pulls PaymentToken from the buyer, so the buyer must
//! first grant it an allowance. This port reads that allowance and raises it.

use async_trait::async_trait;

use super::ledger::PendingTransaction;
use crate::domain::{Account, ContractAddress};
use crate::error::ChainError;

/// Port for the PaymentToken's ERC-20 allowance surface.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait PaymentToken: Send + Sync {
    /// Current amount `spender` may move out of `owner`'s balance, in base
    /// units.
    ///
    /// # Errors
    ///
    /// Returns an error if the allowance cannot be read from the chain.
    async fn allowance(&self, owner: &Account, spender: &ContractAddress)
        -> Result<u128, ChainError>;

    /// Submit `approve(spender, units)`.
    ///
    /// Resolves once the transaction has been handed to the network; the
    /// returned handle waits for confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if signing or submission fails, including the user
    /// rejecting the request.
    async fn approve(
        &self,
        spender: &ContractAddress,
        units: u128,
    ) -> Result<Box<dyn PendingTransaction>, ChainError>;
}
