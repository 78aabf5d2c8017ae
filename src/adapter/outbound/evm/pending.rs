//! Confirmation wait for submitted transactions.

use alloy_provider::network::Ethereum;
use alloy_provider::PendingTransactionBuilder;
use async_trait::async_trait;
use tracing::debug;

use crate::domain::Confirmation;
use crate::error::ChainError;
use crate::port::PendingTransaction;

/// A transaction handed to the node, not yet known to be mined.
pub struct EvmPendingTransaction {
    inner: PendingTransactionBuilder<Ethereum>,
}

impl EvmPendingTransaction {
    pub const fn new(inner: PendingTransactionBuilder<Ethereum>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PendingTransaction for EvmPendingTransaction {
    fn tx_hash(&self) -> String {
        format!("{:?}", self.inner.tx_hash())
    }

    async fn confirm(self: Box<Self>) -> Result<Confirmation, ChainError> {
        let receipt = self
            .inner
            .get_receipt()
            .await
            .map_err(|e| ChainError::Confirmation(e.to_string()))?;

        let tx_hash = format!("{:?}", receipt.transaction_hash);
        if !receipt.status() {
            return Err(ChainError::Reverted { tx_hash });
        }

        debug!(tx_hash = %tx_hash, block = ?receipt.block_number, "Transaction confirmed");
        Ok(Confirmation {
            tx_hash,
            block_number: receipt.block_number,
        })
    }
}
