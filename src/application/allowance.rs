//! Allowance gate.
//!
//! Decides whether the presale contract needs a larger PaymentToken
//! allowance before a purchase. The allowance is read fresh on every call:
//! approvals can be revoked or consumed elsewhere between attempts.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Account, ContractAddress, TokenAmount};
use crate::error::ChainError;
use crate::port::PaymentToken;

/// Outcome of an allowance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceCheck {
    /// Allowance currently held by the spender, in base units.
    pub current: u128,
    /// Amount the purchase will pull, in base units.
    pub requested: u128,
}

impl AllowanceCheck {
    #[must_use]
    pub const fn needs_approval(&self) -> bool {
        self.current < self.requested
    }
}

/// Reads the spender's allowance and compares it with the requested amount.
pub struct AllowanceGate {
    token: Arc<dyn PaymentToken>,
}

impl AllowanceGate {
    pub fn new(token: Arc<dyn PaymentToken>) -> Self {
        Self { token }
    }

    /// Check whether `spender` may already pull `requested` from `owner`.
    ///
    /// # Errors
    ///
    /// Returns the chain error if the allowance cannot be read.
    pub async fn check(
        &self,
        owner: &Account,
        spender: &ContractAddress,
        requested: TokenAmount,
    ) -> Result<AllowanceCheck, ChainError> {
        let current = self.token.allowance(owner, spender).await?;
        let check = AllowanceCheck {
            current,
            requested: requested.units(),
        };
        debug!(
            owner = %owner,
            spender = %spender,
            current = check.current,
            requested = check.requested,
            needs_approval = check.needs_approval(),
            "Allowance checked"
        );
        Ok(check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    use crate::domain::TokenKind;
    use crate::port::PendingTransaction;

    struct FixedAllowance {
        allowance: Mutex<u128>,
        reads: Mutex<usize>,
    }

    #[async_trait]
    impl PaymentToken for FixedAllowance {
        async fn allowance(
            &self,
            _owner: &Account,
            _spender: &ContractAddress,
        ) -> Result<u128, ChainError> {
            *self.reads.lock() += 1;
            Ok(*self.allowance.lock())
        }

        async fn approve(
            &self,
            _spender: &ContractAddress,
            _units: u128,
        ) -> Result<Box<dyn PendingTransaction>, ChainError> {
            Err(ChainError::NoSigner)
        }
    }

    fn gate(allowance: u128) -> (AllowanceGate, Arc<FixedAllowance>) {
        let token = Arc::new(FixedAllowance {
            allowance: Mutex::new(allowance),
            reads: Mutex::new(0),
        });
        (AllowanceGate::new(token.clone()), token)
    }

    fn ten_usdt() -> TokenAmount {
        TokenAmount::from_units(TokenKind::Payment, 10_000_000)
    }

    #[tokio::test]
    async fn sufficient_allowance_needs_no_approval() {
        let (gate, _) = gate(10_000_000);
        let check = gate
            .check(&"0xowner".into(), &"0xspender".into(), ten_usdt())
            .await
            .unwrap();
        assert!(!check.needs_approval());
    }

    #[tokio::test]
    async fn short_allowance_needs_approval() {
        let (gate, _) = gate(9_999_999);
        let check = gate
            .check(&"0xowner".into(), &"0xspender".into(), ten_usdt())
            .await
            .unwrap();
        assert!(check.needs_approval());
        assert_eq!(check.requested, 10_000_000);
    }

    #[tokio::test]
    async fn allowance_is_reread_every_check() {
        let (gate, token) = gate(10_000_000);
        let owner = Account::from("0xowner");
        let spender = ContractAddress::from("0xspender");

        assert!(!gate.check(&owner, &spender, ten_usdt()).await.unwrap().needs_approval());
        *token.allowance.lock() = 0;
        assert!(gate.check(&owner, &spender, ten_usdt()).await.unwrap().needs_approval());
        assert_eq!(*token.reads.lock(), 2);
    }
}
