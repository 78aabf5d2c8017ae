//! Purchase workflow states.

use std::fmt;

use serde::Serialize;

/// Where a purchase attempt currently stands.
///
/// `Idle` is both the start and the end of every attempt; there is no
/// terminal failure state, so a failed purchase can always be retried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseState {
    #[default]
    Idle,
    /// Allowance-raising transaction submitted, waiting for confirmation.
    AwaitingApproval,
    /// Purchase transaction submitted, waiting for confirmation.
    AwaitingConfirmation,
}

impl PurchaseState {
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Progress line shown while the workflow is suspended.
    #[must_use]
    pub const fn status_text(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::AwaitingApproval => Some("Approving USDT..."),
            Self::AwaitingConfirmation => Some("Confirming purchase..."),
        }
    }
}

impl fmt::Display for PurchaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::AwaitingApproval => write!(f, "awaiting_approval"),
            Self::AwaitingConfirmation => write!(f, "awaiting_confirmation"),
        }
    }
}

/// Transaction accepted into the ledger's canonical state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub tx_hash: String,
    pub block_number: Option<u64>,
}

/// Result of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    /// Present only when an allowance had to be raised first.
    pub approval: Option<Confirmation>,
    pub purchase: Confirmation,
    /// PaymentToken base units spent.
    pub paid_units: u128,
}
