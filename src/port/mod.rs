//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`TokenBalances`] - `balanceOf` for PaymentToken and SaleToken
//! - [`PaymentToken`] - ERC-20 allowance and approval
//! - [`PresaleContract`] - `buyTokens` submission
//! - [`PendingTransaction`] - confirmation wait for a submitted transaction
//! - [`Notifier`] - rendering of user notifications

pub mod outbound;

pub use outbound::approval::PaymentToken;
pub use outbound::ledger::{PendingTransaction, PresaleContract, TokenBalances};
pub use outbound::notifier::{Notifier, NullNotifier};
