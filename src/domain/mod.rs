//! Chain-agnostic presale domain types.

pub mod amount;
pub mod balance;
pub mod error;
pub mod id;
pub mod notification;
pub mod purchase;
pub mod rate;

pub use amount::{format_2dp, TokenAmount, TokenKind};
pub use balance::Balances;
pub use error::DomainError;
pub use id::{Account, ContractAddress};
pub use notification::{Notification, NotificationKind};
pub use purchase::{Confirmation, PurchaseReceipt, PurchaseState};
pub use rate::{estimate_sale_tokens, PRESALE_PRICE};
