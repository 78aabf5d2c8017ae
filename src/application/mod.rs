//! Application services: balance reading, allowance gating, notifications
//! and the purchase workflow that ties them together.

pub mod allowance;
pub mod balance;
pub mod notification;
pub mod purchase;

pub use allowance::{AllowanceCheck, AllowanceGate};
pub use balance::BalanceReader;
pub use notification::{ExpiryPolicy, NotificationEmitter, NOTIFICATION_TTL};
pub use purchase::{PurchaseOrchestrator, PURCHASE_SUCCESS_MESSAGE};
