//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the external collaborators of the purchase
//! workflow: the token and presale contracts, and the notification sink.

pub mod approval;
pub mod ledger;
pub mod notifier;
