//! Outbound adapters (driven side).

pub mod evm;
pub mod notifier;
