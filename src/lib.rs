//! Presale - Token presale purchase client.
//!
//! Buys a SaleToken (GLF) from a presale contract with a PaymentToken (USDT),
//! raising the ERC-20 allowance first when it does not cover the amount.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Token amounts, rate estimation, purchase states, notifications
//! - **`port`** - Traits the workflow needs from the chain and the display
//! - **`application`** - Balance reader, allowance gate, purchase orchestrator,
//!   notification emitter
//! - **`adapter`** - alloy-backed chain client, notifiers and the CLI
//! - **`infrastructure`** - Configuration loading and session wiring
//!
//! # Example
//!
//! ```
//! use presale::domain::{estimate_sale_tokens, PRESALE_PRICE};
//!
//! assert_eq!(estimate_sale_tokens("10", PRESALE_PRICE), "100.00");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
