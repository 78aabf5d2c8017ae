//! EVM chain integration for the presale contracts.

pub mod client;
pub mod pending;
pub mod settings;

pub use client::EvmClient;
pub use settings::EvmRuntimeConfig;
