//! CLI module graph.

pub mod allowance;
pub mod balances;
pub mod buy;
pub mod check;
pub mod command;
pub mod estimate;
pub mod output;
