//! Domain validation errors for core domain types.
//!
//! These errors are returned when a user-entered amount cannot be turned
//! into an exact on-chain quantity, or when a raw on-chain quantity cannot
//! be represented for display.
//!
//! # Examples
//!
//! ```
//! use presale::domain::error::DomainError;
//! use presale::domain::{TokenAmount, TokenKind};
//!
//! // USDT carries six decimals, so a seventh is rejected.
//! let result = TokenAmount::parse(TokenKind::Payment, "1.0000001");
//! assert!(matches!(result, Err(DomainError::ExcessPrecision { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input is empty or not a decimal number.
    #[error("invalid amount '{input}'")]
    InvalidAmount {
        /// The raw input that failed to parse.
        input: String,
    },

    /// Amount must be strictly positive to be actionable.
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The parsed non-positive amount.
        amount: rust_decimal::Decimal,
    },

    /// Amount has more fractional digits than the token supports.
    #[error("amount {amount} has more than {decimals} decimal places")]
    ExcessPrecision {
        /// The parsed amount.
        amount: rust_decimal::Decimal,
        /// The token's fixed precision.
        decimals: u32,
    },

    /// Quantity does not fit the target representation.
    #[error("amount out of range: {0}")]
    Overflow(String),
}
