//! Cached wallet balances.

use rust_decimal::Decimal;
use serde::Serialize;

use super::amount::{format_2dp, TokenKind};

/// Last fetched balances of both tokens for one account.
///
/// Always replaced as a pair so the two values never drift apart by more
/// than one refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Balances {
    pub payment: Decimal,
    pub sale: Decimal,
}

impl Balances {
    #[must_use]
    pub fn get(&self, token: TokenKind) -> Decimal {
        match token {
            TokenKind::Payment => self.payment,
            TokenKind::Sale => self.sale,
        }
    }

    /// Balance rounded to two decimals for display.
    #[must_use]
    pub fn display(&self, token: TokenKind) -> String {
        format_2dp(self.get(token))
    }
}
