//! Token kinds and exact base-unit quantities.
//!
//! On-chain amounts are integers scaled by the token's decimal precision.
//! User-facing amounts are decimals. Conversion between the two is exact:
//! input with more fractional digits than the token supports is rejected,
//! never rounded.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::error::DomainError;

/// The two tokens the presale deals in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Stable-valued token used to pay (USDT, 6 decimals).
    Payment,
    /// Token being sold (GLF, 18 decimals).
    Sale,
}

impl TokenKind {
    /// Fixed decimal precision of the token contract.
    #[must_use]
    pub const fn decimals(self) -> u32 {
        match self {
            Self::Payment => 6,
            Self::Sale => 18,
        }
    }

    /// Ticker used in logs and output.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Payment => "USDT",
            Self::Sale => "GLF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A token quantity held in the token's smallest integer unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    token: TokenKind,
    units: u128,
}

impl TokenAmount {
    /// Wrap a raw base-unit quantity.
    #[must_use]
    pub const fn from_units(token: TokenKind, units: u128) -> Self {
        Self { token, units }
    }

    /// Parse a user-entered decimal string into exact base units.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] for empty or non-numeric input,
    /// [`DomainError::NonPositiveAmount`] for zero or negative values,
    /// [`DomainError::ExcessPrecision`] when the input has more fractional
    /// digits than the token supports, and [`DomainError::Overflow`] when the
    /// scaled value does not fit.
    pub fn parse(token: TokenKind, input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let amount = Decimal::from_str_exact(trimmed).map_err(|_| DomainError::InvalidAmount {
            input: input.to_string(),
        })?;

        if amount <= Decimal::ZERO {
            return Err(DomainError::NonPositiveAmount { amount });
        }

        let decimals = token.decimals();
        let normalized = amount.normalize();
        if normalized.scale() > decimals {
            return Err(DomainError::ExcessPrecision { amount, decimals });
        }

        let mantissa = u128::try_from(normalized.mantissa())
            .map_err(|e| DomainError::Overflow(e.to_string()))?;
        let factor = 10u128
            .checked_pow(decimals - normalized.scale())
            .ok_or_else(|| DomainError::Overflow(format!("10^{decimals}")))?;
        let units = mantissa
            .checked_mul(factor)
            .ok_or_else(|| DomainError::Overflow(amount.to_string()))?;

        Ok(Self { token, units })
    }

    #[must_use]
    pub const fn token(&self) -> TokenKind {
        self.token
    }

    /// Quantity in the token's smallest unit.
    #[must_use]
    pub const fn units(&self) -> u128 {
        self.units
    }

    /// Convert to a human-readable decimal using the token's precision.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] when the quantity exceeds the
    /// 96-bit mantissa of [`Decimal`].
    pub fn to_decimal(&self) -> Result<Decimal, DomainError> {
        let signed =
            i128::try_from(self.units).map_err(|e| DomainError::Overflow(e.to_string()))?;
        Decimal::try_from_i128_with_scale(signed, self.token.decimals())
            .map(|d| d.normalize())
            .map_err(|e| DomainError::Overflow(e.to_string()))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(value) => write!(f, "{value} {}", self.token),
            Err(_) => write!(f, "{} base units of {}", self.units, self.token),
        }
    }
}

/// Format a decimal with exactly two fractional digits, rounding half away
/// from zero.
#[must_use]
pub fn format_2dp(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn decimals_per_token() {
        assert_eq!(TokenKind::Payment.decimals(), 6);
        assert_eq!(TokenKind::Sale.decimals(), 18);
    }

    #[test]
    fn parse_whole_payment_amount() {
        let amount = TokenAmount::parse(TokenKind::Payment, "10").unwrap();
        assert_eq!(amount.units(), 10_000_000);
    }

    #[test]
    fn parse_fractional_payment_amount() {
        let amount = TokenAmount::parse(TokenKind::Payment, "2.5").unwrap();
        assert_eq!(amount.units(), 2_500_000);
    }

    #[test]
    fn parse_smallest_unit() {
        let amount = TokenAmount::parse(TokenKind::Payment, "0.000001").unwrap();
        assert_eq!(amount.units(), 1);
    }

    #[test]
    fn parse_ignores_trailing_zeros_beyond_precision() {
        // 1.5000000 has seven fractional digits but only one significant one.
        let amount = TokenAmount::parse(TokenKind::Payment, "1.5000000").unwrap();
        assert_eq!(amount.units(), 1_500_000);
    }

    #[test]
    fn parse_trims_whitespace() {
        let amount = TokenAmount::parse(TokenKind::Payment, "  3 ").unwrap();
        assert_eq!(amount.units(), 3_000_000);
    }

    #[test]
    fn parse_rejects_excess_precision() {
        let err = TokenAmount::parse(TokenKind::Payment, "1.0000001").unwrap_err();
        assert!(matches!(err, DomainError::ExcessPrecision { decimals: 6, .. }));
    }

    #[test]
    fn parse_sale_token_accepts_eighteen_decimals() {
        let amount = TokenAmount::parse(TokenKind::Sale, "0.000000000000000001").unwrap();
        assert_eq!(amount.units(), 1);
    }

    #[test]
    fn parse_rejects_empty_and_garbage() {
        assert!(matches!(
            TokenAmount::parse(TokenKind::Payment, ""),
            Err(DomainError::InvalidAmount { .. })
        ));
        assert!(matches!(
            TokenAmount::parse(TokenKind::Payment, "abc"),
            Err(DomainError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn parse_rejects_zero_and_negative() {
        assert!(matches!(
            TokenAmount::parse(TokenKind::Payment, "0"),
            Err(DomainError::NonPositiveAmount { .. })
        ));
        assert!(matches!(
            TokenAmount::parse(TokenKind::Payment, "-5"),
            Err(DomainError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn to_decimal_uses_token_precision() {
        let usdt = TokenAmount::from_units(TokenKind::Payment, 1_234_567);
        assert_eq!(usdt.to_decimal().unwrap(), dec!(1.234567));

        let glf = TokenAmount::from_units(TokenKind::Sale, 25 * 10u128.pow(18));
        assert_eq!(glf.to_decimal().unwrap(), dec!(25));
    }

    #[test]
    fn to_decimal_overflows_past_mantissa() {
        let huge = TokenAmount::from_units(TokenKind::Sale, u128::MAX);
        assert!(matches!(huge.to_decimal(), Err(DomainError::Overflow(_))));
    }

    #[test]
    fn format_2dp_pads_and_rounds() {
        assert_eq!(format_2dp(dec!(100)), "100.00");
        assert_eq!(format_2dp(dec!(1.005)), "1.01");
        assert_eq!(format_2dp(dec!(0.5)), "0.50");
    }
}
